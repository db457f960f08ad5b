use lending_interface::types::error::Error;
use lending_interface::types::ledger_config::LedgerConfig;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_admin, has_loan, paused, read_admin};

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = read_admin(env)?;
    admin.require_auth();
    Ok(())
}

/// Liquidation threshold must be positive and must not exceed the origination ratio
pub fn require_valid_config(env: &Env, config: &LedgerConfig) {
    assert_with_error!(env, config.is_valid(), Error::InvalidLedgerConfig);
}

pub fn require_not_paused(env: &Env) {
    assert_with_error!(env, !paused(env), Error::Paused);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_positive_price(env: &Env, price: i128) {
    assert_with_error!(env, price > 0, Error::InvalidPrice);
}

pub fn require_sufficient_balance(env: &Env, balance: i128, amount: i128) {
    assert_with_error!(env, balance >= amount, Error::InsufficientBalance);
}

pub fn require_no_active_loan(env: &Env, who: &Address) {
    assert_with_error!(env, !has_loan(env, who), Error::LoanAlreadyActive);
}
