#![cfg(test)]

use crate::*;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{symbol_short, Env};

pub const DAY: u64 = 24 * 60 * 60;

pub const STX_PRICE: i128 = 100;
pub const XBTC_PRICE: i128 = 5_000;
pub const ALEX_PRICE: i128 = 50;

/// 150%
pub const MIN_COLLATERAL_RATIO: u32 = 15_000;
/// 125%
pub const LIQUIDATION_THRESHOLD: u32 = 12_500;

pub(crate) fn stx() -> Symbol {
    symbol_short!("stx")
}

pub(crate) fn xbtc() -> Symbol {
    symbol_short!("xbtc")
}

pub(crate) fn alex() -> Symbol {
    symbol_short!("alex")
}

pub(crate) fn native() -> Symbol {
    symbol_short!("native")
}

pub(crate) struct Sut<'a> {
    pub ledger: LendingLedgerClient<'a>,
    pub admin: Address,
}

pub(crate) fn default_config() -> LedgerConfig {
    LedgerConfig {
        min_collateral_ratio: MIN_COLLATERAL_RATIO,
        liquidation_threshold: LIQUIDATION_THRESHOLD,
        native_asset: native(),
    }
}

pub(crate) fn create_ledger_contract<'a>(env: &Env) -> LendingLedgerClient<'a> {
    LendingLedgerClient::new(env, &env.register_contract(None, LendingLedger))
}

/// Initialized ledger with stx, xbtc and alex priced
pub(crate) fn init_ledger<'a>(env: &Env) -> Sut<'a> {
    env.budget().reset_unlimited();

    let admin = Address::generate(env);
    let ledger = create_ledger_contract(env);

    ledger.initialize(&admin, &default_config());

    ledger.set_token_price(&stx(), &STX_PRICE);
    ledger.set_token_price(&xbtc(), &XBTC_PRICE);
    ledger.set_token_price(&alex(), &ALEX_PRICE);

    Sut { ledger, admin }
}

/// Borrower deposits 30 xbtc and borrows 1000 stx against all of it.
/// 30 * 5000 = 150_000 collateral for 1000 * 100 = 100_000 debt, exactly 150%
pub(crate) fn open_loan(env: &Env, sut: &Sut) -> Address {
    let borrower = Address::generate(env);

    sut.ledger.deposit(&borrower, &xbtc(), &30);
    sut.ledger.borrow(&borrower, &stx(), &1_000, &xbtc(), &30);

    borrower
}

/// Liquidator holding enough stx to cover the loan opened by `open_loan`
pub(crate) fn funded_liquidator(env: &Env, sut: &Sut) -> Address {
    let liquidator = Address::generate(env);
    sut.ledger.deposit(&liquidator, &stx(), &5_000);
    liquidator
}

pub(crate) fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}
