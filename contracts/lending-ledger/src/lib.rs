#![deny(warnings)]
#![no_std]

use lending_interface::types::{
    error::Error, ledger_config::LedgerConfig, loan::Loan, loan_position::LoanPosition,
};
use lending_interface::LendingLedgerTrait;
use methods::{
    borrow::borrow,
    deposit::{deposit, deposit_native},
    get_token_price::get_token_price,
    initialize::initialize,
    liquidate::liquidate,
    loan_position::loan_position,
    repay::repay,
    set_config::set_config,
    set_pause::set_pause,
    set_token_price::set_token_price,
    withdraw::withdraw,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct LendingLedger;

#[contractimpl]
impl LendingLedgerTrait for LendingLedger {
    fn initialize(env: Env, admin: Address, config: LedgerConfig) -> Result<(), Error> {
        initialize(&env, &admin, &config)
    }

    fn version() -> u32 {
        1
    }

    fn admin(env: Env) -> Option<Address> {
        read_admin(&env).ok()
    }

    fn set_config(env: Env, config: LedgerConfig) -> Result<(), Error> {
        set_config(&env, &config)
    }

    fn config(env: Env) -> Option<LedgerConfig> {
        read_config(&env).ok()
    }

    fn set_pause(env: Env, value: bool) -> Result<(), Error> {
        set_pause(&env, value)
    }

    fn paused(env: Env) -> bool {
        paused(&env)
    }

    fn set_token_price(env: Env, asset: Symbol, price: i128) -> Result<(), Error> {
        set_token_price(&env, &asset, price)
    }

    fn get_token_price(env: Env, asset: Symbol) -> Result<i128, Error> {
        get_token_price(&env, &asset)
    }

    fn deposit(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error> {
        deposit(&env, &who, &asset, amount)
    }

    fn deposit_native(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        deposit_native(&env, &who, amount)
    }

    fn withdraw(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error> {
        withdraw(&env, &who, &asset, amount)
    }

    fn get_deposit_balance(env: Env, account: Address, asset: Symbol) -> i128 {
        read_balance(&env, &account, &asset)
    }

    fn borrow(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
        collateral_asset: Symbol,
        collateral_amount: i128,
    ) -> Result<(), Error> {
        borrow(
            &env,
            &who,
            &asset,
            amount,
            &collateral_asset,
            collateral_amount,
        )
    }

    fn repay(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        repay(&env, &who, amount)
    }

    fn get_loan(env: Env, who: Address) -> Option<Loan> {
        read_loan(&env, &who)
    }

    fn loan_position(env: Env, who: Address) -> Result<LoanPosition, Error> {
        loan_position(&env, &who)
    }

    fn liquidate(env: Env, liquidator: Address, who: Address) -> Result<(), Error> {
        liquidate(&env, &liquidator, &who)
    }
}
