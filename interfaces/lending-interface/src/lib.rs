#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Symbol};
use types::error::Error;
use types::ledger_config::LedgerConfig;
use types::loan::Loan;
use types::loan_position::LoanPosition;

pub mod types;

pub struct Spec;

/// Interface for the lending ledger
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingLedgerClient")]
pub trait LendingLedgerTrait {
    fn initialize(env: Env, admin: Address, config: LedgerConfig) -> Result<(), Error>;

    fn version() -> u32;

    fn admin(env: Env) -> Option<Address>;

    fn set_config(env: Env, config: LedgerConfig) -> Result<(), Error>;

    fn config(env: Env) -> Option<LedgerConfig>;

    fn set_pause(env: Env, value: bool) -> Result<(), Error>;

    fn paused(env: Env) -> bool;

    /// Sets the unit price of `asset`. Applies to every subsequent call
    fn set_token_price(env: Env, asset: Symbol, price: i128) -> Result<(), Error>;

    fn get_token_price(env: Env, asset: Symbol) -> Result<i128, Error>;

    fn deposit(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error>;

    /// Deposit into the configured native asset
    fn deposit_native(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn withdraw(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error>;

    fn get_deposit_balance(env: Env, account: Address, asset: Symbol) -> i128;

    /// Opens a loan of `amount` of `asset` locking `collateral_amount` of the
    /// deposited `collateral_asset`
    fn borrow(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
        collateral_asset: Symbol,
        collateral_amount: i128,
    ) -> Result<(), Error>;

    /// Pays back up to `amount` of the active loan from the deposit balance
    /// and unlocks a proportional share of the collateral
    fn repay(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn get_loan(env: Env, who: Address) -> Option<Loan>;

    fn loan_position(env: Env, who: Address) -> Result<LoanPosition, Error>;

    /// Covers the debt of `who` and seizes its collateral once the position
    /// falls below the liquidation threshold
    fn liquidate(env: Env, liquidator: Address, who: Address) -> Result<(), Error>;
}
