use lending_interface::types::error::Error;
use soroban_sdk::{Address, Env, Symbol};

use crate::event;
use crate::storage::{read_balance, write_balance};

use super::utils::validation::{
    require_not_paused, require_positive_amount, require_sufficient_balance,
};

pub fn withdraw(env: &Env, who: &Address, asset: &Symbol, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let balance = read_balance(env, who, asset);
    require_sufficient_balance(env, balance, amount);

    let balance_after = balance
        .checked_sub(amount)
        .ok_or(Error::MathOverflowError)?;
    write_balance(env, who, asset, balance_after)?;

    event::withdraw(env, who, asset, amount);

    Ok(())
}
