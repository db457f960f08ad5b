use lending_interface::types::error::Error;
use soroban_sdk::{Address, Env, Symbol};

use crate::event;
use crate::storage::{add_balance, read_config};
use crate::types::price_provider::PriceProvider;

use super::utils::validation::{require_not_paused, require_positive_amount};

pub fn deposit(env: &Env, who: &Address, asset: &Symbol, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let config = read_config(env)?;
    // asset must be priced before it enters the ledger
    PriceProvider::new(env, &config).price(asset)?;

    add_balance(env, who, asset, amount)?;

    event::deposit(env, who, asset, amount);

    Ok(())
}

pub fn deposit_native(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    let config = read_config(env)?;

    deposit(env, who, &config.native_asset, amount)
}
