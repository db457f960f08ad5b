use lending_interface::types::error::Error;
use soroban_sdk::{log, Env, Symbol};

use crate::event;
use crate::storage::write_price;

use super::utils::validation::{require_admin, require_positive_price};

pub fn set_token_price(env: &Env, asset: &Symbol, price: i128) -> Result<(), Error> {
    require_admin(env)?;
    require_positive_price(env, price);

    write_price(env, asset, price);

    log!(env, "price updated", asset.clone(), price);
    event::price_updated(env, asset, price);

    Ok(())
}
