use lending_interface::types::error::Error;
use soroban_sdk::{Env, Symbol};

use crate::storage::read_config;
use crate::types::price_provider::PriceProvider;

pub fn get_token_price(env: &Env, asset: &Symbol) -> Result<i128, Error> {
    let config = read_config(env)?;

    PriceProvider::new(env, &config).price(asset)
}
