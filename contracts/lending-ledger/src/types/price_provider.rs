use common::NATIVE_UNIT_PRICE;
use lending_interface::types::error::Error;
use lending_interface::types::ledger_config::LedgerConfig;
use soroban_sdk::{Env, Map, Symbol};

use crate::storage::read_price;

/// Oracle reader caching prices for the lifetime of one call
pub struct PriceProvider<'a> {
    env: &'a Env,
    native_asset: Symbol,
    prices: Map<Symbol, i128>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env, config: &LedgerConfig) -> Self {
        Self {
            env,
            native_asset: config.native_asset.clone(),
            prices: Map::new(env),
        }
    }

    pub fn price(&mut self, asset: &Symbol) -> Result<i128, Error> {
        if let Some(price) = self.prices.get(asset.clone()) {
            return Ok(price);
        }

        let price = match read_price(self.env, asset) {
            Some(price) => price,
            None if *asset == self.native_asset => NATIVE_UNIT_PRICE,
            None => return Err(Error::UnknownAsset),
        };

        self.prices.set(asset.clone(), price);

        Ok(price)
    }

    pub fn value_of(&mut self, asset: &Symbol, amount: i128) -> Result<i128, Error> {
        let price = self.price(asset)?;

        common::value_of(amount, price).ok_or(Error::MathOverflowError)
    }
}
