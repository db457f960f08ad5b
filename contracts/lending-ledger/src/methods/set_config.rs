use common::NATIVE_UNIT_PRICE;
use lending_interface::types::error::Error;
use lending_interface::types::ledger_config::LedgerConfig;
use soroban_sdk::Env;

use crate::event;
use crate::storage::{read_config, read_price, write_config, write_price};

use super::utils::validation::{require_admin, require_valid_config};

pub fn set_config(env: &Env, config: &LedgerConfig) -> Result<(), Error> {
    require_admin(env)?;
    require_valid_config(env, config);

    let current = read_config(env)?;

    // The previous native asset keeps its implicit unit price
    if current.native_asset != config.native_asset
        && read_price(env, &current.native_asset).is_none()
    {
        write_price(env, &current.native_asset, NATIVE_UNIT_PRICE);
    }

    write_config(env, config);

    event::config_changed(env, config);

    Ok(())
}
