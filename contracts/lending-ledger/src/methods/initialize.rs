use lending_interface::types::error::Error;
use lending_interface::types::ledger_config::LedgerConfig;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_admin, write_config, write_pause};

use super::utils::validation::{require_admin_not_exist, require_valid_config};

pub fn initialize(env: &Env, admin: &Address, config: &LedgerConfig) -> Result<(), Error> {
    require_admin_not_exist(env);
    require_valid_config(env, config);

    write_admin(env, admin);
    write_config(env, config);
    write_pause(env, false);

    event::initialized(env, admin, config);

    Ok(())
}
