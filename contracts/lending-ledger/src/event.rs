use lending_interface::types::ledger_config::LedgerConfig;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, config: &LedgerConfig) {
    let topics = (Symbol::new(e, "initialize"), admin.clone());
    e.events().publish(
        topics,
        (
            config.min_collateral_ratio,
            config.liquidation_threshold,
            config.native_asset.clone(),
        ),
    );
}

pub(crate) fn config_changed(e: &Env, config: &LedgerConfig) {
    let topics = (Symbol::new(e, "config_changed"),);
    e.events().publish(
        topics,
        (
            config.min_collateral_ratio,
            config.liquidation_threshold,
            config.native_asset.clone(),
        ),
    );
}

pub(crate) fn pause_changed(e: &Env, value: bool) {
    let topics = (Symbol::new(e, "pause_changed"),);
    e.events().publish(topics, value);
}

pub(crate) fn price_updated(e: &Env, asset: &Symbol, price: i128) {
    let topics = (Symbol::new(e, "price_updated"), asset.clone());
    e.events().publish(topics, price);
}

pub(crate) fn deposit(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (symbol_short!("deposit"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn withdraw(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (symbol_short!("withdraw"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn borrow(
    e: &Env,
    who: &Address,
    asset: &Symbol,
    amount: i128,
    collateral_asset: &Symbol,
    collateral_amount: i128,
) {
    let topics = (symbol_short!("borrow"), who.clone());
    e.events().publish(
        topics,
        (
            asset.clone(),
            amount,
            collateral_asset.clone(),
            collateral_amount,
        ),
    );
}

pub(crate) fn repay(e: &Env, who: &Address, asset: &Symbol, amount: i128, released: i128) {
    let topics = (symbol_short!("repay"), who.clone());
    e.events().publish(topics, (asset.clone(), amount, released));
}

pub(crate) fn liquidation(
    e: &Env,
    who: &Address,
    liquidator: &Address,
    covered_debt: i128,
    liquidated_collateral: i128,
) {
    let topics = (Symbol::new(e, "liquidation"), who.clone());
    e.events().publish(
        topics,
        (liquidator.clone(), covered_debt, liquidated_collateral),
    );
}
