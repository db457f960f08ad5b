use lending_interface::types::error::Error;
use lending_interface::types::ledger_config::LedgerConfig;
use lending_interface::types::loan::Loan;
use soroban_sdk::{assert_with_error, contracttype, Address, Env, Symbol};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    Pause,
    Price(Symbol),
    Balance(Address, Symbol),
    Loan(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_config(env: &Env, config: &LedgerConfig) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<LedgerConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn paused(env: &Env) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(false)
}

pub fn write_pause(env: &Env, value: bool) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Pause, &value);
}

pub fn read_price(env: &Env, asset: &Symbol) -> Option<i128> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Price(asset.clone()))
}

pub fn write_price(env: &Env, asset: &Symbol, price: i128) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::Price(asset.clone()), &price);
}

pub fn read_balance(env: &Env, who: &Address, asset: &Symbol) -> i128 {
    let key = DataKey::Balance(who.clone(), asset.clone());
    let balance = env.storage().persistent().get(&key);

    if balance.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    balance.unwrap_or(0i128)
}

/// Zero balance drops the entry
pub fn write_balance(
    env: &Env,
    who: &Address,
    asset: &Symbol,
    balance: i128,
) -> Result<(), Error> {
    assert_with_error!(env, !balance.is_negative(), Error::InsufficientBalance);

    let key = DataKey::Balance(who.clone(), asset.clone());

    if balance == 0 {
        env.storage().persistent().remove(&key);
        return Ok(());
    }

    env.storage().persistent().set(&key, &balance);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );

    Ok(())
}

pub fn add_balance(env: &Env, who: &Address, asset: &Symbol, amount: i128) -> Result<i128, Error> {
    let balance = read_balance(env, who, asset)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_balance(env, who, asset, balance)?;

    Ok(balance)
}

pub fn read_loan(env: &Env, who: &Address) -> Option<Loan> {
    let key = DataKey::Loan(who.clone());
    let loan = env.storage().persistent().get(&key);

    if loan.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    loan
}

pub fn has_loan(env: &Env, who: &Address) -> bool {
    env.storage().persistent().has(&DataKey::Loan(who.clone()))
}

pub fn write_loan(env: &Env, who: &Address, loan: &Loan) {
    let key = DataKey::Loan(who.clone());
    env.storage().persistent().set(&key, loan);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn remove_loan(env: &Env, who: &Address) {
    env.storage().persistent().remove(&DataKey::Loan(who.clone()));
}
