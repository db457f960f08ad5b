use lending_interface::types::error::Error;
use lending_interface::types::loan_position::LoanPosition;
use soroban_sdk::{Address, Env};

use crate::storage::{read_config, read_loan};
use crate::types::loan_valuation::LoanValuation;
use crate::types::price_provider::PriceProvider;

pub fn loan_position(env: &Env, who: &Address) -> Result<LoanPosition, Error> {
    let loan = read_loan(env, who).ok_or(Error::NoActiveLoan)?;

    let config = read_config(env)?;
    let mut price_provider = PriceProvider::new(env, &config);

    LoanValuation::new(&mut price_provider, &loan)?.get_position(config.liquidation_threshold)
}
