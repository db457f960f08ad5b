use lending_interface::types::error::Error;
use lending_interface::types::loan::Loan;
use soroban_sdk::{assert_with_error, log, Address, Env};

use crate::event;
use crate::storage::{
    add_balance, read_balance, read_config, read_loan, remove_loan, write_balance,
};
use crate::types::loan_valuation::LoanValuation;
use crate::types::price_provider::PriceProvider;

use super::utils::validation::{require_not_paused, require_sufficient_balance};

pub fn liquidate(env: &Env, liquidator: &Address, who: &Address) -> Result<(), Error> {
    liquidator.require_auth();

    require_not_paused(env);

    let loan = read_loan(env, who).ok_or(Error::NoActiveLoan)?;

    let config = read_config(env)?;
    let mut price_provider = PriceProvider::new(env, &config);
    let valuation = LoanValuation::new(&mut price_provider, &loan)?;

    let is_undercollateralized = valuation.is_below(config.liquidation_threshold);
    assert_with_error!(
        env,
        is_undercollateralized,
        Error::AboveLiquidationThreshold
    );

    do_liquidate(env, liquidator, who, &loan)?;

    log!(
        env,
        "loan liquidated",
        who.clone(),
        valuation.collateral_value,
        valuation.debt_value
    );
    event::liquidation(
        env,
        who,
        liquidator,
        loan.borrowed_amount,
        loan.collateral_amount,
    );

    Ok(())
}

/// Liquidator covers the whole debt from its deposit balance and takes the whole collateral
fn do_liquidate(
    env: &Env,
    liquidator: &Address,
    who: &Address,
    loan: &Loan,
) -> Result<(), Error> {
    let liquidator_debt_balance = read_balance(env, liquidator, &loan.borrow_asset);
    require_sufficient_balance(env, liquidator_debt_balance, loan.borrowed_amount);

    let liquidator_debt_balance_after = liquidator_debt_balance
        .checked_sub(loan.borrowed_amount)
        .ok_or(Error::MathOverflowError)?;

    write_balance(
        env,
        liquidator,
        &loan.borrow_asset,
        liquidator_debt_balance_after,
    )?;
    add_balance(
        env,
        liquidator,
        &loan.collateral_asset,
        loan.collateral_amount,
    )?;
    remove_loan(env, who);

    Ok(())
}
