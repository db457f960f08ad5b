use lending_interface::types::error::Error;
use lending_interface::types::loan::Loan;
use soroban_sdk::{assert_with_error, Address, Env, Symbol};

use crate::event;
use crate::storage::{add_balance, read_balance, read_config, write_balance, write_loan};
use crate::types::loan_valuation::LoanValuation;
use crate::types::price_provider::PriceProvider;

use super::utils::validation::{
    require_no_active_loan, require_not_paused, require_positive_amount,
    require_sufficient_balance,
};

pub fn borrow(
    env: &Env,
    who: &Address,
    asset: &Symbol,
    amount: i128,
    collateral_asset: &Symbol,
    collateral_amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);
    require_positive_amount(env, collateral_amount);

    let config = read_config(env)?;
    let mut price_provider = PriceProvider::new(env, &config);

    let loan = Loan {
        borrow_asset: asset.clone(),
        borrowed_amount: amount,
        collateral_asset: collateral_asset.clone(),
        collateral_amount,
        originated_at: env.ledger().timestamp(),
    };

    let valuation = LoanValuation::new(&mut price_provider, &loan)?;
    let is_collateralized = valuation.meets(config.min_collateral_ratio);
    assert_with_error!(env, is_collateralized, Error::InsufficientCollateral);

    require_no_active_loan(env, who);

    do_borrow(env, who, &loan)?;

    event::borrow(env, who, asset, amount, collateral_asset, collateral_amount);

    Ok(())
}

/// Locks the collateral out of the deposit balance, credits the borrowed amount
/// and records the loan
fn do_borrow(env: &Env, who: &Address, loan: &Loan) -> Result<(), Error> {
    let who_collat = read_balance(env, who, &loan.collateral_asset);
    require_sufficient_balance(env, who_collat, loan.collateral_amount);

    let who_collat_after = who_collat
        .checked_sub(loan.collateral_amount)
        .ok_or(Error::MathOverflowError)?;

    write_balance(env, who, &loan.collateral_asset, who_collat_after)?;
    add_balance(env, who, &loan.borrow_asset, loan.borrowed_amount)?;
    write_loan(env, who, loan);

    Ok(())
}
