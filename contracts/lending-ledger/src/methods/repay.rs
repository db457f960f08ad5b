use common::released_share;
use lending_interface::types::error::Error;
use lending_interface::types::loan::Loan;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    add_balance, read_balance, read_loan, remove_loan, write_balance, write_loan,
};

use super::utils::validation::{
    require_not_paused, require_positive_amount, require_sufficient_balance,
};

pub fn repay(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let loan = read_loan(env, who).ok_or(Error::NoActiveLoan)?;

    let (payback_amount, released_collateral) = do_repay(env, who, &loan, amount)?;

    event::repay(
        env,
        who,
        &loan.borrow_asset,
        payback_amount,
        released_collateral,
    );

    Ok(())
}

/// Returns
/// i128: amount of the debt paid back
/// i128: collateral returned to the deposit balance
fn do_repay(
    env: &Env,
    who: &Address,
    loan: &Loan,
    amount: i128,
) -> Result<(i128, i128), Error> {
    let (payback_amount, released_collateral, is_repaid) = if amount >= loan.borrowed_amount {
        (loan.borrowed_amount, loan.collateral_amount, true)
    } else {
        let released_collateral =
            released_share(loan.collateral_amount, amount, loan.borrowed_amount)
                .ok_or(Error::MathOverflowError)?;
        (amount, released_collateral, false)
    };

    let who_balance = read_balance(env, who, &loan.borrow_asset);
    require_sufficient_balance(env, who_balance, payback_amount);

    let who_balance_after = who_balance
        .checked_sub(payback_amount)
        .ok_or(Error::MathOverflowError)?;

    write_balance(env, who, &loan.borrow_asset, who_balance_after)?;
    add_balance(env, who, &loan.collateral_asset, released_collateral)?;

    if is_repaid {
        remove_loan(env, who);
    } else {
        let loan_after = Loan {
            borrowed_amount: loan
                .borrowed_amount
                .checked_sub(payback_amount)
                .ok_or(Error::MathOverflowError)?,
            collateral_amount: loan
                .collateral_amount
                .checked_sub(released_collateral)
                .ok_or(Error::MathOverflowError)?,
            ..loan.clone()
        };
        write_loan(env, who, &loan_after);
    }

    Ok((payback_amount, released_collateral))
}
