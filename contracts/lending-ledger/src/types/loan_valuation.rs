use common::{collateral_ratio, is_below_ratio, meets_ratio};
use lending_interface::types::error::Error;
use lending_interface::types::loan::Loan;
use lending_interface::types::loan_position::LoanPosition;

use super::price_provider::PriceProvider;

/// Loan sides expressed in the price currency
#[derive(Debug, Clone, Copy)]
pub struct LoanValuation {
    pub collateral_value: i128,
    pub debt_value: i128,
}

impl LoanValuation {
    pub fn new(price_provider: &mut PriceProvider, loan: &Loan) -> Result<Self, Error> {
        Ok(Self {
            collateral_value: price_provider
                .value_of(&loan.collateral_asset, loan.collateral_amount)?,
            debt_value: price_provider.value_of(&loan.borrow_asset, loan.borrowed_amount)?,
        })
    }

    pub fn meets(&self, ratio: u32) -> bool {
        meets_ratio(self.collateral_value, self.debt_value, ratio)
    }

    pub fn is_below(&self, ratio: u32) -> bool {
        is_below_ratio(self.collateral_value, self.debt_value, ratio)
    }

    pub fn get_position(&self, liquidation_threshold: u32) -> Result<LoanPosition, Error> {
        Ok(LoanPosition {
            collateral_value: self.collateral_value,
            debt_value: self.debt_value,
            collateral_ratio: collateral_ratio(self.collateral_value, self.debt_value)
                .ok_or(Error::MathOverflowError)?,
            liquidatable: self.is_below(liquidation_threshold),
        })
    }
}
