use soroban_sdk::{contracttype, Symbol};

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub borrow_asset: Symbol,
    pub borrowed_amount: i128,
    pub collateral_asset: Symbol,
    /// Collateral locked out of the borrower deposit balance
    pub collateral_amount: i128,
    /// Ledger timestamp of origination
    pub originated_at: u64,
}
