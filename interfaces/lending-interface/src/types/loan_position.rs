use soroban_sdk::contracttype;

/// Live valuation of an active loan
#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanPosition {
    pub collateral_value: i128,
    pub debt_value: i128,
    /// Collateral value to debt value, 100% - 10_000
    pub collateral_ratio: i128,
    pub liquidatable: bool,
}
