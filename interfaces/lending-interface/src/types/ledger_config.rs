use soroban_sdk::{contracttype, Symbol};

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Collateral value required to open a loan, in percents of the debt value.
    /// 150% - 15_000
    pub min_collateral_ratio: u32,
    /// Collateral ratio below which the loan may be liquidated. Same units
    pub liquidation_threshold: u32,
    /// Asset of the single-asset deposit variant
    pub native_asset: Symbol,
}

impl LedgerConfig {
    pub fn is_valid(&self) -> bool {
        self.liquidation_threshold > 0
            && self.liquidation_threshold <= self.min_collateral_ratio
    }
}
