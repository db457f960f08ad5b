pub mod loan_valuation;
pub mod price_provider;
