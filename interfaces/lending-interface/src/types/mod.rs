pub mod error;
pub mod ledger_config;
pub mod loan;
pub mod loan_position;
