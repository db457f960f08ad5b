pub mod borrow;
pub mod deposit;
pub mod get_token_price;
pub mod initialize;
pub mod liquidate;
pub mod loan_position;
pub mod repay;
pub mod set_config;
pub mod set_pause;
pub mod set_token_price;
pub mod withdraw;

mod utils;
