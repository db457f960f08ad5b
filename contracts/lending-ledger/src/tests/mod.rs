pub mod loan_position;
pub mod sut;
