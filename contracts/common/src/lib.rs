#![deny(warnings)]
#![no_std]

mod collateral;
#[cfg(test)]
mod test;

pub use collateral::*;

/// Percent representation, 1% - 100, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Price of the native asset while no explicit price is set
pub const NATIVE_UNIT_PRICE: i128 = 1;
