use soroban_fixed_point_math::FixedPoint;

use crate::PERCENTAGE_FACTOR;

/// Value of `amount` units priced at `price` minor units each
pub fn value_of(amount: i128, price: i128) -> Option<i128> {
    amount.checked_mul(price)
}

/// Smallest collateral value that covers `debt_value` at `ratio`.
/// Ratio is expressed in basis points of PERCENTAGE_FACTOR and the result is rounded up,
/// so `collateral >= required_collateral(..)` is an exact integer comparison
pub fn required_collateral(debt_value: i128, ratio: u32) -> Option<i128> {
    debt_value.fixed_mul_ceil(i128::from(ratio), i128::from(PERCENTAGE_FACTOR))
}

/// Returns true when `collateral_value >= debt_value * ratio / PERCENTAGE_FACTOR`.
/// A required collateral past i128::MAX can never be met
pub fn meets_ratio(collateral_value: i128, debt_value: i128, ratio: u32) -> bool {
    match required_collateral(debt_value, ratio) {
        Some(required) => collateral_value >= required,
        None => false,
    }
}

/// Returns true when `collateral_value < debt_value * ratio / PERCENTAGE_FACTOR`
pub fn is_below_ratio(collateral_value: i128, debt_value: i128, ratio: u32) -> bool {
    !meets_ratio(collateral_value, debt_value, ratio)
}

/// Collateralization ratio in basis points, rounded down.
/// None when there is no debt
pub fn collateral_ratio(collateral_value: i128, debt_value: i128) -> Option<i128> {
    if debt_value == 0 {
        return None;
    }

    collateral_value.fixed_div_floor(debt_value, i128::from(PERCENTAGE_FACTOR))
}

/// Part of `locked` released after `paid` of `owed` is returned, rounded down
pub fn released_share(locked: i128, paid: i128, owed: i128) -> Option<i128> {
    if owed == 0 {
        return None;
    }

    locked.fixed_mul_floor(paid, owed)
}
