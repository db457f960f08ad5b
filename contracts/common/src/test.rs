use crate::*;

mod collateral {

    use super::*;

    #[test]
    fn value_of() {
        assert_eq!(crate::value_of(30, 5_000), Some(150_000));
        assert_eq!(crate::value_of(1_000, 100), Some(100_000));
        assert_eq!(crate::value_of(i128::MAX, 2), None);
    }

    #[test]
    fn required_collateral_rounds_up() {
        // 150% of 100_000
        assert_eq!(required_collateral(100_000, 15_000), Some(150_000));
        // 150% of 3 = 4.5
        assert_eq!(required_collateral(3, 15_000), Some(5));
        assert_eq!(required_collateral(0, 15_000), Some(0));
    }

    #[test]
    fn meets_ratio_on_boundary() {
        assert!(meets_ratio(150_000, 100_000, 15_000));
        assert!(!meets_ratio(149_999, 100_000, 15_000));
        assert!(!meets_ratio(50_000, 100_000, 15_000));

        // 5 * 10_000 >= 3 * 15_000
        assert!(meets_ratio(5, 3, 15_000));
        assert!(!meets_ratio(4, 3, 15_000));
    }

    #[test]
    fn is_below_ratio_is_strict() {
        assert!(!is_below_ratio(1_300, 1_000, 13_000));
        assert!(is_below_ratio(1_299, 1_000, 13_000));
        assert!(!is_below_ratio(1_300, 1_000, 12_500));
        assert!(is_below_ratio(1_249, 1_000, 12_500));
    }

    #[test]
    fn huge_debt_never_meets_ratio() {
        let debt_value = i128::MAX / 10 * 9;

        assert_eq!(required_collateral(debt_value, 15_000), None);
        assert!(!meets_ratio(i128::MAX, debt_value, 15_000));
        assert!(is_below_ratio(i128::MAX, debt_value, 12_500));
        assert!(is_below_ratio(0, i128::MAX, 12_500));
    }

    #[test]
    fn collateral_ratio() {
        assert_eq!(crate::collateral_ratio(150_000, 100_000), Some(15_000));
        assert_eq!(crate::collateral_ratio(1_300, 1_000), Some(13_000));
        // 2 / 3 = 66.66%
        assert_eq!(crate::collateral_ratio(2, 3), Some(6_666));
        assert_eq!(crate::collateral_ratio(1, 0), None);
    }

    #[test]
    fn released_share() {
        assert_eq!(crate::released_share(30, 500, 1_000), Some(15));
        // 10 * 1 / 3 = 3.33
        assert_eq!(crate::released_share(10, 1, 3), Some(3));
        assert_eq!(crate::released_share(10, 1, 0), None);
    }

    #[test]
    fn percentage_factor() {
        assert_eq!(
            required_collateral(1_000, PERCENTAGE_FACTOR),
            Some(1_000),
            "100% ratio requires collateral equal to the debt"
        );
    }
}
