use crate::tests::sut::{init_ledger, open_loan, xbtc};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_when_no_active_loan() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let user = Address::generate(&env);

    sut.ledger.loan_position(&user);
}

#[test]
fn should_value_loan_with_live_prices() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = open_loan(&env, &sut);

    assert_eq!(
        sut.ledger.loan_position(&borrower),
        LoanPosition {
            collateral_value: 150_000,
            debt_value: 100_000,
            collateral_ratio: 15_000,
            liquidatable: false,
        }
    );

    sut.ledger.set_token_price(&xbtc(), &4_000);

    assert_eq!(
        sut.ledger.loan_position(&borrower),
        LoanPosition {
            collateral_value: 120_000,
            debt_value: 100_000,
            collateral_ratio: 12_000,
            liquidatable: true,
        }
    );
}
