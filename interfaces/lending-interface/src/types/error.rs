use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Paused = 2,
    InvalidLedgerConfig = 3,

    InsufficientCollateral = 101,
    NoActiveLoan = 102,
    AboveLiquidationThreshold = 103,
    LoanAlreadyActive = 104,

    InsufficientBalance = 200,

    UnknownAsset = 300,
    InvalidPrice = 301,
    InvalidAmount = 302,

    MathOverflowError = 400,
}
