use thiserror::Error;

/// Recoverable command failures. State is never mutated on the error path;
/// the caller reports the failure and play continues. Terminal conditions
/// (win, bankruptcy, director loss) are not errors — see `GameOutcome`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("invalid selection index")]
    InvalidIndex,

    #[error("no pen can house this animal")]
    NoSuitablePen,

    #[error("animal cannot reproduce (too young, infected, or dying)")]
    NotEligible,

    #[error("animals of the same gender cannot breed")]
    SameGender,

    #[error("animal is not infected")]
    NotInfected,

    #[error("pen is at capacity")]
    NoCapacity,

    #[error("pen cannot house this offspring")]
    NotEligiblePen,

    #[error("pen still contains animals")]
    PenNotEmpty,

    #[error("the zoo already has a director")]
    DirectorAlreadyExists,

    #[error("a loan is already outstanding")]
    LoanOutstanding,

    #[error("only one animal may be bought per day at this stage")]
    DailyPurchaseLimit,

    #[error("the market was already refreshed today")]
    MarketAlreadyRefreshed,
}

pub type CommandResult<T> = Result<T, CommandError>;
