//! The operation contract and its variants, one file per operation.

use std::fmt;

use thiserror::Error;

use super::format::format_amount;
use super::Amount;

pub mod credit;
pub mod debit;
pub mod fee;
pub mod history;
pub mod interest;
pub mod transfer;
pub mod view_balance;

/// Identifies an operation at dispatch time.
///
/// The built-ins are closed variants; `Custom` carries any identifier
/// registered at runtime, so the set stays open without touching the
/// dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    ViewBalance,
    Credit,
    Debit,
    Transfer,
    History,
    Custom(String),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::ViewBalance => f.write_str("view_balance"),
            Kind::Credit => f.write_str("credit"),
            Kind::Debit => f.write_str("debit"),
            Kind::Transfer => f.write_str("transfer"),
            Kind::History => f.write_str("history"),
            Kind::Custom(id) => f.write_str(id),
        }
    }
}

/// Why an operation refused to run.
///
/// The `Display` strings are printed verbatim by the front end (with a
/// trailing newline added when the result is built) and byte-compared by the
/// transcript tests, so they are a wire format: never reword them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Credit and debit take a mandatory amount argument.
    #[error("Amount required for {0} operation.")]
    AmountRequired(Kind),

    #[error("Credit amount must be positive.")]
    NegativeCredit,

    #[error("Debit amount must be positive.")]
    NegativeDebit,

    /// The debit exceeds the current balance; the store is left untouched.
    #[error("Insufficient funds for this debit.")]
    InsufficientFunds,

    #[error("Transfer operation not yet implemented.")]
    TransferNotImplemented,

    #[error("History operation not yet implemented.")]
    HistoryNotImplemented,

    /// The dispatcher found no factory registered for this identifier.
    #[error("Unknown operation type: {0}")]
    UnknownOperation(Kind),

    #[error("No interest on zero or negative balance.")]
    NoInterestOnNonPositiveBalance,

    #[error("Insufficient funds for fee: {}", format_amount(.0.to_owned()))]
    InsufficientFundsForFee(Amount),

    /// Adding more money to the balance would overflow the decimal range.
    #[error("Amount exceeds the representable balance.")]
    Overflow,
}

/// Outcome of one dispatched operation, consumed by the front end for
/// display only. `message` is always newline-terminated.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    pub new_balance: Option<Amount>,
}

impl OperationResult {
    pub fn success(message: String, new_balance: Amount) -> Self {
        Self {
            success: true,
            message,
            new_balance: Some(new_balance),
        }
    }

    /// A failure that left the store untouched.
    pub fn failure(error: OperationError) -> Self {
        Self {
            success: false,
            message: format!("{error}\n"),
            new_balance: None,
        }
    }

    /// Some failures still report a balance: an insufficient-funds debit
    /// carries the current, unchanged one.
    pub fn failure_with_balance(error: OperationError, balance: Amount) -> Self {
        Self {
            success: false,
            message: format!("{error}\n"),
            new_balance: Some(balance),
        }
    }
}

/// A named, invocable behavior bound to one store at construction time.
///
/// Instances are created per dispatch by the registry and discarded after
/// `execute`; they hold no state beyond the store binding and, for
/// parameterised operations, their configuration.
pub trait Operation {
    /// Run the operation. `amount` is the optional argument collected by the
    /// front end; operations that take none ignore it.
    fn execute(&self, amount: Option<Amount>) -> OperationResult;

    /// The identifier this operation answers to.
    fn kind(&self) -> Kind;
}
