use crate::account::Amount;

use super::{Kind, Operation, OperationError, OperationResult};

/// Placeholder for a future transaction-history feature; always fails and
/// never touches the store.
pub struct History;

impl Operation for History {
    fn execute(&self, _amount: Option<Amount>) -> OperationResult {
        OperationResult::failure(OperationError::HistoryNotImplemented)
    }

    fn kind(&self) -> Kind {
        Kind::History
    }
}
