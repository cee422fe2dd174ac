use crate::account::Amount;

use super::{Kind, Operation, OperationError, OperationResult};

/// Placeholder for a future transfer feature. Registered by default so the
/// identifier is known, but executing it always fails and never touches the
/// store.
pub struct Transfer;

impl Operation for Transfer {
    fn execute(&self, _amount: Option<Amount>) -> OperationResult {
        OperationResult::failure(OperationError::TransferNotImplemented)
    }

    fn kind(&self) -> Kind {
        Kind::Transfer
    }
}
