use crate::account::format::format_amount;
use crate::account::store::SharedStore;
use crate::account::Amount;

use super::{Kind, Operation, OperationResult};

/// Read-only report of the current balance. Never fails, never mutates.
pub struct ViewBalance {
    store: SharedStore,
}

impl ViewBalance {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Operation for ViewBalance {
    fn execute(&self, _amount: Option<Amount>) -> OperationResult {
        let current = self.store.borrow().read();

        let message = format!("Current balance: {}\n", format_amount(current));
        OperationResult::success(message, current)
    }

    fn kind(&self) -> Kind {
        Kind::ViewBalance
    }
}
