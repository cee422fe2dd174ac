use crate::account::format::format_amount;
use crate::account::store::SharedStore;
use crate::account::Amount;

use super::{Kind, Operation, OperationError, OperationResult};

/// Debits a fixed management fee from the balance.
///
/// Like `Interest`, a registry-extension example rather than a built-in:
/// the fee amount is configuration, fixed when the factory is registered.
pub struct Fee {
    store: SharedStore,
    amount: Amount,
}

impl Fee {
    pub fn new(store: SharedStore, amount: Amount) -> Self {
        Self { store, amount }
    }
}

impl Operation for Fee {
    fn execute(&self, _amount: Option<Amount>) -> OperationResult {
        let current = self.store.borrow().read();
        if current < self.amount {
            return OperationResult::failure(OperationError::InsufficientFundsForFee(self.amount));
        }

        let new_balance = current - self.amount;
        self.store.borrow_mut().write(new_balance);

        let message = format!(
            "Management fee deducted: {}\nNew balance: {}\n",
            format_amount(self.amount),
            format_amount(new_balance),
        );
        OperationResult::success(message, new_balance)
    }

    fn kind(&self) -> Kind {
        Kind::Custom("fees".to_string())
    }
}
