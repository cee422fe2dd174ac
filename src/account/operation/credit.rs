use crate::account::format::format_amount;
use crate::account::store::SharedStore;
use crate::account::Amount;

use super::{Kind, Operation, OperationError, OperationResult};

/// Adds an amount to the balance.
///
/// Validation runs before any state is touched: a missing amount fails
/// first, then a negative one. Zero is non-negative, so crediting zero
/// succeeds.
pub struct Credit {
    store: SharedStore,
}

impl Credit {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Operation for Credit {
    fn execute(&self, amount: Option<Amount>) -> OperationResult {
        let Some(amount) = amount else {
            return OperationResult::failure(OperationError::AmountRequired(Kind::Credit));
        };

        if amount < Amount::ZERO {
            return OperationResult::failure(OperationError::NegativeCredit);
        }

        let current = self.store.borrow().read();
        let Some(new_balance) = current.checked_add(amount) else {
            return OperationResult::failure(OperationError::Overflow);
        };
        self.store.borrow_mut().write(new_balance);

        let message = format!(
            "Amount credited. New balance: {}\n",
            format_amount(new_balance)
        );
        OperationResult::success(message, new_balance)
    }

    fn kind(&self) -> Kind {
        Kind::Credit
    }
}
