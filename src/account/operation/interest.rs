use rust_decimal_macros::dec;

use crate::account::format::format_amount;
use crate::account::store::SharedStore;
use crate::account::Amount;

use super::{Kind, Operation, OperationError, OperationResult};

/// Credits `balance * rate` to the account.
///
/// Not registered by default: this operation exists to show that new kinds
/// plug into the registry without touching the dispatcher. It carries its
/// configuration (the rate) alongside the store binding.
pub struct Interest {
    store: SharedStore,
    rate: Amount,
}

impl Interest {
    /// `rate` is a fraction, e.g. `0.025` for 2.5%.
    pub fn new(store: SharedStore, rate: Amount) -> Self {
        Self { store, rate }
    }
}

impl Operation for Interest {
    fn execute(&self, _amount: Option<Amount>) -> OperationResult {
        let current = self.store.borrow().read();
        if current <= Amount::ZERO {
            return OperationResult::failure(OperationError::NoInterestOnNonPositiveBalance);
        }

        let Some(interest) = current.checked_mul(self.rate) else {
            return OperationResult::failure(OperationError::Overflow);
        };
        let Some(new_balance) = current.checked_add(interest) else {
            return OperationResult::failure(OperationError::Overflow);
        };
        self.store.borrow_mut().write(new_balance);

        // The rate is displayed as a percentage with one fractional digit.
        let mut rate_percent = (self.rate * dec!(100)).round_dp(1);
        rate_percent.rescale(1);

        let message = format!(
            "Interest applied ({rate_percent}%): {}\nNew balance: {}\n",
            format_amount(interest),
            format_amount(new_balance),
        );
        OperationResult::success(message, new_balance)
    }

    fn kind(&self) -> Kind {
        Kind::Custom("interest".to_string())
    }
}
