use crate::account::format::format_amount;
use crate::account::store::SharedStore;
use crate::account::Amount;

use super::{Kind, Operation, OperationError, OperationResult};

/// Removes an amount from the balance, only when the balance covers it.
///
/// Validation order: missing amount, negative amount, then the funds check.
/// An insufficient-funds failure still reports the current, unchanged
/// balance.
pub struct Debit {
    store: SharedStore,
}

impl Debit {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Operation for Debit {
    fn execute(&self, amount: Option<Amount>) -> OperationResult {
        let Some(amount) = amount else {
            return OperationResult::failure(OperationError::AmountRequired(Kind::Debit));
        };

        if amount < Amount::ZERO {
            return OperationResult::failure(OperationError::NegativeDebit);
        }

        let current = self.store.borrow().read();
        if current < amount {
            return OperationResult::failure_with_balance(
                OperationError::InsufficientFunds,
                current,
            );
        }

        // current >= amount >= 0, so the subtraction cannot overflow.
        let new_balance = current - amount;
        self.store.borrow_mut().write(new_balance);

        let message = format!(
            "Amount debited. New balance: {}\n",
            format_amount(new_balance)
        );
        OperationResult::success(message, new_balance)
    }

    fn kind(&self) -> Kind {
        Kind::Debit
    }
}

#[cfg(test)]
mod debit_tests {
    use crate::account::store::BalanceStore;

    use super::{Debit, Operation};
    use rust_decimal_macros::dec;
    use std::rc::Rc;

    #[test]
    fn test_debit_ok() {
        let store = BalanceStore::shared(dec!(1250.00));

        let got = Debit::new(Rc::clone(&store)).execute(Some(dec!(150.00)));
        assert!(got.success);
        assert_eq!("Amount debited. New balance: 001100.00\n", got.message);
        assert_eq!(Some(dec!(1100.00)), got.new_balance);
        assert_eq!(dec!(1100.00), store.borrow().read());
    }

    #[test]
    // Debiting the whole balance is allowed; the balance reaches zero.
    fn test_debit_entire_balance() {
        let store = BalanceStore::shared(dec!(100.00));

        let got = Debit::new(Rc::clone(&store)).execute(Some(dec!(100.00)));
        assert!(got.success);
        assert_eq!("Amount debited. New balance: 000000.00\n", got.message);
        assert_eq!(dec!(0), store.borrow().read());
    }

    #[test]
    fn test_debit_zero_succeeds() {
        let store = BalanceStore::shared(dec!(100.00));

        let got = Debit::new(Rc::clone(&store)).execute(Some(dec!(0)));
        assert!(got.success);
        assert_eq!("Amount debited. New balance: 000100.00\n", got.message);
        assert_eq!(dec!(100.00), store.borrow().read());
    }

    #[test]
    fn test_debit_insufficient_funds() {
        let store = BalanceStore::shared(dec!(1100.00));

        let got = Debit::new(Rc::clone(&store)).execute(Some(dec!(2000.00)));
        assert!(!got.success);
        assert_eq!("Insufficient funds for this debit.\n", got.message);
        // The failure still reports the current, unchanged balance.
        assert_eq!(Some(dec!(1100.00)), got.new_balance);
        assert_eq!(dec!(1100.00), store.borrow().read());
    }

    #[test]
    fn test_debit_missing_amount() {
        let store = BalanceStore::shared(dec!(100.00));

        let got = Debit::new(Rc::clone(&store)).execute(None);
        assert!(!got.success);
        assert_eq!("Amount required for debit operation.\n", got.message);
        assert_eq!(dec!(100.00), store.borrow().read());
    }

    #[test]
    fn test_debit_negative_amount() {
        let store = BalanceStore::shared(dec!(100.00));

        let got = Debit::new(Rc::clone(&store)).execute(Some(dec!(-25.00)));
        assert!(!got.success);
        assert_eq!("Debit amount must be positive.\n", got.message);
        assert_eq!(dec!(100.00), store.borrow().read());
    }
}
