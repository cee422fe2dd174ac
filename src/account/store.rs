use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal_macros::dec;

use super::Amount;

/// The store every operation binds to at construction time.
///
/// The program is single-threaded, so shared ownership with interior
/// mutability is enough. Exposing the store to concurrent callers would
/// require serialising each read+write pair as one atomic unit (the debit
/// path is check-then-act), so this alias is the single place to swap in a
/// lock if that ever happens.
pub type SharedStore = Rc<RefCell<BalanceStore>>;

/// Owns the single monetary value tracked by the program.
///
/// No validation happens here: `write` replaces the balance unconditionally,
/// and deciding whether a mutation is legal is the calling operation's job.
/// Keeping storage this dumb is what lets operations be added or replaced
/// through the registry without touching state management.
#[derive(Debug, PartialEq)]
pub struct BalanceStore {
    balance: Amount,
}

impl BalanceStore {
    pub const fn new(initial_balance: Amount) -> Self {
        Self {
            balance: initial_balance,
        }
    }

    /// Wrap a store in the shared handle operations bind to.
    pub fn shared(initial_balance: Amount) -> SharedStore {
        Rc::new(RefCell::new(Self::new(initial_balance)))
    }

    /// Current balance. No side effects, never fails.
    pub fn read(&self) -> Amount {
        self.balance
    }

    /// Replace the stored balance. No validation, never fails.
    pub fn write(&mut self, new_balance: Amount) {
        self.balance = new_balance;
    }
}

impl Default for BalanceStore {
    fn default() -> Self {
        Self::new(dec!(1000.00))
    }
}
