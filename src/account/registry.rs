use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use super::operation::{
    credit::Credit, debit::Debit, history::History, transfer::Transfer,
    view_balance::ViewBalance, Kind, Operation, OperationError, OperationResult,
};
use super::store::SharedStore;
use super::Amount;

/// Builds one operation instance bound to the shared store. Factories run
/// once per dispatch; the instance is discarded after execution.
pub type OperationFactory = Box<dyn Fn() -> Box<dyn Operation>>;

/// The operation registry and dispatcher.
///
/// Maps each identifier to exactly one factory at any time; registering an
/// identifier again overwrites the previous mapping. Adding a new operation
/// kind means registering a factory, never modifying the dispatch code.
pub struct Operations {
    store: SharedStore,
    factories: HashMap<Kind, OperationFactory>,
}

impl Operations {
    /// A registry with the five built-in operations registered.
    pub fn new(store: SharedStore) -> Self {
        let mut factories: HashMap<Kind, OperationFactory> = HashMap::new();

        let s = Rc::clone(&store);
        factories.insert(
            Kind::ViewBalance,
            Box::new(move || Box::new(ViewBalance::new(Rc::clone(&s)))),
        );
        let s = Rc::clone(&store);
        factories.insert(
            Kind::Credit,
            Box::new(move || Box::new(Credit::new(Rc::clone(&s)))),
        );
        let s = Rc::clone(&store);
        factories.insert(
            Kind::Debit,
            Box::new(move || Box::new(Debit::new(Rc::clone(&s)))),
        );
        factories.insert(Kind::Transfer, Box::new(|| Box::new(Transfer)));
        factories.insert(Kind::History, Box::new(|| Box::new(History)));

        Self { store, factories }
    }

    /// The store this registry's built-ins are bound to. Custom operations
    /// registered at runtime bind to it through this handle.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Insert or overwrite the factory for `kind`. Always succeeds.
    pub fn register(&mut self, kind: Kind, factory: OperationFactory) {
        self.factories.insert(kind, factory);
    }

    /// Look up `kind`, build the operation and run it.
    ///
    /// An unregistered identifier yields a failure result naming it, without
    /// touching the store; everything else is the operation's own result,
    /// returned unchanged.
    pub fn execute(&self, kind: &Kind, amount: Option<Amount>) -> OperationResult {
        let Some(factory) = self.factories.get(kind) else {
            warn!(%kind, "unknown operation type");
            return OperationResult::failure(OperationError::UnknownOperation(kind.clone()));
        };

        debug!(%kind, "dispatching operation");
        factory().execute(amount)
    }

    /// Static catalog of the built-in operations, for discovery and menus.
    /// Descriptions only; no behavior is attached.
    pub fn available_operations() -> HashMap<Kind, &'static str> {
        HashMap::from([
            (Kind::ViewBalance, "View account balance"),
            (Kind::Credit, "Credit account"),
            (Kind::Debit, "Debit account"),
            (Kind::Transfer, "Transfer funds (future)"),
            (Kind::History, "View transaction history (future)"),
        ])
    }
}
