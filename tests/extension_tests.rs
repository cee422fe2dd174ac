//! Registering new operation kinds at runtime, through the public API only.
//! Mirrors the way a downstream caller would extend the registry without
//! touching the dispatcher.

use account_engine::account::operation::fee::Fee;
use account_engine::account::operation::interest::Interest;
use account_engine::account::operation::Kind;
use account_engine::account::registry::Operations;
use account_engine::account::store::BalanceStore;
use rust_decimal_macros::dec;
use std::rc::Rc;

#[test]
fn test_interest_then_fee_scenario() {
    let mut ops = Operations::new(BalanceStore::shared(dec!(1500.00)));

    let store = Rc::clone(ops.store());
    ops.register(
        Kind::Custom("interest".to_string()),
        Box::new(move || Box::new(Interest::new(Rc::clone(&store), dec!(0.025)))),
    );
    let store = Rc::clone(ops.store());
    ops.register(
        Kind::Custom("fees".to_string()),
        Box::new(move || Box::new(Fee::new(Rc::clone(&store), dec!(10.00)))),
    );

    let got = ops.execute(&Kind::Custom("interest".to_string()), None);
    assert!(got.success);
    assert_eq!(
        "Interest applied (2.5%): 000037.50\nNew balance: 001537.50\n",
        got.message
    );

    let got = ops.execute(&Kind::Custom("fees".to_string()), None);
    assert!(got.success);
    assert_eq!(
        "Management fee deducted: 000010.00\nNew balance: 001527.50\n",
        got.message
    );

    // The built-ins observe the same store the custom operations mutated.
    let got = ops.execute(&Kind::ViewBalance, None);
    assert_eq!("Current balance: 001527.50\n", got.message);
}

#[test]
// Before registration the identifier is unknown; after it, dispatch works.
// The registry's mapping is live, not a construction-time snapshot.
fn test_identifier_unknown_until_registered() {
    let mut ops = Operations::new(BalanceStore::shared(dec!(1000.00)));
    let kind = Kind::Custom("interest".to_string());

    let got = ops.execute(&kind, None);
    assert!(!got.success);
    assert_eq!("Unknown operation type: interest\n", got.message);

    let store = Rc::clone(ops.store());
    ops.register(
        kind.clone(),
        Box::new(move || Box::new(Interest::new(Rc::clone(&store), dec!(0.02)))),
    );

    let got = ops.execute(&kind, None);
    assert!(got.success);
    assert_eq!(
        "Interest applied (2.0%): 000020.00\nNew balance: 001020.00\n",
        got.message
    );
}
