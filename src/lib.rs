//! Interactive account-balance manager.
//!
//! A single in-memory balance, viewed and mutated through a registry of
//! operations, driven by a line-oriented menu. The library exposes the whole
//! program (`run::run`) over generic streams so tests and benches can drive
//! it; the binary only wires stdio into it.

pub mod account;
pub mod menu;
pub mod run;
