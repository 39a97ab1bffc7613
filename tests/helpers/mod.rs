// Fixtures shared by the commission test suites
//
// Builds a small world: one middleman enrolled in one commission type, a
// customer referred by that middleman, and posted USD invoices ready for the
// commission engine.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
