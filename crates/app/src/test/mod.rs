//! Test helpers for cart store tests.


pub(crate) use context::{ReadOnlyStore, TestContext, details, line};
