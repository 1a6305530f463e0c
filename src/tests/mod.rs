//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` through key
//! events and assert on state and rendered output.
