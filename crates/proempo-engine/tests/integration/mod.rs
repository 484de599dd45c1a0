//! Integration test scenarios.

mod debounce;
