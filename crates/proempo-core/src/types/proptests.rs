//! Property-based tests for the projection calculator.
