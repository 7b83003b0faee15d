//! Workspace-level integration tests for the recurrence crates.
//!
//! The tests live under `tests/`; this library target is intentionally empty.
