//! Shared test utilities for the podium workspace.

pub mod session;
