//! Service plumbing shared by Podium binaries: tracing setup and request ids.

pub mod middleware;
pub mod tracing;
