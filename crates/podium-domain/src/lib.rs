//! Domain types shared across Podium crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod role;
pub mod schedule;
pub mod user;
