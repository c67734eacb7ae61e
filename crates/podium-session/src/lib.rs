//! Browser session primitives for Podium.
//!
//! Provides the signed session token, and builders for the session and flash
//! cookies.

pub mod cookie;
pub mod token;
