pub mod author;
pub mod auth;
pub mod listing;
pub mod presentation;
pub mod room;
pub mod schedule;
pub mod user;
