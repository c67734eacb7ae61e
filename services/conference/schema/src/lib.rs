//! sea-orm entities for the conference database.

pub mod authors;
pub mod presentations;
pub mod roles;
pub mod rooms;
pub mod schedule;
pub mod users;
