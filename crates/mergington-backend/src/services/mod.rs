//! Backend services for activity and participant management.
//!
//! This module provides the service layer abstraction over the activity catalog
//! and its in-memory implementation, along with the catalog the service is
//! seeded with at startup.

pub mod activities;
pub mod seed;

pub use activities::*;
