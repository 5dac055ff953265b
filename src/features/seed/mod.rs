//! One-time, idempotent population of the admin account and initial menu.

pub mod data;
pub mod services;

pub use services::{SeedReport, SeedService};
