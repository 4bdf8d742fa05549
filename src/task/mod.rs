//! Task records: creation, validation, and persistence.
//!
//! A task is a titled piece of text published under a unique URL slug,
//! optionally accompanied by an uploaded image. Tasks are created once and
//! never updated or deleted. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Form cleaning rules in [`forms`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod forms;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
