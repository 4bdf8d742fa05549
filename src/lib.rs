//! Tablero: task publishing service core.
//!
//! This crate provides the logic core of a small task-publishing web
//! application: task records are created through a validated form, listed
//! and viewed by slug behind an authentication gate, and accompanied by a
//! handful of static pages.
//!
//! # Architecture
//!
//! Tablero follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, filesystem)
//!
//! # Modules
//!
//! - [`slug`]: URL slug derivation from human-readable titles
//! - [`task`]: Task records, creation validation, and persistence
//! - [`web`]: Request handlers, routing, and template rendering

pub mod slug;
pub mod task;
pub mod web;
