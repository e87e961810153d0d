//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog, ordering and search calls into use-case APIs.
//! - Keep CLI/shell layers decoupled from engine details.

pub mod catalog_service;
pub mod input;
