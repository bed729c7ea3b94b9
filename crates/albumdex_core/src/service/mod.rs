//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the command layer decoupled from storage details.

pub mod collection_service;
