//! Presentation-facing use-case services.
//!
//! # Responsibility
//! - Translate page requests into query-core calls.
//! - Return display-ready envelopes so renderers stay logic-free.

pub mod browse_service;
pub mod cards;
