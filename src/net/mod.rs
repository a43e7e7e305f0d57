//! Networking modules for the analytics HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the four backend endpoints behind one shared client
//! configuration, and `types` defines the response schema shared with the
//! chart/table renderers.

pub mod api;
pub mod types;
