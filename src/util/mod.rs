//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and clock helpers isolate browser/environment concerns from
//! page and component logic to improve reuse and testability.

pub mod format;
pub mod time;
