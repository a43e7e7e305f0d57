//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State transitions are plain methods on plain structs so the whole
//! conversation flow is testable natively; the page controller wraps the
//! struct in an `RwSignal` provided via context.

pub mod chat;
