//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless renderers of their props; conversation state is
//! owned by the home page controller and passed down.

pub mod analysis_chart;
pub mod chat_input;
pub mod data_table;
pub mod header;
pub mod message;
