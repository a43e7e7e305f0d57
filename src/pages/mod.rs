//! Page-level components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `home` is the page controller for the chat workflow; `about` is static
//! content.

pub mod about;
pub mod home;
