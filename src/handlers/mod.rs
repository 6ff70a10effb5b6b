//! MCP tool handlers for the capture server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file.

pub mod capture;
pub mod classify;
pub mod expand;
pub mod template_hint;
