//! HTTP layer for MCP server communication.
//!
//! Endpoint definitions and URL building live in [`common`]; the GET-and-decode
//! cycle shared by both clients lives in `request`.

pub mod common;
pub(crate) mod error_helpers;
pub(crate) mod loud_wire;
pub(crate) mod request;
