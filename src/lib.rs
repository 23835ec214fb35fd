//! Read-only HTTP query service over a hosted conversation table.
//!
//! Serves conversation records stored in Supabase, grouped per sender,
//! through a small REST API.

#![deny(unsafe_code)]
#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

/// HTTP server and API routes.
pub mod server;
/// Entry helpers to start the memoline server.
pub mod startup;
/// Conversation storage access and per-sender grouping.
pub mod store;
