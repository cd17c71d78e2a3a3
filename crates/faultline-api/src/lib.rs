//! faultline-api: Shared API types and schemas
//!
//! Contains request/response types, path constants, and OpenAPI schema
//! definitions used across the daemon, client, and CLI.

pub mod paths;
pub mod requests;
pub mod responses;
