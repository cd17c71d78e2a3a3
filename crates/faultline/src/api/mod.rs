//! API route handlers

pub mod controllers;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod system;
pub mod translation;

pub use error::{ApiError, AppError, RaisedFailure};
