//! HTTP handler modules for the chistes API.
//!
//! Handlers validate input, make at most one store or upstream call, and map
//! the outcome to a JSON response. Every failure becomes an [`ApiError`]
//! at this boundary.
//!
//! [`ApiError`]: crate::error::ApiError

pub mod docs;
pub mod jokes;
pub mod math;
