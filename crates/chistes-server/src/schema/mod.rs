//! API schema types for request/response definitions.
//!
//! Field names follow the public JSON contract (`chiste`, `texto`,
//! `mensaje`, `mcm`, `numeroIncrementado`).

pub mod jokes;
pub mod math;
