//! HTTP/JSON API server for jokes and small arithmetic utilities.
//!
//! Proxies two public joke APIs, stores user-submitted jokes under
//! sequential numbers, and exposes LCM and increment endpoints. This crate
//! contains the router, handlers, API schema types, error mapping, upstream
//! client, and configuration.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod schema;
pub mod state;
