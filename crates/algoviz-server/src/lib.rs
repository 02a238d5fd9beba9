//! HTTP/JSON API server for algorithm trace replay.
//!
//! Wraps the algoviz-core engines in a REST API: each endpoint validates the
//! request, runs one engine, and returns the full step trace together with
//! the final result and a complexity annotation. This crate contains the
//! server framework, API schema types, error handling, configuration, and
//! route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
