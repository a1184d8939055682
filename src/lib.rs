//! Hello-docker: a demonstration HTTP greeting service.
//!
//! A single-binary web service used for container deployment labs. Every GET
//! request, regardless of path, receives a small JSON payload carrying a
//! greeting, the current UTC timestamp, and a flag marking the response as
//! coming from a container.

pub mod config;
pub mod error;
pub mod http;
pub mod payload;
pub mod routes;
