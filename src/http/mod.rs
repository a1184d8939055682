//! HTTP server startup and shutdown.
//!
//! Plain HTTP only. The server binds a fixed address, serves until SIGINT or
//! SIGTERM, then winds down and returns so the process can exit 0.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
