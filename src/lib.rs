//! dish-api - An in-memory dish catalogue served over HTTP
//!
//! The [`dish`] module owns the records and every rule about them; the
//! [`http_server`] module maps HTTP requests onto store operations.

pub mod cli;
pub mod dish;
pub mod http_server;
pub mod observability;
