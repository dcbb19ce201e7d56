//! HTTP request handlers of the health server.

pub mod health;
