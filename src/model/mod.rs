//! Wire DTOs of the health server.

pub mod api;
