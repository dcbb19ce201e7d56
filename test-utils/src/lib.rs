//! Burl Fret Test Utils
//!
//! Provides shared testing utilities for the Burl Fret bots. The crate currently offers
//! factories for the serenity objects the bots receive from Discord's gateway, so that
//! conversion code can be exercised without a live connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! #[tokio::test]
//! async fn converts_message() {
//!     let author = create_test_user(111, "Caller", false);
//!     let message = create_test_message(1, 2, Some(3), &author, "!ping", &[]);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
