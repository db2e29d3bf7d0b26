//! REST client and wire types for the Verne book catalog.

pub mod client;
pub mod error;
pub mod model;

pub use client::VerneClient;
pub use error::ApiError;
pub use model::{Author, Book, BookExpanded, BookStatus, Genre};
