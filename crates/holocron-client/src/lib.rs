//! Rust client for the Star Wars hypermedia REST API
//!
//! Every entity the API returns embeds the URLs of related entities rather
//! than their data. This crate covers the leaf operations: turning those URLs
//! into local identifiers and reading single entities or collection pages.
//!
//! # Example
//!
//! ```rust,no_run
//! use holocron_client::{resolve_id, ClientConfig, Film, ResourceClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ResourceClient::new(ClientConfig::default())?;
//!
//! let film: Film = client.fetch_id("1").await?;
//! for character in &film.characters {
//!     println!("character {}", resolve_id(character));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod id;
pub mod resources;
pub mod types;

// Re-export main types
pub use client::ResourceClient;
pub use error::{FetchError, Result};
pub use id::{resolve_id, sanitize_id};
pub use resources::*;
pub use types::*;
