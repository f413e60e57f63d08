//! holocron: terminal browser for the Star Wars hypermedia API
//!
//! A [`session::Session`] owns one client, one graph aggregator and one
//! resource cache, and renders each page as plain text.

pub mod config;
pub mod render;
pub mod session;

pub use config::Config;
pub use session::{Navigate, Rendered, Session, Source};
