//! # poke-dl
//!
//! Concurrent batch-fetch library for the PokeAPI.
//!
//! ## Design Philosophy
//!
//! poke-dl is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Failure-isolating** - One bad identifier in a range never aborts its siblings
//! - **Deterministic** - Assembled output is ordered by id, independent of network timing
//!
//! ## Quick Start
//!
//! ```no_run
//! use poke_dl::{Client, OutputFormat, Query, execute, render};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new()?;
//!
//!     // Fetch the original 151, concurrently
//!     let query = Query::parse_range("1-151")?;
//!     let report = execute(&client, &query).await?;
//!
//!     println!("{}", render(&report, OutputFormat::Text)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Batch coordination and deterministic assembly
pub mod batch;
/// PokeAPI HTTP client
pub mod client;
/// Error types
pub mod error;
/// Output rendering
pub mod render;
/// Core types
pub mod types;

// Re-export commonly used types
pub use batch::{MAX_CONCURRENT_FETCHES, execute, fetch_range};
pub use client::{Client, POKEAPI_BASE_URL};
pub use error::{Error, FailureReport, FetchError, QueryError, Result};
pub use render::{OutputFormat, render};
pub use types::{BatchReport, MAX_POKEMON_ID, MIN_POKEMON_ID, Pokemon, Query};
