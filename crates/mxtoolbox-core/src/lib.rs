//! Core types and traits for the MxToolbox lookup API client.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Commands**: the closed set of supported lookups and the single
//!   dispatch table describing how each one is requested and parsed
//! - **Types**: strongly-typed representations of every response shape
//! - **Errors**: error handling with [`MxError`] and its [`ErrorClass`]
//!
//! # Example
//!
//! ```rust,ignore
//! use mxtoolbox_core::{ApiResponse, Command, Report, Result};
//!
//! fn interpret(response: &ApiResponse) -> Result<()> {
//!     if let Report::Blacklist(listing) = Report::parse(response)? {
//!         println!("listed on {} blacklists", listing.failed.len());
//!     }
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/mxtoolbox-core/0.3.0")]

mod error;
pub mod types;

pub use error::{ErrorClass, MxError, Result, FAILURE_EXIT_CODE};
pub use types::*;
