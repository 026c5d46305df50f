//! HTTP client for the MxToolbox lookup API.
//!
//! This crate provides the main [`MxToolboxClient`] for running lookups.

#![doc(html_root_url = "https://docs.rs/mxtoolbox-client/0.3.0")]

mod client;
pub mod api;

pub use client::{MxToolboxClient, MxToolboxClientBuilder, DEFAULT_BASE_URL};
pub use mxtoolbox_core::{MxError, Result};
