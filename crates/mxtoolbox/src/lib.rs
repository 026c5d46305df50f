//! Rust client for the MxToolbox lookup API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mxtoolbox::{ApiKey, MxToolboxClient};
//!
//! #[tokio::main]
//! async fn main() -> mxtoolbox::Result<()> {
//!     let key = ApiKey::from_contents(std::fs::read_to_string("apikey.txt").unwrap())?;
//!     let client = MxToolboxClient::new(key)?;
//!
//!     let listing = client.lookup().blacklist("192.0.2.10").await?;
//!     println!("Listed on {} blacklists", listing.listed_count());
//!
//!     let probe = client.lookup().tcp("mail.example.com").port(25).send().await?;
//!     for result in &probe.information {
//!         println!("{}", result.summary);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/mxtoolbox/0.3.0")]

// Re-export core types
pub use mxtoolbox_core::*;

// Re-export client
pub use mxtoolbox_client::{MxToolboxClient, MxToolboxClientBuilder, DEFAULT_BASE_URL};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
