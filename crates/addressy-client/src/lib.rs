//! Async client for the Loqate / Postcode Anywhere "Capture Interactive"
//! address lookup API.
//!
//! The service works in two stages: a *find* query returns a mix of final
//! addresses and containers (postcode groups, streets); containers are
//! *resolved* into further entries; a final entry id can be *retrieved* as
//! a fully detailed address record. [`LookupClient::lookup`] runs the
//! find-and-resolve pipeline in one call; [`LookupClient::retrieve`]
//! fetches the detail record.
//!
//! Both published revisions of the API are supported behind
//! [`ApiVersion`]: the legacy `v1.00` bare-array endpoint and the current
//! `v1.1` `Items`-enveloped one.
//!
//! ```no_run
//! use addressy_client::{ApiVersion, LookupClient, LookupQuery};
//!
//! # async fn run() -> Result<(), addressy_client::LookupError> {
//! let client = LookupClient::new("my-api-key", ApiVersion::Current, 30)?;
//! let query = LookupQuery::new("SW1A 2AA").countries("GB").limit(10);
//!
//! for entry in client.lookup(&query).await? {
//!     let address = client.retrieve(&entry.id).await?;
//!     println!("{:?}", address.label);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod query;
mod types;
mod version;

pub use client::LookupClient;
pub use error::{LookupError, RemoteFault};
pub use query::LookupQuery;
pub use types::{FindItem, ItemKind, RetrievedAddress};
pub use version::ApiVersion;
