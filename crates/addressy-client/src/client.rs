//! HTTP client for the Capture Interactive address API.
//!
//! Wraps `reqwest` with typed response handling for the find, resolve, and
//! retrieve operations. Both API dialects share one code path; every
//! response is checked for the empty-result and error-marker conditions
//! before deserialization.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::{LookupError, RemoteFault};
use crate::query::LookupQuery;
use crate::types::{FindItem, ItemsEnvelope, RetrievedAddress};
use crate::version::{ApiVersion, ParamField};

/// Client for the Capture Interactive address API.
///
/// Holds the HTTP client, API key, and resolved endpoint URLs. Use
/// [`LookupClient::new`] for production or [`LookupClient::with_base_url`]
/// to point at a mock server in tests.
///
/// All methods take `&self` and return their own result collections, so a
/// single client can serve concurrent lookups safely.
pub struct LookupClient {
    client: Client,
    api_key: String,
    version: ApiVersion,
    find_url: Url,
    retrieve_url: Url,
}

impl LookupClient {
    /// Creates a client pointed at the production endpoint for `version`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        version: ApiVersion,
        timeout_secs: u64,
    ) -> Result<Self, LookupError> {
        Self::with_base_url(api_key, version, timeout_secs, version.base_url())
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        version: ApiVersion,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("addressy-client/0.1")
            .build()?;

        // Normalise: exactly one trailing slash so joining the operation
        // path appends to the base rather than replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised)
            .map_err(|_| LookupError::InvalidBaseUrl(base_url.to_owned()))?;

        let find_url = base
            .join(&version.endpoint_path("Find"))
            .map_err(|_| LookupError::InvalidBaseUrl(base_url.to_owned()))?;
        let retrieve_url = base
            .join(&version.endpoint_path("Retrieve"))
            .map_err(|_| LookupError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            version,
            find_url,
            retrieve_url,
        })
    }

    /// The find endpoint this client sends to, without query string.
    pub fn find_url(&self) -> &Url {
        &self.find_url
    }

    /// The retrieve endpoint this client sends to, without query string.
    pub fn retrieve_url(&self) -> &Url {
        &self.retrieve_url
    }

    /// Which API dialect this client speaks.
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// Runs a single find query and returns the raw result entries,
    /// addresses and containers alike.
    ///
    /// # Errors
    ///
    /// - [`LookupError::EmptyResult`] if the service returned no items.
    /// - [`LookupError::Remote`] if the first item carries the service's
    ///   error marker.
    /// - [`LookupError::Http`] on network failure or non-2xx status.
    /// - [`LookupError::Deserialize`] if the response shape is unexpected.
    pub async fn find(&self, query: &LookupQuery) -> Result<Vec<FindItem>, LookupError> {
        let url = self.build_url(&self.find_url, query.wire_pairs(self.version));
        let items = self.request_items(&url, "find").await?;
        Self::parse_items(items, "find")
    }

    /// Resolves one container into its entries: a find-endpoint call with
    /// the container id merged over `query`.
    ///
    /// The returned entries may themselves be containers; callers wanting
    /// full resolution should use [`lookup`](Self::lookup).
    ///
    /// # Errors
    ///
    /// Same conditions as [`find`](Self::find).
    pub async fn resolve(
        &self,
        container: &str,
        query: &LookupQuery,
    ) -> Result<Vec<FindItem>, LookupError> {
        let mut pairs = query.wire_pairs(self.version);
        pairs.push((
            self.version.param(ParamField::Container),
            container.to_owned(),
        ));
        let url = self.build_url(&self.find_url, pairs);
        let items = self.request_items(&url, "resolve").await?;
        Self::parse_items(items, "resolve")
    }

    /// Fetches the fully detailed address record for a final entry id.
    ///
    /// # Errors
    ///
    /// Same conditions as [`find`](Self::find), with
    /// [`LookupError::EmptyResult`] reported for the retrieve operation.
    pub async fn retrieve(&self, id: &str) -> Result<RetrievedAddress, LookupError> {
        let pairs = vec![(self.version.param(ParamField::Id), id.to_owned())];
        let url = self.build_url(&self.retrieve_url, pairs);
        let mut items = self.request_items(&url, "retrieve").await?;
        // Emptiness was checked in request_items; the service returns the
        // record as a one-element list.
        let first = items.remove(0);
        serde_json::from_value(first).map_err(|e| LookupError::Deserialize {
            context: format!("retrieve(id={id})"),
            source: e,
        })
    }

    /// Runs the full find-and-resolve pipeline for `query`.
    ///
    /// Terminal address entries from the initial find are collected
    /// directly; every container entry is resolved concurrently and its
    /// entries appended. Ordering among container groups follows the
    /// initial find order, not network completion order.
    ///
    /// All-or-nothing: if any container resolution fails, the whole call
    /// fails with [`LookupError::Resolve`] naming that container, and no
    /// partial collection is exposed.
    ///
    /// # Errors
    ///
    /// - [`LookupError::Resolve`] if a container resolution fails.
    /// - Otherwise the same conditions as [`find`](Self::find).
    pub async fn lookup(&self, query: &LookupQuery) -> Result<Vec<FindItem>, LookupError> {
        let found = self.find(query).await?;

        let (addresses, containers): (Vec<FindItem>, Vec<FindItem>) =
            found.into_iter().partition(|item| item.kind.is_terminal());

        let resolutions = containers.iter().map(|container| async move {
            self.resolve(&container.id, query)
                .await
                .map_err(|e| LookupError::Resolve {
                    container: container.id.clone(),
                    source: Box::new(e),
                })
        });
        let groups = futures::future::try_join_all(resolutions).await?;

        let mut results = addresses;
        for group in groups {
            results.extend(group);
        }
        Ok(results)
    }

    /// Clones an endpoint URL and appends the API key plus `pairs` via
    /// [`Url::query_pairs_mut`], percent-encoding every value.
    fn build_url(&self, endpoint: &Url, pairs: Vec<(&'static str, String)>) -> Url {
        let mut url = endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(self.version.param(ParamField::Key), &self.api_key);
            for (name, value) in &pairs {
                query.append_pair(name, value);
            }
        }
        url
    }

    /// Sends a GET request, unwraps the version-specific envelope, and
    /// applies the shared empty-result and error-marker checks.
    async fn request_items(
        &self,
        url: &Url,
        operation: &'static str,
    ) -> Result<Vec<Value>, LookupError> {
        tracing::debug!(operation, endpoint = url.path(), "Capture Interactive request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let items: Vec<Value> = if self.version.uses_items_envelope() {
            let envelope: ItemsEnvelope<Value> =
                serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
                    context: operation.to_owned(),
                    source: e,
                })?;
            envelope.items
        } else {
            serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
                context: operation.to_owned(),
                source: e,
            })?
        };

        if items.is_empty() {
            return Err(LookupError::EmptyResult { operation });
        }
        Self::check_item_error(&items[0], operation)?;
        Ok(items)
    }

    /// Deserializes raw entries into [`FindItem`]s.
    fn parse_items(items: Vec<Value>, operation: &'static str) -> Result<Vec<FindItem>, LookupError> {
        items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| LookupError::Deserialize {
                    context: operation.to_owned(),
                    source: e,
                })
            })
            .collect()
    }

    /// Rejects the response if its first item carries the `"Error"` marker.
    fn check_item_error(first: &Value, operation: &'static str) -> Result<(), LookupError> {
        if first.get("Error").is_some() {
            let fault: RemoteFault =
                serde_json::from_value(first.clone()).map_err(|e| LookupError::Deserialize {
                    context: format!("{operation} error payload"),
                    source: e,
                })?;
            return Err(LookupError::Remote(fault));
        }
        Ok(())
    }
}
