//! Search parameters for find and resolve queries.
//!
//! [`LookupQuery`] is a plain value: every setter consumes the query and
//! returns an updated copy, so chained construction reads like a builder
//! while snapshots stay immutable. The API key is deliberately absent — it
//! lives on the [`LookupClient`](crate::LookupClient) and is injected into
//! every request, which is what makes `clear()` trivially key-preserving.

use crate::version::{ApiVersion, ParamField};

/// Parameters for a find query. All fields optional; unset fields are
/// never sent on the wire.
///
/// Values are passed to the service verbatim — no validation is applied,
/// matching the API's own permissiveness.
///
/// ```
/// use addressy_client::LookupQuery;
///
/// let query = LookupQuery::new("SW1A 2AA")
///     .countries("GB")
///     .limit(10)
///     .language("en-gb");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupQuery {
    text: Option<String>,
    origin: Option<String>,
    countries: Option<String>,
    limit: Option<u32>,
    language: Option<String>,
}

impl LookupQuery {
    /// A query for the given search text. Typically a postcode or the
    /// start of an address.
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().text(text)
    }

    /// Sets the search text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the origin hint used by the service to bias results.
    /// Typically the end user's IP address or an ISO country code.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Restricts results to the given countries. Separate multiple ISO
    /// codes with `|`, e.g. `"GB|US"`.
    #[must_use]
    pub fn countries(mut self, countries: impl Into<String>) -> Self {
        self.countries = Some(countries.into());
        self
    }

    /// Caps the number of results the service returns.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the result language. A 2- or 4-letter locale identifier,
    /// e.g. `"en"` or `"en-gb"`.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Discards every field, returning the empty query.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::default()
    }

    /// Emits the set fields as wire query pairs, named per `version`.
    /// Unset fields produce no pair.
    pub(crate) fn wire_pairs(&self, version: ApiVersion) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(text) = &self.text {
            pairs.push((version.param(ParamField::Text), text.clone()));
        }
        if let Some(origin) = &self.origin {
            pairs.push((version.param(ParamField::Origin), origin.clone()));
        }
        if let Some(countries) = &self.countries {
            pairs.push((version.param(ParamField::Countries), countries.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push((version.param(ParamField::Limit), limit.to_string()));
        }
        if let Some(language) = &self.language {
            pairs.push((version.param(ParamField::Language), language.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_chain_into_one_value() {
        let query = LookupQuery::new("SW1A 2AA")
            .origin("GB")
            .countries("GB|US")
            .limit(5)
            .language("en-gb");

        let pairs = query.wire_pairs(ApiVersion::Current);
        assert_eq!(
            pairs,
            vec![
                ("Text", "SW1A 2AA".to_owned()),
                ("Origin", "GB".to_owned()),
                ("Countries", "GB|US".to_owned()),
                ("Limit", "5".to_owned()),
                ("Language", "en-gb".to_owned()),
            ]
        );
    }

    #[test]
    fn legacy_pairs_use_lowercase_names() {
        let pairs = LookupQuery::new("EC1A 1BB").limit(3).wire_pairs(ApiVersion::Legacy);
        assert_eq!(
            pairs,
            vec![("text", "EC1A 1BB".to_owned()), ("limit", "3".to_owned())]
        );
    }

    #[test]
    fn unset_fields_are_never_emitted() {
        let pairs = LookupQuery::default().wire_pairs(ApiVersion::Current);
        assert!(pairs.is_empty());

        let pairs = LookupQuery::new("x").wire_pairs(ApiVersion::Current);
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn clear_returns_the_empty_query() {
        let query = LookupQuery::new("SW1A 2AA").countries("GB").limit(10);
        assert_eq!(query.clear(), LookupQuery::default());
    }

    #[test]
    fn setters_replace_earlier_values() {
        let query = LookupQuery::new("first").text("second");
        let pairs = query.wire_pairs(ApiVersion::Current);
        assert_eq!(pairs, vec![("Text", "second".to_owned())]);
    }
}
