//! The two wire dialects of the Capture Interactive API.
//!
//! The service has been published twice: the original Postcode Anywhere
//! host with a `v1.00` JSON endpoint returning a bare array, and the
//! current Addressy host with a `v1.1` "json3ex" endpoint wrapping results
//! in an `{"Items": [...]}` envelope and PascalCase query parameters.
//! [`ApiVersion`] owns every difference so the client has one code path.

/// Which revision of the Capture Interactive API to speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// `services.postcodeanywhere.co.uk`, `v1.00`, `json.ws`, bare-array
    /// responses, lowercase query parameters.
    Legacy,
    /// `api.addressy.com`, `v1.1`, `json3ex.ws`, `Items`-enveloped
    /// responses, PascalCase query parameters.
    Current,
}

impl ApiVersion {
    /// Production base URL for this revision.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Legacy => "https://services.postcodeanywhere.co.uk/Capture/Interactive",
            Self::Current => "https://api.addressy.com/Capture/Interactive",
        }
    }

    /// Path suffix for an operation, e.g. `Find/v1.1/json3ex.ws`.
    pub(crate) fn endpoint_path(self, operation: &str) -> String {
        match self {
            Self::Legacy => format!("{operation}/v1.00/json.ws"),
            Self::Current => format!("{operation}/v1.1/json3ex.ws"),
        }
    }

    /// Whether response bodies arrive inside an `{"Items": [...]}` envelope
    /// rather than as a bare top-level array.
    pub(crate) fn uses_items_envelope(self) -> bool {
        matches!(self, Self::Current)
    }

    /// Query-parameter name for a logical field. The legacy endpoint takes
    /// lowercase names; the current one capitalizes them. `Id` is capital
    /// in both (the legacy retrieve call always sent it that way).
    pub(crate) fn param(self, field: ParamField) -> &'static str {
        use ParamField as F;
        match self {
            Self::Legacy => match field {
                F::Key => "key",
                F::Text => "text",
                F::Origin => "origin",
                F::Countries => "countries",
                F::Limit => "limit",
                F::Language => "language",
                F::Container => "container",
                F::Id => "Id",
            },
            Self::Current => match field {
                F::Key => "Key",
                F::Text => "Text",
                F::Origin => "Origin",
                F::Countries => "Countries",
                F::Limit => "Limit",
                F::Language => "Language",
                F::Container => "Container",
                F::Id => "Id",
            },
        }
    }
}

/// Logical query fields understood by the find and retrieve endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParamField {
    Key,
    Text,
    Origin,
    Countries,
    Limit,
    Language,
    Container,
    Id,
}
