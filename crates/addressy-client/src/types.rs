//! Capture Interactive API response types.
//!
//! The current (`v1.1`) endpoint wraps every response in an
//! `{"Items": [...]}` envelope; the legacy (`v1.00`) endpoint returns the
//! array bare. [`ItemsEnvelope`] models the wrapped form; the client picks
//! which to decode based on the [`ApiVersion`](crate::ApiVersion).

use serde::{Deserialize, Serialize};

/// Envelope for `v1.1` responses: `{ "Items": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsEnvelope<T> {
    #[serde(rename = "Items")]
    pub items: Vec<T>,
}

// ---------------------------------------------------------------------------
// Find / Resolve
// ---------------------------------------------------------------------------

/// Classification tag on a find result.
///
/// `Address` entries are terminal and can be passed to
/// [`retrieve`](crate::LookupClient::retrieve); everything else is a
/// container that needs a further resolve pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Address,
    Postcode,
    Street,
    /// A type tag this client does not know about, kept verbatim.
    /// Treated as a container.
    Other(String),
}

impl ItemKind {
    /// Whether an item of this kind is a final address rather than a
    /// container needing resolution.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Address)
    }

    /// The tag string as the API spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Address => "Address",
            Self::Postcode => "Postcode",
            Self::Street => "Street",
            Self::Other(tag) => tag,
        }
    }
}

impl<'de> Deserialize<'de> for ItemKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "Address" => Self::Address,
            "Postcode" => Self::Postcode,
            "Street" => Self::Street,
            _ => Self::Other(tag),
        })
    }
}

impl Serialize for ItemKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One entry returned by a find or resolve query.
///
/// `highlight` and `description` are only populated by the `v1.1` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindItem {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Type")]
    pub kind: ItemKind,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Highlight", default)]
    pub highlight: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Retrieve
// ---------------------------------------------------------------------------

/// Fully detailed address record returned by a retrieve query.
///
/// The field set matches the `v1.1` response; the leaner legacy payload
/// parses too because everything except `id` defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetrievedAddress {
    pub id: String,
    #[serde(default)]
    pub domestic_id: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub language_alternatives: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub sub_building: Option<String>,
    #[serde(default)]
    pub building_number: Option<String>,
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub secondary_street: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub neighbourhood: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub line3: Option<String>,
    #[serde(default)]
    pub line4: Option<String>,
    #[serde(default)]
    pub line5: Option<String>,
    #[serde(default)]
    pub admin_area_name: Option<String>,
    #[serde(default)]
    pub admin_area_code: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub province_name: Option<String>,
    #[serde(default)]
    pub province_code: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_iso2: Option<String>,
    #[serde(default)]
    pub country_iso3: Option<String>,
    #[serde(default)]
    pub country_iso_number: Option<i32>,
    #[serde(default)]
    pub sorting_number1: Option<String>,
    #[serde(default)]
    pub sorting_number2: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(rename = "POBoxNumber", default)]
    pub po_box_number: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub data_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_item_parses_v1_1_shape() {
        let item: FindItem = serde_json::from_value(serde_json::json!({
            "Id": "GB|RM|A|52509479",
            "Type": "Address",
            "Text": "10 Downing Street, London",
            "Highlight": "0-2",
            "Description": "SW1A 2AA"
        }))
        .expect("v1.1 item should parse");

        assert_eq!(item.id, "GB|RM|A|52509479");
        assert_eq!(item.kind, ItemKind::Address);
        assert!(item.kind.is_terminal());
        assert_eq!(item.description.as_deref(), Some("SW1A 2AA"));
    }

    #[test]
    fn find_item_parses_legacy_shape_without_extras() {
        let item: FindItem = serde_json::from_value(serde_json::json!({
            "Id": "GB|RM|ENG|2AA-SW1A",
            "Type": "Postcode",
            "Text": "SW1A 2AA"
        }))
        .expect("legacy item should parse");

        assert_eq!(item.kind, ItemKind::Postcode);
        assert!(!item.kind.is_terminal());
        assert!(item.highlight.is_none());
    }

    #[test]
    fn unknown_type_tag_maps_to_other() {
        let item: FindItem = serde_json::from_value(serde_json::json!({
            "Id": "X|1",
            "Type": "Locality",
            "Text": "Somewhere"
        }))
        .expect("unknown type tag should still parse");

        assert_eq!(item.kind, ItemKind::Other("Locality".to_owned()));
        assert!(!item.kind.is_terminal());
        assert_eq!(item.kind.as_str(), "Locality");
    }

    #[test]
    fn retrieved_address_parses_sparse_legacy_payload() {
        let address: RetrievedAddress = serde_json::from_value(serde_json::json!({
            "Id": "GB|RM|A|52509479",
            "Line1": "10 Downing Street",
            "City": "London",
            "PostalCode": "SW1A 2AA",
            "CountryIso2": "GB",
            "POBoxNumber": ""
        }))
        .expect("sparse payload should parse");

        assert_eq!(address.id, "GB|RM|A|52509479");
        assert_eq!(address.postal_code.as_deref(), Some("SW1A 2AA"));
        assert_eq!(address.country_iso2.as_deref(), Some("GB"));
        assert!(address.country_iso_number.is_none());
        assert_eq!(address.po_box_number.as_deref(), Some(""));
    }
}
