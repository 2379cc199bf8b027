//! Row types: Row, NewRow, Image

use super::ids::{ColumnId, RowId};
use serde::{Deserialize, Serialize};

/// A single bookmark, tagged with the id of the column it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: RowId,
    /// Foreign key into the column sequence
    pub column_id: ColumnId,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// Fields of a row that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRow {
    pub column_id: ColumnId,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl NewRow {
    pub fn new(
        column_id: impl Into<ColumnId>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            name: name.into(),
            url: url.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    /// Assign a fresh id
    pub fn into_row(self) -> Row {
        Row {
            id: RowId::new(),
            column_id: self.column_id,
            name: self.name,
            url: self.url,
            image: self.image,
        }
    }
}

/// User-supplied icon for a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// MIME type, e.g. `image/png`
    pub content_type: String,
    /// Raw bytes, base64 in serialized form
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl Image {
    pub fn new(content_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
