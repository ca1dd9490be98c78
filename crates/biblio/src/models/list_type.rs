use biblio_common::Fields;
use biblio_common::error::Result;
use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;

/// Category tag attached to a list, e.g. "Topic Guide" or "Staff Picks"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListType {
    id: SmolStr,
    name: SmolStr,
}

impl ListType {
    /// Builds a list type from its JSON object.
    pub fn parse(raw: &Value) -> Result<Self> {
        Self::from_fields(Fields::new(raw, "list_type")?)
    }

    pub(crate) fn from_fields(fields: Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.required_id("id")?,
            name: SmolStr::new(fields.required_str("name")?),
        })
    }

    /// The list type's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable name
    pub fn name(&self) -> &str {
        &self.name
    }
}
