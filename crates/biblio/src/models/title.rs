//! Catalog title summaries

use biblio_common::error::{MappingError, Result};
use biblio_common::{ClientContext, Fields};
use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;
use url::Url;

/// Summary of a catalog title (a book, DVD, e-book...)
///
/// This is the shape embedded in list items and search results, not the full bibliographic
/// record. [`endpoint`](Title::endpoint) points at the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    id: SmolStr,
    title: SmolStr,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_title: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<Format>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authors: Vec<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details_url: Option<SmolStr>,
    #[serde(skip)]
    endpoint: Url,
}

/// Physical or digital format of a title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Format {
    id: SmolStr,
    name: SmolStr,
}

impl Format {
    fn from_fields(fields: Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.required_id("id")?,
            name: SmolStr::new(fields.required_str("name")?),
        })
    }

    /// Format code, e.g. `BK` or `DVD`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, e.g. "Book"
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Title {
    /// Builds a title from its JSON object.
    pub fn parse(raw: &Value, ctx: &(impl ClientContext + ?Sized)) -> Result<Self> {
        Self::from_fields(Fields::new(raw, "title")?, ctx)
    }

    pub(crate) fn from_fields(
        fields: Fields<'_>,
        ctx: &(impl ClientContext + ?Sized),
    ) -> Result<Self> {
        let id = fields.required_id("id")?;
        let title = SmolStr::new(fields.required_str("title")?);
        let sub_title = fields.optional_str("sub_title")?.map(SmolStr::new);
        let format = fields
            .optional_object("format")?
            .map(Format::from_fields)
            .transpose()?;
        let authors = fields
            .optional_array("authors")?
            .iter()
            .map(author_name)
            .collect::<Result<Vec<_>>>()?;
        let details_url = fields.optional_str("details_url")?.map(SmolStr::new);
        let endpoint = ctx.endpoint(&["titles", id.as_str()]);

        Ok(Self {
            id,
            title,
            sub_title,
            format,
            authors,
            details_url,
            endpoint,
        })
    }

    /// The title's catalog id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Main title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Subtitle, if any
    pub fn sub_title(&self) -> Option<&str> {
        self.sub_title.as_deref()
    }

    /// Format, if the API reported one
    pub fn format(&self) -> Option<&Format> {
        self.format.as_ref()
    }

    /// Author names in catalog order
    pub fn authors(&self) -> &[SmolStr] {
        &self.authors
    }

    /// Link to the title's page on BiblioCommons
    pub fn details_url(&self) -> Option<&str> {
        self.details_url.as_deref()
    }

    /// API endpoint for the full title record
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

// Authors come as `{"name": "..."}` objects; bare strings show up in older payloads.
fn author_name(value: &Value) -> Result<SmolStr> {
    match value {
        Value::String(name) => Ok(SmolStr::new(name)),
        Value::Object(_) => Ok(SmolStr::new(
            Fields::new(value, "authors")?.required_str("name")?,
        )),
        _ => Err(MappingError::invalid("authors", "a list of author objects")),
    }
}
