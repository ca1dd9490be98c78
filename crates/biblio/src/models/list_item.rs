//! Entries of a user list
//!
//! A list mixes two kinds of entry, told apart by the `list_item_type` field: catalog
//! titles (`"title"`) and external links (`"url"`).

use biblio_common::error::{MappingError, Result};
use biblio_common::{ClientContext, Fields};
use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;

use super::title::Title;

/// Discriminator value selecting [`ListItem::Title`]
pub const TITLE_DISCRIMINATOR: &str = "title";
/// Discriminator value selecting [`ListItem::Url`]
pub const URL_DISCRIMINATOR: &str = "url";

/// How to treat `list_item_type` values other than `"title"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscriminatorPolicy {
    /// Anything that is not `"title"`, including a missing field, is a URL item.
    ///
    /// This matches what the API's own clients have always done.
    #[default]
    Lenient,
    /// Only `"title"` and `"url"` are accepted; anything else is an error.
    Strict,
}

/// One entry of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "list_item_type", rename_all = "lowercase")]
pub enum ListItem {
    /// A catalog title
    Title(TitleItem),
    /// An external link
    Url(UrlItem),
}

/// List entry pointing at a catalog title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<SmolStr>,
    title: Title,
}

/// List entry pointing at an external web page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<SmolStr>,
    url: UrlLink,
}

/// Target of a [`UrlItem`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<SmolStr>,
    url: SmolStr,
}

impl ListItem {
    /// Builds a list item, treating unknown discriminators as URL items.
    pub fn parse(raw: &Value, ctx: &(impl ClientContext + ?Sized)) -> Result<Self> {
        Self::parse_with(raw, ctx, DiscriminatorPolicy::Lenient)
    }

    /// Builds a list item under an explicit [`DiscriminatorPolicy`].
    pub fn parse_with(
        raw: &Value,
        ctx: &(impl ClientContext + ?Sized),
        policy: DiscriminatorPolicy,
    ) -> Result<Self> {
        let fields = Fields::new(raw, "list_item")?;
        let discriminator = fields.optional_value("list_item_type").and_then(Value::as_str);

        match discriminator {
            Some(TITLE_DISCRIMINATOR) => TitleItem::from_fields(fields, ctx).map(Self::Title),
            Some(URL_DISCRIMINATOR) => UrlItem::from_fields(fields).map(Self::Url),
            _ if policy == DiscriminatorPolicy::Strict => Err(MappingError::invalid(
                "list_item_type",
                "one of \"title\" or \"url\"",
            )),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    discriminator = ?discriminator,
                    "unrecognised list_item_type, reading entry as a url item"
                );
                UrlItem::from_fields(fields).map(Self::Url)
            }
        }
    }

    /// The annotation the list author wrote for this entry
    pub fn annotation(&self) -> Option<&str> {
        match self {
            Self::Title(item) => item.annotation(),
            Self::Url(item) => item.annotation(),
        }
    }

    /// Whether this is a catalog title entry
    pub fn is_title(&self) -> bool {
        matches!(self, Self::Title(_))
    }

    /// The title entry, if this is one
    pub fn as_title(&self) -> Option<&TitleItem> {
        match self {
            Self::Title(item) => Some(item),
            Self::Url(_) => None,
        }
    }

    /// The URL entry, if this is one
    pub fn as_url(&self) -> Option<&UrlItem> {
        match self {
            Self::Url(item) => Some(item),
            Self::Title(_) => None,
        }
    }
}

impl TitleItem {
    fn from_fields(fields: Fields<'_>, ctx: &(impl ClientContext + ?Sized)) -> Result<Self> {
        Ok(Self {
            annotation: fields.optional_str("annotation")?.map(SmolStr::new),
            title: Title::from_fields(fields.required_object("title")?, ctx)?,
        })
    }

    /// The author's note on this entry
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// The referenced title
    pub fn title(&self) -> &Title {
        &self.title
    }
}

impl UrlItem {
    fn from_fields(fields: Fields<'_>) -> Result<Self> {
        let link = fields.required_object("url")?;
        Ok(Self {
            annotation: fields.optional_str("annotation")?.map(SmolStr::new),
            url: UrlLink {
                title: link.optional_str("title")?.map(SmolStr::new),
                url: SmolStr::new(link.required_str("url")?),
            },
        })
    }

    /// The author's note on this entry
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// The linked page's title, when given
    pub fn title(&self) -> Option<&str> {
        self.url.title.as_deref()
    }

    /// The linked address, as written by the list author
    pub fn url(&self) -> &str {
        &self.url.url
    }

    /// The full link object
    pub fn link(&self) -> &UrlLink {
        &self.url
    }
}

impl UrlLink {
    /// Link text
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Link target
    pub fn url(&self) -> &str {
        &self.url
    }
}
