//! User-curated lists

use biblio_common::error::{MappingError, Result};
use biblio_common::types::Datetime;
use biblio_common::{ClientContext, Fields};
use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;

use super::list_item::{DiscriminatorPolicy, ListItem, TitleItem, UrlItem};
use super::list_type::ListType;
use super::user::User;

#[cfg(test)]
mod tests;

/// A named, user-curated list of catalog titles and links
///
/// Built in one shot by [`ItemList::parse`] and read-only afterwards. Serializing it back
/// produces the API's own key names (`item_count`, `details_url`, `list_items`...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemList {
    id: SmolStr,
    name: SmolStr,
    item_count: u64,
    created: Datetime,
    updated: Datetime,
    details_url: SmolStr,
    user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_type: Option<ListType>,
    #[serde(rename = "list_items")]
    items: Vec<ListItem>,
}

impl ItemList {
    /// Maps a parsed list object onto an `ItemList`.
    ///
    /// Required keys are `id`, `name`, `item_count`, `created`, `updated`, `details_url`,
    /// `user` and `list_items`; `list_type` may be absent or `null`. Entries whose
    /// `list_item_type` is not `"title"` are read as URL entries.
    ///
    /// The first problem found aborts the whole mapping.
    pub fn parse(raw: &Value, ctx: &(impl ClientContext + ?Sized)) -> Result<Self> {
        Self::parse_with(raw, ctx, DiscriminatorPolicy::Lenient)
    }

    /// Like [`parse`](Self::parse), with an explicit policy for list item discriminators.
    pub fn parse_with(
        raw: &Value,
        ctx: &(impl ClientContext + ?Sized),
        policy: DiscriminatorPolicy,
    ) -> Result<Self> {
        let fields = Fields::new(raw, "list")?;
        let id = fields.required_id("id")?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("item_list_parse", id = %id).entered();

        let name = SmolStr::new(fields.required_str("name")?);
        let item_count = fields.required_u64("item_count")?;
        let created = fields.required_datetime("created")?;
        let updated = fields.required_datetime("updated")?;
        let details_url = SmolStr::new(fields.required_str("details_url")?);

        let user = User::from_fields(fields.required_object("user")?, ctx)
            .map_err(MappingError::user)?;

        let list_type = fields
            .optional_object("list_type")?
            .map(ListType::from_fields)
            .transpose()?;

        let items = fields
            .required_array("list_items")?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                ListItem::parse_with(item, ctx, policy).map_err(|e| MappingError::item(index, e))
            })
            .collect::<Result<Vec<_>>>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(item_count, parsed = items.len(), "mapped list");

        Ok(Self {
            id,
            name,
            item_count,
            created,
            updated,
            details_url,
            user,
            list_type,
            items,
        })
    }

    /// Parses a JSON document holding a bare list object.
    pub fn from_slice(bytes: &[u8], ctx: &(impl ClientContext + ?Sized)) -> Result<Self> {
        let raw: Value = serde_json::from_slice(bytes)?;
        Self::parse(&raw, ctx)
    }

    /// Parses an API response body of the form `{"list": {...}}`.
    pub fn from_response(bytes: &[u8], ctx: &(impl ClientContext + ?Sized)) -> Result<Self> {
        let raw: Value = serde_json::from_slice(bytes)?;
        let list = Fields::new(&raw, "response")?.required_value("list")?;
        Self::parse(list, ctx)
    }

    /// The list's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The list's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of entries as reported by the API.
    ///
    /// This can exceed `items().len()` when the API returned a truncated page of entries.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// When the list was created, in UTC
    pub fn created(&self) -> &Datetime {
        &self.created
    }

    /// When the list was last updated, in UTC
    pub fn updated(&self) -> &Datetime {
        &self.updated
    }

    /// Whether `updated` is not earlier than `created`. The API does not guarantee it.
    pub fn is_chronological(&self) -> bool {
        self.updated >= self.created
    }

    /// The list's category, if it has one
    pub fn list_type(&self) -> Option<&ListType> {
        self.list_type.as_ref()
    }

    /// The user who created the list
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Link to the list on BiblioCommons
    pub fn details(&self) -> &str {
        &self.details_url
    }

    /// Entries in list order
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Catalog title entries, in list order
    pub fn titles(&self) -> impl Iterator<Item = &TitleItem> {
        self.items.iter().filter_map(ListItem::as_title)
    }

    /// External link entries, in list order
    pub fn urls(&self) -> impl Iterator<Item = &UrlItem> {
        self.items.iter().filter_map(ListItem::as_url)
    }
}
