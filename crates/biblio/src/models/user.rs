//! Catalog user accounts

use biblio_common::error::Result;
use biblio_common::{ClientContext, Fields};
use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;
use url::Url;

/// A BiblioCommons user, as embedded in lists and other user-authored content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: SmolStr,
    name: SmolStr,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_url: Option<SmolStr>,
    #[serde(skip)]
    lists_endpoint: Url,
}

impl User {
    /// Builds a user from its JSON object.
    pub fn parse(raw: &Value, ctx: &(impl ClientContext + ?Sized)) -> Result<Self> {
        Self::from_fields(Fields::new(raw, "user")?, ctx)
    }

    pub(crate) fn from_fields(
        fields: Fields<'_>,
        ctx: &(impl ClientContext + ?Sized),
    ) -> Result<Self> {
        let id = fields.required_id("id")?;
        let name = SmolStr::new(fields.required_str("name")?);
        let profile_url = fields.optional_str("profile_url")?.map(SmolStr::new);
        let lists_endpoint = ctx.endpoint(&["users", id.as_str(), "lists"]);

        Ok(Self {
            id,
            name,
            profile_url,
            lists_endpoint,
        })
    }

    /// The user's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The user's public display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Link to the user's public profile page, when the API includes one
    pub fn profile_url(&self) -> Option<&str> {
        self.profile_url.as_deref()
    }

    /// API endpoint listing this user's lists
    pub fn lists_endpoint(&self) -> &Url {
        &self.lists_endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;
    use biblio_common::MappingError;
    use serde_json::json;

    fn client() -> Client {
        Client::new().api_key("test").build()
    }

    #[test]
    fn parse_user_object() {
        let raw = json!({
            "id": 105237011,
            "name": "nypl_mysteries",
            "profile_url": "http://nypl.bibliocommons.com/user_profile/105237011"
        });
        let user = User::parse(&raw, &client()).unwrap();
        assert_eq!(user.id(), "105237011");
        assert_eq!(user.name(), "nypl_mysteries");
        assert_eq!(
            user.profile_url(),
            Some("http://nypl.bibliocommons.com/user_profile/105237011")
        );
        assert_eq!(
            user.lists_endpoint().as_str(),
            "https://api.bibliocommons.com/v1/users/105237011/lists"
        );
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(matches!(
            User::parse(&json!("nypl_mysteries"), &client()),
            Err(MappingError::InvalidField { field, .. }) if field == "user"
        ));
    }
}
