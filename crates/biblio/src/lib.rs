//! # biblio
//!
//! Typed entity models for the BiblioCommons catalog API.
//!
//! The API hands back loosely shaped JSON. This crate turns it into immutable, fully
//! validated values: every entity is built in one shot from a parsed payload plus a
//! [`ClientContext`], and either comes back complete or not at all.
//!
//! ## Example
//!
//! ```rust
//! use biblio::client::Client;
//! use biblio::models::{ItemList, ListItem};
//!
//! # fn main() -> miette::Result<()> {
//! let client = Client::new().api_key("demo-key").build();
//!
//! let body = br#"{
//!     "list": {
//!         "id": "170722491",
//!         "name": "Summer reading",
//!         "item_count": 1,
//!         "created": "2012-06-01T15:04:11Z",
//!         "updated": "2012-06-03T09:30:00Z",
//!         "details_url": "http://nypl.bibliocommons.com/list/show/170722491",
//!         "user": { "id": "10523", "name": "reader" },
//!         "list_items": [
//!             {
//!                 "list_item_type": "url",
//!                 "url": { "title": "NYPL", "url": "https://www.nypl.org" }
//!             }
//!         ]
//!     }
//! }"#;
//!
//! let list = ItemList::from_response(body, &client)?;
//! assert_eq!(list.name(), "Summer reading");
//! assert!(list.list_type().is_none());
//! assert!(matches!(list.items(), [ListItem::Url(_)]));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub use biblio_common::{self as common, ClientContext, MappingError};
pub use biblio_common::types::Datetime;

/// Client handle and configuration.
pub mod client;
/// Entity models mapped from API payloads.
pub mod models;
