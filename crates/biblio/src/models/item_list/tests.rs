use crate::client::Client;
use crate::models::{ItemList, ListItem};
use biblio_common::MappingError;
use serde_json::{Value, json};

const LIST_JSON: &str = include_str!("list.json");

fn client() -> Client {
    Client::new().api_key("test").build()
}

fn minimal(items: Value) -> Value {
    json!({
        "id": "1",
        "name": "Minimal",
        "item_count": 0,
        "created": "2020-01-01T00:00:00Z",
        "updated": "2020-01-02T00:00:00Z",
        "details_url": "http://example.bibliocommons.com/list/show/1",
        "user": { "id": "9", "name": "someone" },
        "list_items": items
    })
}

#[test]
fn test_parse_fixture() {
    let list = ItemList::from_response(LIST_JSON.as_bytes(), &client())
        .expect("failed to parse fixture");

    assert_eq!(list.id(), "170722491");
    assert_eq!(list.name(), "Staff Picks: Mysteries for a Rainy Weekend");
    assert_eq!(list.item_count(), 4);
    assert_eq!(
        list.details(),
        "http://nypl.bibliocommons.com/list/show/170722491_nypl_mysteries"
    );
    assert_eq!(list.user().name(), "nypl_mysteries");
    assert_eq!(
        list.user().lists_endpoint().as_str(),
        "https://api.bibliocommons.com/v1/users/105237011/lists"
    );
    assert_eq!(list.list_type().map(|t| t.name()), Some("Topic Guide"));
    assert_eq!(list.items().len(), 4);
}

#[test]
fn test_timestamps_reported_in_utc() {
    let list = ItemList::from_response(LIST_JSON.as_bytes(), &client()).unwrap();

    // -05:00 offset folded into UTC, naive input taken as UTC
    assert_eq!(list.created().to_string(), "2012-03-01T19:22:05Z");
    assert_eq!(list.updated().to_string(), "2012-03-07T09:15:00Z");
    assert!(list.is_chronological());
}

#[test]
fn test_fixture_item_variants() {
    let list = ItemList::from_response(LIST_JSON.as_bytes(), &client()).unwrap();

    let kinds: Vec<bool> = list.items().iter().map(ListItem::is_title).collect();
    assert_eq!(kinds, vec![true, false, true, false]);

    let titles: Vec<_> = list.titles().map(|t| t.title().title()).collect();
    assert_eq!(titles, vec!["The Hollow Man", "The Big Sleep"]);

    let hollow = list.titles().next().unwrap().title();
    assert_eq!(hollow.format().map(|f| f.id()), Some("BK"));
    assert_eq!(hollow.authors(), ["Carr, John Dickson"]);

    let sleep = list.titles().nth(1).unwrap().title();
    assert_eq!(sleep.sub_title(), Some("A Novel"));
    assert_eq!(sleep.authors(), ["Chandler, Raymond"]);
    assert_eq!(sleep.details_url(), None);

    // "link" is not a known discriminator and still reads as a url entry
    let urls: Vec<_> = list.urls().map(|u| u.url()).collect();
    assert_eq!(
        urls,
        vec![
            "https://www.nypl.org/books-more/recommendations",
            "https://www.gutenberg.org/ebooks/1661",
        ]
    );
}

#[test]
fn test_title_url_bogus_ordering() {
    let raw = minimal(json!([
        { "list_item_type": "title", "title": { "id": "a", "title": "First" } },
        { "list_item_type": "url", "url": { "url": "https://second.example" } },
        { "list_item_type": "bogus", "url": { "url": "https://third.example" } },
    ]));
    let list = ItemList::parse(&raw, &client()).unwrap();

    assert!(matches!(
        list.items(),
        [ListItem::Title(_), ListItem::Url(_), ListItem::Url(_)]
    ));
    assert_eq!(
        list.items()[2].as_url().map(|u| u.url()),
        Some("https://third.example")
    );
}

#[test]
fn test_list_type_absent_or_null() {
    let omitted = minimal(json!([]));
    assert!(ItemList::parse(&omitted, &client()).unwrap().list_type().is_none());

    let mut null = minimal(json!([]));
    null["list_type"] = Value::Null;
    assert!(ItemList::parse(&null, &client()).unwrap().list_type().is_none());

    let mut present = minimal(json!([]));
    present["list_type"] = json!({ "id": 3, "name": "Staff Picks" });
    let list = ItemList::parse(&present, &client()).unwrap();
    let list_type = list.list_type().expect("list type present");
    assert_eq!(list_type.id(), "3");
    assert_eq!(list_type.name(), "Staff Picks");
}

#[test]
fn test_invalid_created() {
    let mut raw = minimal(json!([]));
    raw["created"] = json!("not-a-date");

    match ItemList::parse(&raw, &client()) {
        Err(MappingError::InvalidTimestamp { field, value, .. }) => {
            assert_eq!(field, "created");
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected InvalidTimestamp, got {other:?}"),
    }
}

#[test]
fn test_missing_fields() {
    for key in [
        "id",
        "name",
        "item_count",
        "created",
        "updated",
        "details_url",
        "user",
        "list_items",
    ] {
        let mut raw = minimal(json!([]));
        raw.as_object_mut().unwrap().remove(key);
        match ItemList::parse(&raw, &client()) {
            Err(MappingError::MissingField { field }) => assert_eq!(field, key),
            other => panic!("removing {key}: expected MissingField, got {other:?}"),
        }
    }
}

#[test]
fn test_invalid_user_is_wrapped() {
    let mut raw = minimal(json!([]));
    raw["user"] = json!({ "id": "9" });

    match ItemList::parse(&raw, &client()) {
        Err(MappingError::InvalidUser(inner)) => {
            assert!(matches!(*inner, MappingError::MissingField { ref field } if field == "name"));
        }
        other => panic!("expected InvalidUser, got {other:?}"),
    }
}

#[test]
fn test_bad_item_aborts_with_index() {
    let raw = minimal(json!([
        { "list_item_type": "url", "url": { "url": "https://ok.example" } },
        { "list_item_type": "title", "title": { "id": "x" } },
    ]));

    match ItemList::parse(&raw, &client()) {
        Err(MappingError::InvalidItem { index, source }) => {
            assert_eq!(index, 1);
            assert!(matches!(*source, MappingError::MissingField { ref field } if field == "title"));
        }
        other => panic!("expected InvalidItem, got {other:?}"),
    }
}

#[test]
fn test_negative_item_count() {
    let mut raw = minimal(json!([]));
    raw["item_count"] = json!(-2);
    assert!(matches!(
        ItemList::parse(&raw, &client()),
        Err(MappingError::InvalidField { field, .. }) if field == "item_count"
    ));
}

#[test]
fn test_round_trip_scalars() {
    let raw: Value = serde_json::from_str(LIST_JSON).unwrap();
    let list = ItemList::parse(&raw["list"], &client()).unwrap();
    let out = serde_json::to_value(&list).unwrap();

    for key in ["id", "name", "item_count", "details_url"] {
        assert_eq!(out[key], raw["list"][key], "{key} changed on round trip");
    }
    assert_eq!(out["list_items"].as_array().map(Vec::len), Some(4));
    assert_eq!(out["list_items"][3]["list_item_type"], "url");
}

#[test]
fn test_parse_is_deterministic() {
    let a = ItemList::from_response(LIST_JSON.as_bytes(), &client()).unwrap();
    let b = ItemList::from_response(LIST_JSON.as_bytes(), &client()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_from_response_requires_envelope() {
    let bare = serde_json::to_vec(&minimal(json!([]))).unwrap();
    assert!(matches!(
        ItemList::from_response(&bare, &client()),
        Err(MappingError::MissingField { field }) if field == "list"
    ));
    assert!(ItemList::from_slice(&bare, &client()).is_ok());
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        ItemList::from_slice(b"{ not json", &client()),
        Err(MappingError::Json(_))
    ));
}
