pub mod item_list;
pub mod list_item;
/// List categories.
pub mod list_type;
pub mod title;
pub mod user;

pub use item_list::ItemList;
pub use list_item::{DiscriminatorPolicy, ListItem, TitleItem, UrlItem, UrlLink};
pub use list_type::ListType;
pub use title::{Format, Title};
pub use user::User;
