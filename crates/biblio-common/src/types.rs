/// UTC timestamps as reported by the catalog API.
pub mod datetime;

pub use datetime::Datetime;
