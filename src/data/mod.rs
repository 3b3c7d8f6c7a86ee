mod loader;

pub use loader::{LoadError, load_items_from_json, parse_items};
