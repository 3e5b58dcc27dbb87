pub mod dataset;
pub mod kv;
pub mod profile;

pub use dataset::load_recipes;
pub use kv::{JsonFileStore, MemoryStore, StoragePort};
pub use profile::Profile;
