pub mod cache;
pub mod consts;
pub mod rows;
pub mod store;

// re-exports
pub use cache::CatalogCache;
pub use rows::*;
pub use store::Catalog;
