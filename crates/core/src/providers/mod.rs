pub mod traits;

// Catalog implementations
pub mod http_catalog;
pub mod static_catalog;
