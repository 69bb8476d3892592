pub mod dates;
pub mod filter_service;
pub mod history_service;
pub mod interest_store;
pub mod profile_service;
pub mod summary_service;
