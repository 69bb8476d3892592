pub mod activity;
pub mod filter;
pub mod history;
pub mod interest;
pub mod ipo;
pub mod profile;
pub mod settings;
pub mod snapshot;
pub mod summary;
