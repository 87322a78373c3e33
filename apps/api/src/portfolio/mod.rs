// Portfolio records: data model, boundary checks, and the storage seam.

pub mod handlers;
pub mod models;
pub mod store;
pub mod validation;

pub use store::{InMemoryPortfolioStore, PortfolioStore};
