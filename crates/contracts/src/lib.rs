pub mod domain;
pub mod error;
pub mod list;
pub mod store;

pub use error::ValidationError;
pub use store::{ListPage, OrderStore};
