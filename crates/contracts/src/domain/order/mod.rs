pub mod aggregate;
pub mod seed;

pub use aggregate::{BackOrder, Currency, Order, OrderDraft, OrderStatus};
pub use seed::seed_orders;
