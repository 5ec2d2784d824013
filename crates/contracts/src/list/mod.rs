//! The list pipeline: filter -> sort -> paginate, plus row selection.
//!
//! Every function here is pure; the store is the only thing that mutates.

pub mod filter;
pub mod paginate;
pub mod selection;
pub mod sort;

pub use filter::{filter_orders, DateRange, FilterState};
pub use paginate::paginate;
pub use selection::RowSelection;
pub use sort::{sort_orders, SortConfig, SortDirection, SortKey};
