use chrono::NaiveDate;
use contracts::domain::order::{seed_orders, Currency, OrderStatus};
use contracts::list::{DateRange, FilterState, RowSelection, SortConfig, SortDirection, SortKey};
use contracts::OrderStore;
use leptos::prelude::*;

pub const ITEMS_PER_PAGE: usize = 10;

/// Page-level dialog machine. All transitions are synchronous and
/// user-triggered; no dialog opens on top of another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    Idle,
    /// Add-order form is open.
    Editing,
    /// Bulk-delete confirmation is open.
    ConfirmingDelete,
}

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub store: OrderStore,
    // Search fields
    pub search_query: String,
    // Filter fields
    pub status_filter: Option<OrderStatus>,
    pub currency_filter: Option<Currency>,
    pub date_from: String,
    pub date_to: String,
    // Sorting
    pub sort: Option<SortConfig>,
    // Selection
    pub selection: RowSelection,
    // Pagination fields
    pub page: usize,
    pub page_size: usize,
    // Dialogs and transient UI
    pub dialog: DialogState,
    pub notice: Option<String>,
    pub detail_id: Option<String>,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self {
            store: OrderStore::new(seed_orders()),
            search_query: String::new(),
            status_filter: None,
            currency_filter: None,
            // Default period matches the seeded data window
            date_from: "2025-06-16".to_string(),
            date_to: "2025-06-26".to_string(),
            sort: Some(SortConfig {
                key: SortKey::CreatedAt,
                direction: SortDirection::Descending, // Newest first
            }),
            selection: RowSelection::new(),
            page: 1,
            page_size: ITEMS_PER_PAGE,
            dialog: DialogState::Idle,
            notice: None,
            detail_id: None,
        }
    }
}

impl OrdersListState {
    /// Builds the pipeline filter from the raw UI fields. Unparsable date
    /// strings simply drop the date predicate.
    pub fn filter_state(&self) -> FilterState {
        let from = NaiveDate::parse_from_str(&self.date_from, "%Y-%m-%d").ok();
        let to = NaiveDate::parse_from_str(&self.date_to, "%Y-%m-%d").ok();

        FilterState {
            search_query: self.search_query.clone(),
            status: self.status_filter,
            currency: self.currency_filter,
            date_range: from.map(|from| DateRange { from, to }),
        }
    }

    /// Filter changes restart the view: back to page 1, selection dropped
    /// (the checked rows may no longer be visible).
    pub fn reset_view(&mut self) {
        self.page = 1;
        self.selection.clear();
    }

    /// Header click: same key flips ascending to descending, anything else
    /// starts ascending on the new key.
    pub fn toggle_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(SortConfig {
                key: current,
                direction: SortDirection::Ascending,
            }) if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
        self.page = 1;
    }
}

/// Create state signal
pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}
