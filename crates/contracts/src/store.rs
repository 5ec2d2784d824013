use crate::domain::order::{BackOrder, Currency, Order, OrderDraft, OrderStatus};
use crate::error::ValidationError;
use crate::list::{filter_orders, paginate, sort_orders, FilterState, SortConfig};
use chrono::{NaiveDate, Utc};
use std::collections::HashSet;

/// One page of the derived list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub items: Vec<Order>,
    /// Count after filtering, before pagination.
    pub total_count: usize,
    pub total_pages: usize,
}

/// Owner of the order collection.
///
/// The only mutations are `create` and `delete_by_ids`, both invoked from
/// user-triggered handlers; everything else derives read-only views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Next sequence number for generated ids. Derived from the collection
    /// length, then moved forward past any id still in use so a create
    /// after a mid-list delete cannot collide.
    fn next_sequence(&self) -> u32 {
        let mut seq = self.orders.len() as u32 + 1;
        while self
            .orders
            .iter()
            .any(|o| o.id == format!("ORD-{:03}", seq))
        {
            seq += 1;
        }
        seq
    }

    /// Validates the draft, builds the record and prepends it to the
    /// collection (most-recent-first is a presentation convention).
    ///
    /// After a successful create the caller is expected to reset the row
    /// selection and return to page 1.
    pub fn create(&mut self, draft: &OrderDraft) -> Result<Order, ValidationError> {
        let customer_id = draft.customer_id.trim();
        if customer_id.is_empty() {
            return Err(ValidationError::Missing("customer_id"));
        }

        if draft.status.is_empty() {
            return Err(ValidationError::Missing("status"));
        }
        let status = OrderStatus::parse(&draft.status)
            .ok_or_else(|| ValidationError::invalid("status", &draft.status))?;

        if draft.quantity.is_empty() {
            return Err(ValidationError::Missing("quantity"));
        }
        let quantity: u32 = draft
            .quantity
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid("quantity", &draft.quantity))?;

        if draft.total.is_empty() {
            return Err(ValidationError::Missing("total"));
        }
        let total: f64 = draft
            .total
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid("total", &draft.total))?;
        if !total.is_finite() || total < 0.0 {
            return Err(ValidationError::invalid("total", &draft.total));
        }

        if draft.order_date.is_empty() {
            return Err(ValidationError::Missing("order_date"));
        }
        let order_date = NaiveDate::parse_from_str(draft.order_date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::invalid("order_date", &draft.order_date))?
            .and_hms_opt(0, 0, 0)
            .expect("Invalid midnight")
            .and_utc();

        if draft.currency.is_empty() {
            return Err(ValidationError::Missing("currency"));
        }
        let currency = Currency::parse(&draft.currency)
            .ok_or_else(|| ValidationError::invalid("currency", &draft.currency))?;

        let seq = self.next_sequence();
        let order = Order {
            id: format!("ORD-{:03}", seq),
            temporary_order_id: format!("TEMP-{:03}", seq),
            customer_id: customer_id.to_string(),
            status,
            total,
            quantity,
            confirmed_quantity: quantity,
            back_order: BackOrder::No,
            currency,
            order_date,
            created_at: Utc::now(),
        };

        self.orders.insert(0, order.clone());
        Ok(order)
    }

    /// Removes every order whose id is in `ids`. Unknown ids are ignored.
    /// Returns the number actually removed.
    pub fn delete_by_ids(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.orders.len();
        self.orders.retain(|order| !ids.contains(&order.id));
        before - self.orders.len()
    }

    /// Runs the full pipeline: filter -> sort -> paginate.
    pub fn list(
        &self,
        filter: &FilterState,
        sort: Option<SortConfig>,
        page: usize,
        page_size: usize,
    ) -> ListPage {
        let mut filtered = filter_orders(&self.orders, filter);
        let total_count = filtered.len();
        sort_orders(&mut filtered, sort);
        let (items, total_pages) = paginate(&filtered, page, page_size);

        ListPage {
            items,
            total_count,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::seed_orders;
    use crate::list::{DateRange, SortDirection, SortKey};

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_id: "CUST-9000".to_string(),
            status: "New Order".to_string(),
            quantity: "5".to_string(),
            total: "1250.50".to_string(),
            order_date: "2025-06-28".to_string(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_create_prepends_and_fills_derived_fields() {
        let mut store = OrderStore::new(seed_orders());
        let before = store.len();

        let order = store.create(&draft()).expect("create failed");

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.orders()[0], order);
        assert_eq!(order.confirmed_quantity, order.quantity);
        assert_eq!(order.back_order, BackOrder::No);
        assert!(order.id.starts_with("ORD-"));
        assert!(order.temporary_order_id.starts_with("TEMP-"));
    }

    #[test]
    fn test_create_generates_unique_id() {
        let mut store = OrderStore::new(seed_orders());
        let order = store.create(&draft()).expect("create failed");
        assert_eq!(
            store.orders().iter().filter(|o| o.id == order.id).count(),
            1
        );
    }

    #[test]
    fn test_create_skips_taken_ids_after_delete() {
        let mut store = OrderStore::new(seed_orders());
        // Drop an early record: length shrinks, but ORD-022 still exists.
        let removed = store.delete_by_ids(&HashSet::from(["ORD-001".to_string()]));
        assert_eq!(removed, 1);

        let order = store.create(&draft()).expect("create failed");
        assert_eq!(
            store.orders().iter().filter(|o| o.id == order.id).count(),
            1
        );
    }

    #[test]
    fn test_create_missing_fields() {
        let mut store = OrderStore::new(seed_orders());
        let before = store.len();

        for (field, patch) in [
            ("customer_id", OrderDraft { customer_id: String::new(), ..draft() }),
            ("status", OrderDraft { status: String::new(), ..draft() }),
            ("quantity", OrderDraft { quantity: String::new(), ..draft() }),
            ("total", OrderDraft { total: String::new(), ..draft() }),
            ("order_date", OrderDraft { order_date: String::new(), ..draft() }),
            ("currency", OrderDraft { currency: String::new(), ..draft() }),
        ] {
            let err = store.create(&patch).expect_err("expected validation error");
            assert_eq!(err, ValidationError::Missing(field));
        }

        // Failed creates leave the store untouched.
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_create_unparsable_fields() {
        let mut store = OrderStore::new(seed_orders());
        let before = store.len();

        let bad_quantity = OrderDraft {
            quantity: "many".to_string(),
            ..draft()
        };
        assert_eq!(
            store.create(&bad_quantity).expect_err("bad quantity").field(),
            "quantity"
        );

        let negative_total = OrderDraft {
            total: "-5".to_string(),
            ..draft()
        };
        assert_eq!(
            store.create(&negative_total).expect_err("negative total").field(),
            "total"
        );

        let bad_date = OrderDraft {
            order_date: "28/06/2025".to_string(),
            ..draft()
        };
        assert_eq!(
            store.create(&bad_date).expect_err("bad date").field(),
            "order_date"
        );

        let bad_status = OrderDraft {
            status: "Shipped".to_string(),
            ..draft()
        };
        assert_eq!(
            store.create(&bad_status).expect_err("bad status").field(),
            "status"
        );

        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_delete_removes_exactly_matching_ids() {
        let mut store = OrderStore::new(seed_orders());
        let before = store.len();

        let ids = HashSet::from(["ORD-002".to_string(), "ORD-005".to_string()]);
        assert_eq!(store.delete_by_ids(&ids), 2);
        assert_eq!(store.len(), before - 2);
        assert!(store.get("ORD-002").is_none());
        assert!(store.get("ORD-005").is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = OrderStore::new(seed_orders());
        let before = store.len();

        let ids = HashSet::from(["ORD-003".to_string(), "ORD-999".to_string()]);
        assert_eq!(store.delete_by_ids(&ids), 1);
        assert_eq!(store.len(), before - 1);
    }

    #[test]
    fn test_list_runs_full_pipeline() {
        let store = OrderStore::new(seed_orders());
        let filter = FilterState {
            currency: Some(Currency::Vnd),
            ..Default::default()
        };
        let sort = Some(SortConfig {
            key: SortKey::Total,
            direction: SortDirection::Descending,
        });

        let page = store.list(&filter, sort, 1, 8);
        assert_eq!(page.items.len(), 8.min(page.total_count));
        assert!(page.items.windows(2).all(|p| p[0].total >= p[1].total));
        assert_eq!(page.total_pages, (page.total_count + 7) / 8);
    }

    #[test]
    fn test_scenario_status_filter_and_date_sort() {
        // End-to-end check mirroring the two-record scenario: filtering by
        // Completed yields only completed orders; sorting by order date
        // descending puts the later order first.
        let mut store = OrderStore::new(Vec::new());
        store
            .create(&OrderDraft {
                customer_id: "C1".to_string(),
                status: "Completed".to_string(),
                quantity: "1".to_string(),
                total: "10".to_string(),
                order_date: "2025-06-20".to_string(),
                currency: "USD".to_string(),
            })
            .expect("create 1");
        store
            .create(&OrderDraft {
                customer_id: "C2".to_string(),
                status: "Draft".to_string(),
                quantity: "1".to_string(),
                total: "20".to_string(),
                order_date: "2025-06-25".to_string(),
                currency: "USD".to_string(),
            })
            .expect("create 2");

        let completed = store.list(
            &FilterState {
                status: Some(OrderStatus::Completed),
                ..Default::default()
            },
            None,
            1,
            10,
        );
        assert_eq!(completed.total_count, 1);
        assert_eq!(completed.items[0].id, "ORD-001");

        let by_date = store.list(
            &FilterState::default(),
            Some(SortConfig {
                key: SortKey::OrderDate,
                direction: SortDirection::Descending,
            }),
            1,
            10,
        );
        let ids: Vec<&str> = by_date.items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-002", "ORD-001"]);
    }

    #[test]
    fn test_list_with_date_range() {
        let store = OrderStore::new(seed_orders());
        let filter = FilterState {
            date_range: Some(DateRange {
                from: NaiveDate::from_ymd_opt(2025, 6, 16).expect("date"),
                to: NaiveDate::from_ymd_opt(2025, 6, 26),
            }),
            ..Default::default()
        };
        let page = store.list(&filter, None, 1, 100);
        assert!(page.total_count < store.len());
        assert!(page
            .items
            .iter()
            .all(|o| o.order_date.date_naive() <= NaiveDate::from_ymd_opt(2025, 6, 26).expect("date")));
    }
}
