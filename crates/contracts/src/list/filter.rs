use crate::domain::order::{Currency, Order, OrderStatus};
use chrono::{DateTime, NaiveDate, Utc};

/// Inclusive business-date window. `from` is required when a range is
/// active; `to` is optional and covers its entire calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Lower bound: start of `from`, UTC.
    fn start(&self) -> DateTime<Utc> {
        self.from
            .and_hms_opt(0, 0, 0)
            .expect("Invalid range start")
            .and_utc()
    }

    /// Upper bound: end of `to`, UTC. All timestamps in the crate are UTC,
    /// so "inclusive of the whole day" means up to 23:59:59.999Z.
    fn end(&self) -> Option<DateTime<Utc>> {
        self.to.map(|to| {
            to.and_hms_milli_opt(23, 59, 59, 999)
                .expect("Invalid range end")
                .and_utc()
        })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if at < self.start() {
            return false;
        }
        match self.end() {
            Some(end) => at <= end,
            None => true,
        }
    }
}

/// Active filter settings for the order list.
///
/// `None` in `status`/`currency` means "all"; an empty query matches
/// everything; `date_range == None` disables the date predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_query: String,
    pub status: Option<OrderStatus>,
    pub currency: Option<Currency>,
    pub date_range: Option<DateRange>,
}

impl FilterState {
    /// Number of non-default filters, for the filter-badge display.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.search_query.trim().is_empty() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if self.currency.is_some() {
            count += 1;
        }
        if self.date_range.is_some() {
            count += 1;
        }
        count
    }
}

fn matches_query(order: &Order, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    order.id.to_lowercase().contains(query)
        || order.customer_id.to_lowercase().contains(query)
        || order.temporary_order_id.to_lowercase().contains(query)
}

/// Applies all four predicates (AND). The predicates are independent, so
/// their order only affects short-circuiting.
pub fn filter_orders(orders: &[Order], state: &FilterState) -> Vec<Order> {
    let query = state.search_query.to_lowercase();

    orders
        .iter()
        .filter(|order| matches_query(order, &query))
        .filter(|order| state.status.map_or(true, |s| order.status == s))
        .filter(|order| state.currency.map_or(true, |c| order.currency == c))
        .filter(|order| {
            state
                .date_range
                .map_or(true, |range| range.contains(order.order_date))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::seed_orders;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad test date")
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let orders = seed_orders();
        let result = filter_orders(&orders, &FilterState::default());
        assert_eq!(result, orders);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let orders = seed_orders();
        let state = FilterState {
            search_query: "cust-0458".to_string(),
            ..Default::default()
        };
        let result = filter_orders(&orders, &state);
        assert!(!result.is_empty());
        assert!(result.iter().all(|o| o.customer_id == "CUST-0458"));
    }

    #[test]
    fn test_search_matches_order_and_temporary_ids() {
        let orders = seed_orders();
        let by_id = filter_orders(
            &orders,
            &FilterState {
                search_query: "ORD-001".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "ORD-001");

        let by_temp = filter_orders(
            &orders,
            &FilterState {
                search_query: "temp-002".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_temp.len(), 1);
        assert_eq!(by_temp[0].temporary_order_id, "TEMP-002");
    }

    #[test]
    fn test_status_and_currency_filters() {
        let orders = seed_orders();
        let state = FilterState {
            status: Some(OrderStatus::Completed),
            currency: Some(Currency::Vnd),
            ..Default::default()
        };
        let result = filter_orders(&orders, &state);
        assert!(!result.is_empty());
        assert!(result
            .iter()
            .all(|o| o.status == OrderStatus::Completed && o.currency == Currency::Vnd));
    }

    #[test]
    fn test_date_range_to_is_inclusive_of_whole_day() {
        let orders = seed_orders();
        // ORD-001 is dated 2025-06-16 08:30 UTC; a range ending on the 16th
        // must still include it.
        let state = FilterState {
            date_range: Some(DateRange {
                from: date("2025-06-16"),
                to: Some(date("2025-06-16")),
            }),
            ..Default::default()
        };
        let result = filter_orders(&orders, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "ORD-001");
    }

    #[test]
    fn test_date_range_without_to_is_open_ended() {
        let orders = seed_orders();
        let state = FilterState {
            date_range: Some(DateRange {
                from: date("2025-06-26"),
                to: None,
            }),
            ..Default::default()
        };
        let result = filter_orders(&orders, &state);
        assert!(result.iter().all(|o| o.order_date.date_naive() >= date("2025-06-26")));
        assert!(result.iter().any(|o| o.id == "ORD-022"));
    }

    #[test]
    fn test_filter_returns_subset() {
        let orders = seed_orders();
        let state = FilterState {
            search_query: "cust".to_string(),
            status: Some(OrderStatus::NewOrder),
            ..Default::default()
        };
        let result = filter_orders(&orders, &state);
        assert!(result.iter().all(|r| orders.contains(r)));
        assert!(result.len() <= orders.len());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let orders = seed_orders();
        let state = FilterState {
            status: Some(OrderStatus::Draft),
            currency: Some(Currency::Usd),
            ..Default::default()
        };
        let once = filter_orders(&orders, &state);
        let twice = filter_orders(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_active_count() {
        assert_eq!(FilterState::default().active_count(), 0);
        let state = FilterState {
            search_query: "x".to_string(),
            status: Some(OrderStatus::Draft),
            currency: None,
            date_range: Some(DateRange {
                from: date("2025-06-01"),
                to: None,
            }),
        };
        assert_eq!(state.active_count(), 3);
    }
}
