use crate::domain::order::Order;
use std::cmp::Ordering;

/// Sortable order fields. One variant per table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    TemporaryOrderId,
    Id,
    CustomerId,
    BackOrder,
    Status,
    OrderDate,
    Quantity,
    ConfirmedQuantity,
    Total,
    CreatedAt,
    Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort. `None` at the call site means "leave input order alone".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

fn compare_by_key(a: &Order, b: &Order, key: SortKey) -> Ordering {
    match key {
        SortKey::TemporaryOrderId => a.temporary_order_id.cmp(&b.temporary_order_id),
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::CustomerId => a.customer_id.cmp(&b.customer_id),
        SortKey::BackOrder => a.back_order.label().cmp(b.back_order.label()),
        SortKey::Status => a.status.label().cmp(b.status.label()),
        // Date fields compare by timestamp, not by their rendered string:
        // ISO strings with mixed precision do not sort lexicographically.
        SortKey::OrderDate => a
            .order_date
            .timestamp_millis()
            .cmp(&b.order_date.timestamp_millis()),
        SortKey::CreatedAt => a
            .created_at
            .timestamp_millis()
            .cmp(&b.created_at.timestamp_millis()),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::ConfirmedQuantity => a.confirmed_quantity.cmp(&b.confirmed_quantity),
        SortKey::Total => a.total.partial_cmp(&b.total).unwrap_or(Ordering::Equal),
        SortKey::Currency => a.currency.code().cmp(b.currency.code()),
    }
}

/// Stable in-place sort. Ties keep their input order, so pagination over a
/// sorted list is reproducible.
pub fn sort_orders(orders: &mut [Order], config: Option<SortConfig>) {
    let Some(config) = config else {
        return;
    };

    orders.sort_by(|a, b| {
        let ord = compare_by_key(a, b, config.key);
        match config.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::seed_orders;

    #[test]
    fn test_none_config_keeps_input_order() {
        let orders = seed_orders();
        let mut sorted = orders.clone();
        sort_orders(&mut sorted, None);
        assert_eq!(sorted, orders);
    }

    #[test]
    fn test_sort_by_order_date_descending() {
        let mut orders = seed_orders();
        sort_orders(
            &mut orders,
            Some(SortConfig {
                key: SortKey::OrderDate,
                direction: SortDirection::Descending,
            }),
        );
        assert!(orders
            .windows(2)
            .all(|pair| pair[0].order_date >= pair[1].order_date));
    }

    #[test]
    fn test_sort_by_total_ascending() {
        let mut orders = seed_orders();
        sort_orders(
            &mut orders,
            Some(SortConfig {
                key: SortKey::Total,
                direction: SortDirection::Ascending,
            }),
        );
        assert!(orders.windows(2).all(|pair| pair[0].total <= pair[1].total));
    }

    #[test]
    fn test_ascending_reversed_equals_descending() {
        // Total order over ids (all unique), so the reversal is exact.
        let mut asc = seed_orders();
        sort_orders(
            &mut asc,
            Some(SortConfig {
                key: SortKey::Id,
                direction: SortDirection::Ascending,
            }),
        );
        asc.reverse();

        let mut desc = seed_orders();
        sort_orders(
            &mut desc,
            Some(SortConfig {
                key: SortKey::Id,
                direction: SortDirection::Descending,
            }),
        );
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let orders = seed_orders();
        let mut sorted = orders.clone();
        sort_orders(
            &mut sorted,
            Some(SortConfig {
                key: SortKey::CustomerId,
                direction: SortDirection::Ascending,
            }),
        );

        // Records sharing a customer keep their original relative order.
        for customer in ["CUST-0458", "CUST-1204", "CUST-0023"] {
            let original: Vec<&str> = orders
                .iter()
                .filter(|o| o.customer_id == customer)
                .map(|o| o.id.as_str())
                .collect();
            let after: Vec<&str> = sorted
                .iter()
                .filter(|o| o.customer_id == customer)
                .map(|o| o.id.as_str())
                .collect();
            assert_eq!(original, after, "tie order changed for {}", customer);
        }
    }
}
