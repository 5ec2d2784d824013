//! In-memory mock dataset the dashboard starts with.
//!
//! There is no backend: this collection is the whole universe of orders
//! until the user creates or deletes records. Order dates cluster inside
//! 2025-06-10..2025-06-28 so the default date filter shows data.

use super::{BackOrder, Currency, Order, OrderStatus};
use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;

fn ts(value: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .expect("Invalid seed timestamp")
        .and_utc()
}

#[allow(clippy::too_many_arguments)]
fn order(
    seq: u32,
    customer_id: &str,
    status: OrderStatus,
    total: f64,
    quantity: u32,
    confirmed_quantity: u32,
    back_order: BackOrder,
    currency: Currency,
    order_date: &str,
    created_at: &str,
) -> Order {
    Order {
        id: format!("ORD-{:03}", seq),
        temporary_order_id: format!("TEMP-{:03}", seq),
        customer_id: customer_id.to_string(),
        status,
        total,
        quantity,
        confirmed_quantity,
        back_order,
        currency,
        order_date: ts(order_date),
        created_at: ts(created_at),
    }
}

static SEED: Lazy<Vec<Order>> = Lazy::new(|| {
    use BackOrder::{No, Yes};
    use Currency::{Usd, Vnd};
    use OrderStatus::*;

    vec![
        order(1, "CUST-0458", Completed, 12_850_000.0, 24, 24, No, Vnd, "2025-06-16 08:30:00", "2025-06-16 08:31:12"),
        order(2, "CUST-1204", NewOrder, 1_540.75, 8, 8, No, Usd, "2025-06-17 10:05:00", "2025-06-17 10:06:40"),
        order(3, "CUST-0458", Draft, 3_400_000.0, 6, 0, No, Vnd, "2025-06-17 14:22:00", "2025-06-17 14:22:31"),
        order(4, "CUST-0871", WaitingProcess, 980.00, 4, 2, Yes, Usd, "2025-06-18 09:15:00", "2025-06-18 09:16:05"),
        order(5, "CUST-0023", Completed, 45_200_000.0, 60, 60, No, Vnd, "2025-06-18 11:47:00", "2025-06-18 11:48:20"),
        order(6, "CUST-1204", Cancelled, 210.50, 2, 0, No, Usd, "2025-06-19 07:58:00", "2025-06-19 07:59:44"),
        order(7, "CUST-0655", NewOrder, 7_150_000.0, 12, 12, No, Vnd, "2025-06-19 16:03:00", "2025-06-19 16:04:10"),
        order(8, "CUST-0023", Rejected, 5_320.00, 16, 0, No, Usd, "2025-06-20 08:41:00", "2025-06-20 08:42:02"),
        order(9, "CUST-0871", Completed, 18_600_000.0, 30, 28, Yes, Vnd, "2025-06-20 13:26:00", "2025-06-20 13:27:55"),
        order(10, "CUST-0990", WaitingProcess, 2_480.25, 10, 10, No, Usd, "2025-06-21 09:33:00", "2025-06-21 09:34:18"),
        order(11, "CUST-0655", Draft, 950_000.0, 3, 0, No, Vnd, "2025-06-21 15:12:00", "2025-06-21 15:12:49"),
        order(12, "CUST-0458", NewOrder, 26_700_000.0, 40, 36, Yes, Vnd, "2025-06-22 10:54:00", "2025-06-22 10:55:30"),
        order(13, "CUST-1377", Completed, 640.00, 5, 5, No, Usd, "2025-06-22 17:38:00", "2025-06-22 17:39:07"),
        order(14, "CUST-0990", Cancelled, 4_100_000.0, 7, 0, No, Vnd, "2025-06-23 08:05:00", "2025-06-23 08:06:21"),
        order(15, "CUST-0023", NewOrder, 11_900.00, 22, 22, No, Usd, "2025-06-23 14:49:00", "2025-06-23 14:50:33"),
        order(16, "CUST-1377", WaitingProcess, 9_850_000.0, 18, 9, Yes, Vnd, "2025-06-24 09:27:00", "2025-06-24 09:28:14"),
        order(17, "CUST-0871", Draft, 330.80, 1, 0, No, Usd, "2025-06-24 16:11:00", "2025-06-24 16:11:58"),
        order(18, "CUST-0655", Completed, 62_400_000.0, 85, 85, No, Vnd, "2025-06-25 07:44:00", "2025-06-25 07:45:36"),
        order(19, "CUST-1204", NewOrder, 1_275.00, 6, 6, No, Usd, "2025-06-25 12:19:00", "2025-06-25 12:20:41"),
        order(20, "CUST-0990", Rejected, 5_600_000.0, 9, 0, No, Vnd, "2025-06-26 10:36:00", "2025-06-26 10:37:29"),
        order(21, "CUST-0458", Completed, 8_720.50, 14, 14, No, Usd, "2025-06-26 15:58:00", "2025-06-26 15:59:12"),
        order(22, "CUST-1377", NewOrder, 14_300_000.0, 20, 20, No, Vnd, "2025-06-27 09:02:00", "2025-06-27 09:03:47"),
    ]
});

/// Fresh copy of the mock collection.
pub fn seed_orders() -> Vec<Order> {
    SEED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_unique() {
        let orders = seed_orders();
        let mut ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn test_seed_covers_all_statuses() {
        let orders = seed_orders();
        for status in OrderStatus::all() {
            assert!(
                orders.iter().any(|o| o.status == status),
                "no seed order with status {}",
                status
            );
        }
    }
}
