use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "New Order")]
    NewOrder,
    Completed,
    Draft,
    Cancelled,
    #[serde(rename = "Waiting Process")]
    WaitingProcess,
    Rejected,
}

impl OrderStatus {
    /// Human-readable label, also the wire form used by the create form.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::NewOrder => "New Order",
            OrderStatus::Completed => "Completed",
            OrderStatus::Draft => "Draft",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::WaitingProcess => "Waiting Process",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// All statuses, in the order the UI lists them.
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::NewOrder,
            OrderStatus::Completed,
            OrderStatus::Draft,
            OrderStatus::Cancelled,
            OrderStatus::WaitingProcess,
            OrderStatus::Rejected,
        ]
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "New Order" => Some(OrderStatus::NewOrder),
            "Completed" => Some(OrderStatus::Completed),
            "Draft" => Some(OrderStatus::Draft),
            "Cancelled" => Some(OrderStatus::Cancelled),
            "Waiting Process" => Some(OrderStatus::WaitingProcess),
            "Rejected" => Some(OrderStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Settlement currency. Determines how `Order::total` is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "VND")]
    Vnd,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Vnd => "VND",
            Currency::Usd => "USD",
        }
    }

    pub fn all() -> Vec<Currency> {
        vec![Currency::Vnd, Currency::Usd]
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "VND" => Some(Currency::Vnd),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Back-order flag: unfulfilled quantity carried to a future shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackOrder {
    Yes,
    No,
}

impl BackOrder {
    pub fn label(&self) -> &'static str {
        match self {
            BackOrder::Yes => "Yes",
            BackOrder::No => "No",
        }
    }
}

impl std::fmt::Display for BackOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One purchase record tracked by the dashboard.
///
/// `id` is unique within a store. `confirmed_quantity <= quantity` is a
/// business expectation but is not validated anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub temporary_order_id: String,
    pub customer_id: String,
    pub status: OrderStatus,
    pub total: f64,
    pub quantity: u32,
    pub confirmed_quantity: u32,
    pub back_order: BackOrder,
    pub currency: Currency,
    /// Business date of the order.
    pub order_date: DateTime<Utc>,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
}

/// Raw values from the create-order form.
///
/// Everything is a string; parsing and validation happen in
/// `OrderStore::create`, which is the only place drafts turn into records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_id: String,
    pub status: String,
    pub quantity: String,
    pub total: String,
    /// ISO date, `yyyy-mm-dd`.
    pub order_date: String,
    pub currency: String,
}
