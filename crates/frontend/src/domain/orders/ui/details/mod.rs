use crate::shared::components::ui::badge::{status_badge_variant, Badge};
use crate::shared::date_utils::{format_date_utc, format_datetime_utc};
use crate::shared::icons::icon;
use crate::shared::money::format_currency;
use contracts::domain::order::Order;
use leptos::prelude::*;

/// Static delivery notes shown on every order, mirroring the dispatch
/// rules printed on the printed order form.
const DELIVERY_NOTES: [&str; 4] = [
    "Maximum shipment: 10 tons per trip",
    "Tire casings: up to 25 units",
    "Delivery address must match registered one",
    "Distance: 16 km",
];

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail__field">
            <span class="detail__field-label">{label}</span>
            <span class="detail__field-value">{value}</span>
        </div>
    }
}

/// Read-only order details view.
#[component]
pub fn OrderDetails(order: Order, on_close: Callback<()>) -> impl IntoView {
    let total = format_currency(order.total, order.currency);

    view! {
        <div class="detail">
            <div class="detail__header">
                <button
                    class="icon-btn"
                    title="Back to orders"
                    on:click=move |_| on_close.run(())
                >
                    {icon("arrow-left")}
                </button>
                <h2 class="page__title">"Order Details"</h2>
                <Badge variant=status_badge_variant(order.status).to_string()>
                    {order.status.label()}
                </Badge>
            </div>

            <div class="detail__grid">
                <div class="card detail__card">
                    <h3 class="detail__card-title">"Order Information"</h3>
                    {field("Order ID", order.id.clone())}
                    {field("Temporary Order ID", order.temporary_order_id.clone())}
                    {field("Order Date", format_datetime_utc(order.order_date))}
                    {field("Created", format_datetime_utc(order.created_at))}
                    {field("Ordered Quantity", order.quantity.to_string())}
                    {field("Confirmed Quantity", order.confirmed_quantity.to_string())}
                    {field("Back Order", order.back_order.label().to_string())}
                    {field("Currency", order.currency.code().to_string())}
                    {field("Total Amount (Incl. VAT)", total)}
                </div>

                <div class="card detail__card">
                    <h3 class="detail__card-title">"Customer Information"</h3>
                    {field("Customer ID", order.customer_id.clone())}
                    {field("Contact Person", "\u{2014}".to_string())}
                    {field("Phone", "\u{2014}".to_string())}
                    {field("Delivery Address", "\u{2014}".to_string())}
                    {field(
                        "Expected Delivery",
                        format_date_utc(order.order_date),
                    )}
                </div>

                <div class="card detail__card">
                    <h3 class="detail__card-title">"Delivery Notes"</h3>
                    <ul class="detail__notes">
                        {DELIVERY_NOTES.iter().map(|note| view! {
                            <li>{*note}</li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
