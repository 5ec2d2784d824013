use contracts::domain::order::OrderStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "accent",
    /// "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge variant for an order status.
pub fn status_badge_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "success",
        OrderStatus::NewOrder => "primary",
        OrderStatus::Draft => "neutral",
        OrderStatus::Cancelled => "error",
        OrderStatus::WaitingProcess => "warning",
        OrderStatus::Rejected => "accent",
    }
}
