use super::state::{DialogState, OrdersListState};
use contracts::domain::order::{Currency, OrderDraft, OrderStatus};
use leptos::prelude::*;
use thaw::*;

fn status_choices() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select status".to_string())];
    options.extend(
        OrderStatus::all()
            .into_iter()
            .map(|s| (s.label().to_string(), s.label().to_string())),
    );
    options
}

fn currency_choices() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select currency".to_string())];
    options.extend(
        Currency::all()
            .into_iter()
            .map(|c| (c.code().to_string(), c.code().to_string())),
    );
    options
}

/// Add New Order form.
///
/// Collects raw field values and hands the draft to the store; the store
/// owns all parsing and validation. A `ValidationError` is shown inline
/// and leaves the form open with its values intact.
#[component]
pub fn AddOrderDialog(state: RwSignal<OrdersListState>) -> impl IntoView {
    let customer_id = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let total = RwSignal::new(String::new());
    let order_date = RwSignal::new(String::new());
    let currency = RwSignal::new(String::new());

    let (error, set_error) = signal::<Option<String>>(None);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let draft = OrderDraft {
            customer_id: customer_id.get_untracked(),
            status: status.get_untracked(),
            quantity: quantity.get_untracked(),
            total: total.get_untracked(),
            order_date: order_date.get_untracked(),
            currency: currency.get_untracked(),
        };

        let mut failure: Option<String> = None;
        state.update(|s| match s.store.create(&draft) {
            Ok(order) => {
                s.dialog = DialogState::Idle;
                s.page = 1;
                s.selection.clear();
                s.notice = Some(format!("Order {} created.", order.id));
                leptos::logging::log!("created order {}", order.id);
            }
            Err(err) => {
                failure = Some(err.to_string());
            }
        });

        set_error.set(failure);
    };

    view! {
        <div class="dialog dialog--form">
            <h3 class="dialog__title">"Add New Order"</h3>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <form class="form" on:submit=handle_submit>
                <div class="form__row">
                    <label class="form__label" for="customer-id">"Customer ID"</label>
                    <input
                        id="customer-id"
                        type="text"
                        class="form__input"
                        prop:value=customer_id
                        on:input=move |ev| customer_id.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    <label class="form__label" for="order-status">"Status"</label>
                    <select
                        id="order-status"
                        class="form__select"
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {status_choices().into_iter().map(|(val, label)| {
                            let val_for_selected = val.clone();
                            view! {
                                <option
                                    value=val
                                    selected=move || status.get() == val_for_selected
                                >
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__row">
                    <label class="form__label" for="order-quantity">"Quantity"</label>
                    <input
                        id="order-quantity"
                        type="number"
                        min="0"
                        class="form__input"
                        prop:value=quantity
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    <label class="form__label" for="order-total">"Total"</label>
                    <input
                        id="order-total"
                        type="number"
                        min="0"
                        step="0.01"
                        class="form__input"
                        prop:value=total
                        on:input=move |ev| total.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    <label class="form__label" for="order-date">"Order Date"</label>
                    <input
                        id="order-date"
                        type="date"
                        class="form__input"
                        prop:value=order_date
                        on:input=move |ev| order_date.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    <label class="form__label" for="order-currency">"Currency"</label>
                    <select
                        id="order-currency"
                        class="form__select"
                        on:change=move |ev| currency.set(event_target_value(&ev))
                    >
                        {currency_choices().into_iter().map(|(val, label)| {
                            let val_for_selected = val.clone();
                            view! {
                                <option
                                    value=val
                                    selected=move || currency.get() == val_for_selected
                                >
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="dialog__footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            state.update(|s| s.dialog = DialogState::Idle);
                        }
                    >
                        "Cancel"
                    </Button>
                    <button type="submit" class="btn-primary">
                        "Add Order"
                    </button>
                </div>
            </form>
        </div>
    }
}
