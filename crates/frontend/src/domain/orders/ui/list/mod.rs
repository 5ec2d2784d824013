pub mod add_order;
pub mod state;

use self::add_order::AddOrderDialog;
use self::state::{create_state, DialogState, OrdersListState};
use crate::domain::orders::ui::details::OrderDetails;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::{RowCheckbox, SelectAllCheckbox, SelectAllState};
use crate::shared::components::ui::badge::{status_badge_variant, Badge};
use crate::shared::components::ui::Select;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::date_utils::format_date_utc;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use crate::shared::money::format_currency;
use contracts::domain::order::{Currency, Order, OrderStatus};
use contracts::list::SortKey;
use leptos::prelude::*;
use thaw::*;

fn status_options() -> Vec<(String, String)> {
    let mut options = vec![("all".to_string(), "All Status".to_string())];
    options.extend(
        OrderStatus::all()
            .into_iter()
            .map(|s| (s.label().to_string(), s.label().to_string())),
    );
    options
}

fn currency_options() -> Vec<(String, String)> {
    let mut options = vec![("all".to_string(), "All".to_string())];
    options.extend(
        Currency::all()
            .into_iter()
            .map(|c| (c.code().to_string(), c.code().to_string())),
    );
    options
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let state = create_state();

    // Filtering, sorting and pagination run as one derived view.
    let list_page = Memo::new(move |_| {
        state.with(|s| s.store.list(&s.filter_state(), s.sort, s.page, s.page_size))
    });

    let selected_count = Signal::derive(move || state.with(|s| s.selection.count()));

    let select_all_state = Signal::derive(move || {
        let visible: Vec<String> = list_page.with(|p| p.items.iter().map(|o| o.id.clone()).collect());
        let selected_visible = state.with(|s| {
            visible
                .iter()
                .filter(|id| s.selection.is_selected(id))
                .count()
        });
        SelectAllState::from_counts(selected_visible, visible.len())
    });

    // Handlers

    let handle_sort = move |key: SortKey| {
        state.update(|s| s.toggle_sort(key));
    };

    let on_search = Callback::new(move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.reset_view();
        });
    });

    let on_status_filter = Callback::new(move |value: String| {
        state.update(|s| {
            // "all" falls through parse to None.
            s.status_filter = OrderStatus::parse(&value);
            s.reset_view();
        });
    });

    let on_currency_filter = Callback::new(move |value: String| {
        state.update(|s| {
            s.currency_filter = Currency::parse(&value);
            s.reset_view();
        });
    });

    let on_date_range = Callback::new(move |(from, to): (String, String)| {
        state.update(|s| {
            s.date_from = from;
            s.date_to = to;
            s.reset_view();
        });
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
    });

    let toggle_all = Callback::new(move |checked: bool| {
        // Read the visible page before taking the state borrow.
        let ids: Vec<String> =
            list_page.with_untracked(|p| p.items.iter().map(|o| o.id.clone()).collect());
        state.update(|s| s.selection.select_all_visible(ids, checked));
    });

    let confirm_delete = move |_: leptos::ev::MouseEvent| {
        state.update(|s| {
            let ids = s.selection.selected_ids();
            let removed = s.store.delete_by_ids(&ids);
            s.selection.clear();
            s.page = 1;
            s.dialog = DialogState::Idle;
            s.notice = Some(format!("{} order(s) deleted.", removed));
            leptos::logging::log!("deleted {} orders", removed);
        });
    };

    let close_dialog = Callback::new(move |_: ()| {
        state.update(|s| s.dialog = DialogState::Idle);
    });

    view! {
        <div class="page">
            {move || {
                let detail = state.with(|s| {
                    s.detail_id
                        .as_ref()
                        .and_then(|id| s.store.get(id).cloned())
                });
                if let Some(order) = detail {
                    view! {
                        <OrderDetails
                            order=order
                            on_close=Callback::new(move |_: ()| {
                                state.update(|s| s.detail_id = None);
                            })
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <ListView
                            state=state
                            list_page=list_page
                            selected_count=selected_count
                            select_all_state=select_all_state
                            handle_sort=handle_sort
                            on_search=on_search
                            on_status_filter=on_status_filter
                            on_currency_filter=on_currency_filter
                            on_date_range=on_date_range
                            on_page_change=on_page_change
                            toggle_all=toggle_all
                        />
                    }
                        .into_any()
                }
            }}

            <Modal
                open=Signal::derive(move || state.with(|s| s.dialog == DialogState::Editing))
                on_close=close_dialog
            >
                <AddOrderDialog state=state />
            </Modal>

            <Modal
                open=Signal::derive(move || {
                    state.with(|s| s.dialog == DialogState::ConfirmingDelete)
                })
                on_close=close_dialog
            >
                <div class="dialog">
                    <h3 class="dialog__title">"Are you absolutely sure?"</h3>
                    <p class="dialog__description">
                        "This action cannot be undone. This will permanently delete the selected order(s)."
                    </p>
                    <div class="dialog__footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| close_dialog.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=confirm_delete
                        >
                            "Continue"
                        </Button>
                    </div>
                </div>
            </Modal>
        </div>
    }
}

#[component]
#[allow(clippy::too_many_arguments)]
fn ListView(
    state: RwSignal<OrdersListState>,
    list_page: Memo<contracts::ListPage>,
    selected_count: Signal<usize>,
    select_all_state: Signal<SelectAllState>,
    handle_sort: impl Fn(SortKey) + Copy + Send + Sync + 'static,
    on_search: Callback<String>,
    on_status_filter: Callback<String>,
    on_currency_filter: Callback<String>,
    on_date_range: Callback<(String, String)>,
    on_page_change: Callback<usize>,
    toggle_all: Callback<bool>,
) -> impl IntoView {
    let sort = Signal::derive(move || state.with(|s| s.sort));

    let sortable_header = move |label: &'static str, key: SortKey| {
        view! {
            <th
                class="table__th table__th--sortable"
                title="Sort"
                on:click=move |_| handle_sort(key)
            >
                {move || format!("{}{}", label, get_sort_indicator(sort.get(), key))}
            </th>
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="page__title">"Order Tracking"</h2>

                <div class="card__header-actions">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        on_change=on_search
                        placeholder="Order Search"
                    />

                    <Select
                        value=Signal::derive(move || {
                            state.with(|s| {
                                s.status_filter
                                    .map(|f| f.label().to_string())
                                    .unwrap_or_else(|| "all".to_string())
                            })
                        })
                        on_change=on_status_filter
                        options=Signal::derive(status_options)
                    />

                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || selected_count.get() == 0)
                        on_click=move |_| {
                            state.update(|s| s.dialog = DialogState::ConfirmingDelete);
                        }
                    >
                        {icon("trash")}
                        " Delete"
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            state.update(|s| s.dialog = DialogState::Editing);
                        }
                    >
                        {icon("plus")}
                        " Add New Order"
                    </Button>
                </div>
            </div>

            <div class="card__filters">
                <DateRangePicker
                    date_from=Signal::derive(move || state.with(|s| s.date_from.clone()))
                    date_to=Signal::derive(move || state.with(|s| s.date_to.clone()))
                    on_change=on_date_range
                    label="Date".to_string()
                />

                <Select
                    label="Currency".to_string()
                    value=Signal::derive(move || {
                        state.with(|s| {
                            s.currency_filter
                                .map(|c| c.code().to_string())
                                .unwrap_or_else(|| "all".to_string())
                        })
                    })
                    on_change=on_currency_filter
                    options=Signal::derive(currency_options)
                />
            </div>

            {move || {
                state.with(|s| s.notice.clone()).map(|msg| view! {
                    <div class="alert alert--success">
                        <span>{msg}</span>
                        <button
                            class="alert__close"
                            title="Dismiss"
                            on:click=move |_| state.update(|s| s.notice = None)
                        >
                            {icon("x")}
                        </button>
                    </div>
                })
            }}

            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__th table__th--checkbox">
                                <SelectAllCheckbox state=select_all_state on_change=toggle_all />
                            </th>
                            {sortable_header("Temporary Order ID", SortKey::TemporaryOrderId)}
                            {sortable_header("Order ID", SortKey::Id)}
                            {sortable_header("Customer ID", SortKey::CustomerId)}
                            {sortable_header("Back Order", SortKey::BackOrder)}
                            {sortable_header("Order Status", SortKey::Status)}
                            {sortable_header("Order Date", SortKey::OrderDate)}
                            {sortable_header("Ordered Quantity", SortKey::Quantity)}
                            {sortable_header("Confirmed Quantity", SortKey::ConfirmedQuantity)}
                            {sortable_header("Total Amount (Incl. VAT)", SortKey::Total)}
                            <th class="table__th table__th--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let page = list_page.get();
                            if page.items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="11" class="table__empty">
                                            "No orders found."
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                page.items
                                    .into_iter()
                                    .map(|order| order_row(state, order))
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || list_page.with(|p| p.total_pages))
                total_count=Signal::derive(move || list_page.with(|p| p.total_count))
                selected_count=selected_count
                on_page_change=on_page_change
            />
        </div>
    }
}

fn order_row(state: RwSignal<OrdersListState>, order: Order) -> impl IntoView {
    let row_id = order.id.clone();
    let check_id = order.id.clone();
    let toggle_id = order.id.clone();
    let delete_id = order.id.clone();

    let is_checked = Signal::derive(move || state.with(|s| s.selection.is_selected(&check_id)));

    let formatted_date = format_date_utc(order.order_date);
    let formatted_total = format_currency(order.total, order.currency);

    view! {
        <tr
            class="table__row"
            class:table__row--selected=move || is_checked.get()
            on:click=move |_| {
                state.update(|s| s.detail_id = Some(row_id.clone()));
            }
        >
            <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
                <RowCheckbox
                    checked=is_checked
                    on_change=Callback::new(move |_: ()| {
                        state.update(|s| s.selection.toggle(&toggle_id));
                    })
                />
            </td>
            <td class="table__cell table__cell--id">{order.temporary_order_id.clone()}</td>
            <td class="table__cell table__cell--id">{order.id.clone()}</td>
            <td class="table__cell">{order.customer_id.clone()}</td>
            <td class="table__cell">{order.back_order.label()}</td>
            <td class="table__cell">
                <Badge variant=status_badge_variant(order.status).to_string()>
                    {order.status.label()}
                </Badge>
            </td>
            <td class="table__cell">{formatted_date}</td>
            <td class="table__cell table__cell--number">{order.quantity}</td>
            <td class="table__cell table__cell--number">{order.confirmed_quantity}</td>
            <td class="table__cell table__cell--number">{formatted_total}</td>
            <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                <button
                    class="icon-btn icon-btn--danger"
                    title="Delete order"
                    on:click=move |_| {
                        let id = delete_id.clone();
                        state.update(|s| {
                            // Row-level delete targets just this order.
                            s.selection.clear();
                            s.selection.toggle(&id);
                            s.dialog = DialogState::ConfirmingDelete;
                        });
                    }
                >
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
}
