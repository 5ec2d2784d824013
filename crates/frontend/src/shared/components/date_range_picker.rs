use crate::shared::icons::icon;
use leptos::prelude::*;

/// DateRangePicker component - from/to date inputs for the order-date
/// filter, with a clear button.
///
/// Values are `yyyy-mm-dd` strings; an empty string means "no bound".
#[component]
pub fn DateRangePicker(
    /// "from" value, `yyyy-mm-dd`
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" value, `yyyy-mm-dd`
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback with the new (from, to) pair
    on_change: Callback<(String, String)>,

    /// Optional label shown before the inputs
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let on_clear = move |_| {
        on_change.run((String::new(), String::new()));
    };

    let has_range = move || !date_from.get().is_empty() || !date_to.get().is_empty();

    view! {
        <div class="date-range">
            {label.map(|text| view! {
                <span class="date-range__label">{icon("calendar")} {text}</span>
            })}
            <input
                type="date"
                class="date-range__input"
                prop:value=date_from
                on:input=move |ev| on_from_change(event_target_value(&ev))
            />
            <span class="date-range__separator">{"\u{2192}"}</span>
            <input
                type="date"
                class="date-range__input"
                prop:value=date_to
                on:input=move |ev| on_to_change(event_target_value(&ev))
            />
            {move || if has_range() {
                view! {
                    <button class="date-range__clear" title="Clear dates" on:click=on_clear>
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
