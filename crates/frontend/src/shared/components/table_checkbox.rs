//! Checkbox cells for selectable tables.
//!
//! The header checkbox shows three states: unchecked, checked and
//! indeterminate (some but not all visible rows selected). Indeterminate
//! has no HTML attribute, so it is set through the DOM element.

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl SelectAllState {
    /// Derives the header state from how many of the visible rows are
    /// selected.
    pub fn from_counts(selected_visible: usize, visible: usize) -> Self {
        if visible == 0 || selected_visible == 0 {
            SelectAllState::Unchecked
        } else if selected_visible == visible {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }
}

/// Header checkbox toggling between "select all visible" and "deselect all".
#[component]
pub fn SelectAllCheckbox(
    /// Tri-state derived from the current selection
    #[prop(into)]
    state: Signal<SelectAllState>,

    /// Callback with the new checked value
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag only exists on the DOM node.
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let is_indeterminate = matches!(state.get(), SelectAllState::Indeterminate);
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <input
            node_ref=checkbox_ref
            type="checkbox"
            class="table__checkbox"
            aria-label="Select all rows"
            prop:checked=move || matches!(state.get(), SelectAllState::Checked)
            on:change=move |ev| {
                let checked = event_target_checked(&ev);
                on_change.run(checked);
            }
        />
    }
}

/// Row checkbox bound to one order id.
#[component]
pub fn RowCheckbox(
    /// Whether this row is selected
    #[prop(into)]
    checked: Signal<bool>,

    /// Callback when the row checkbox is toggled
    on_change: Callback<()>,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="table__checkbox"
            prop:checked=move || checked.get()
            on:change=move |_| on_change.run(())
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_state_from_counts() {
        assert_eq!(SelectAllState::from_counts(0, 0), SelectAllState::Unchecked);
        assert_eq!(SelectAllState::from_counts(0, 10), SelectAllState::Unchecked);
        assert_eq!(SelectAllState::from_counts(10, 10), SelectAllState::Checked);
        assert_eq!(
            SelectAllState::from_counts(3, 10),
            SelectAllState::Indeterminate
        );
    }
}
