use leptos::prelude::*;

/// Modal overlay. Clicking the backdrop closes it; clicks inside the
/// content do not propagate out.
#[component]
pub fn Modal(
    /// Whether the modal is shown
    #[prop(into)]
    open: Signal<bool>,

    /// Callback when the backdrop is clicked
    on_close: Callback<()>,

    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            if open.get() {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| on_close.run(())
                    >
                        <div
                            class="modal-content"
                            on:click=|e| e.stop_propagation()
                        >
                            {children()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
