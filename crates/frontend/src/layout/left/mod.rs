pub mod sidebar;

pub use sidebar::Sidebar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Desktop sidebar container. `left_open == false` collapses it to an
/// icon rail instead of hiding it.
#[component]
pub fn Left(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !ctx.left_open.get()
        >
            {children()}
        </aside>
    }
}

/// Mobile sheet: the same sidebar content in an overlay drawer.
#[component]
pub fn MobileSheet(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        {move || {
            if ctx.mobile_menu_open.get() {
                view! {
                    <div
                        class="sheet-overlay"
                        on:click=move |_| ctx.mobile_menu_open.set(false)
                    >
                        <div class="sheet-content" on:click=|e| e.stop_propagation()>
                            <div class="sheet-content__header">
                                <span class="app-header__brand">"Order Portal"</span>
                            </div>
                            {children()}
                        </div>
                    </div>
                }
                    .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
