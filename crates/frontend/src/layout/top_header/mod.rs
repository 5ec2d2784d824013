//! Top header bar: menu toggles, brand, user block.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <header class="app-header">
            <div class="app-header__left">
                // Desktop: collapses the sidebar to icons.
                <button
                    class="app-header__menu-btn app-header__menu-btn--desktop"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                // Mobile: opens the sheet menu instead.
                <button
                    class="app-header__menu-btn app-header__menu-btn--mobile"
                    title="Open menu"
                    on:click=move |_| ctx.toggle_mobile_menu()
                >
                    {icon("menu")}
                </button>
                <span class="app-header__brand">"Order Portal"</span>
            </div>

            <div class="app-header__right">
                <button class="app-header__action" title="Language">
                    <span class="app-header__lang">"EN"</span>
                </button>
                <button class="app-header__action" title="Notifications">
                    {icon("bell")}
                </button>
                <div class="app-header__avatar" title="Account">"U"</div>
            </div>
        </header>
    }
}
