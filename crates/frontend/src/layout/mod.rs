pub mod global_context;
pub mod left;
pub mod top_header;

use crate::domain::orders::ui::list::OrdersList;
use crate::domain::products::ui::ProductsPage;
use crate::domain::promotions::ui::PromotionsPage;
use crate::domain::users::ui::UsersPage;
use global_context::AppGlobalContext;
use left::{Left, MobileSheet};
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
///
/// On small screens the sidebar collapses into a sheet overlay driven by
/// `AppGlobalContext::mobile_menu_open`.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Restore the active page from the URL once at startup.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Left>
                    <left::Sidebar />
                </Left>

                <main class="app-main">
                    <PageView />
                </main>
            </div>

            <MobileSheet>
                <left::Sidebar />
            </MobileSheet>
        </div>
    }
}

/// Renders the page selected in the sidebar.
#[component]
fn PageView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        {move || match ctx.active.get().as_str() {
            "products" => view! { <ProductsPage /> }.into_any(),
            "users" => view! { <UsersPage /> }.into_any(),
            "promotions" => view! { <PromotionsPage /> }.into_any(),
            // Order tracking is the landing page; unknown keys fall back to it.
            _ => view! { <OrdersList /> }.into_any(),
        }}
    }
}
