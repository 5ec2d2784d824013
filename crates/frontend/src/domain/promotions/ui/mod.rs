use leptos::prelude::*;

#[component]
pub fn PromotionsPage() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="page__title">"Promotions"</h2>
            </div>
            <p class="page__subtitle">"Manage your promotions here."</p>
            <p class="placeholder">"Promotion management interface will be built here."</p>
        </div>
    }
}
