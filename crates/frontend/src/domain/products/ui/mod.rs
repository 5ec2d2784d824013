use leptos::prelude::*;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="page__title">"Products"</h2>
            </div>
            <p class="page__subtitle">"Manage your products here."</p>
            <p class="placeholder">"Product management interface will be built here."</p>
        </div>
    }
}
