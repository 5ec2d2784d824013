use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="page__title">"Users"</h2>
            </div>
            <p class="page__subtitle">"Manage your users here."</p>
            <p class="placeholder">"User management interface will be built here."</p>
        </div>
    }
}
