use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// App-wide UI state: active page plus sidebar/sheet visibility.
///
/// All page-local state (filters, sort, selection, dialogs) lives in the
/// page's own state struct; only navigation concerns are global.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new("orders".to_string()),
            left_open: RwSignal::new(true),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    /// Seeds the active page from `?active=...` and mirrors later changes
    /// back into the URL, so a reload lands on the same page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            self.active.set(active_key.clone());
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.clone(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            // Untracked read: updating the URL must not create a reactive loop.
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        leptos::logging::log!("open_page: key='{}'", key);
        self.active.set(key.to_string());
        // Navigating from the sheet menu also dismisses it.
        self.mobile_menu_open.set(false);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|val| *val = !*val);
    }
}
