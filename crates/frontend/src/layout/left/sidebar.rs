//! Sidebar component with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "orders",
            label: "Orders",
            icon: "orders",
            items: vec![MenuItem {
                key: "orders",
                label: "Order Tracking",
                icon: "list",
            }],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec![
                MenuItem {
                    key: "products",
                    label: "Products",
                    icon: "products",
                },
                MenuItem {
                    key: "promotions",
                    label: "Promotions",
                    icon: "tag",
                },
            ],
        },
        MenuGroup {
            id: "users",
            label: "Users",
            icon: "customers",
            items: vec![],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Groups with children start expanded, matching the reference layout.
    let expanded_groups = RwSignal::new(vec!["orders".to_string(), "catalog".to_string()]);

    let groups = get_menu_groups();

    view! {
        <nav class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let has_children = !group.items.is_empty();

                let group_id = group.id.to_string();
                let group_id_stored = StoredValue::new(group_id.clone());
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        // Parent item: toggles the group, or activates a leaf page.
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                let gid = group_id_stored.get_value();
                                !has_children && ctx.active.get() == gid
                            }
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_page(group.id);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span class="app-sidebar__label">{group.label}</span>
                            </div>
                            {has_children.then(|| {
                                let gid_exp = group_id_for_exp.clone();
                                view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || {
                                            expanded_groups.get().contains(&gid_exp)
                                        }
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                }
                            })}
                        </div>

                        // Children
                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|item| {
                                            let item_key = StoredValue::new(item.key.to_string());
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get() == item_key.get_value()
                                                    }
                                                    on:click=move |_| {
                                                        ctx.open_page(item.key);
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(item.icon)}
                                                        <span class="app-sidebar__label">{item.label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
