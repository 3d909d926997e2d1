//! Sidebar with the product's tool navigation

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Workspace",
            items: vec![
                (
                    "d100_study_overview",
                    tab_label_for_key("d100_study_overview"),
                    "dashboard",
                ),
                (
                    "a001_study_material",
                    tab_label_for_key("a001_study_material"),
                    "book",
                ),
            ],
        },
        MenuGroup {
            label: "AI tools",
            items: vec![
                (
                    "u601_smart_summary",
                    tab_label_for_key("u601_smart_summary"),
                    "file-text",
                ),
                (
                    "u602_flashcards",
                    tab_label_for_key("u602_flashcards"),
                    "cards",
                ),
                ("u603_quiz", tab_label_for_key("u603_quiz"), "quiz"),
                ("u604_mind_map", tab_label_for_key("u604_mind_map"), "mindmap"),
                (
                    "u605_learning_path",
                    tab_label_for_key("u605_learning_path"),
                    "route",
                ),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(key, label, icon_name)| {
                            let key_stored = StoredValue::new(key);
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        ctx.active.get().as_deref() == Some(key_stored.get_value())
                                    }
                                    on:click=move |_| {
                                        let key = key_stored.get_value();
                                        ctx.open_tab(key, tab_label_for_key(key));
                                    }
                                >
                                    <span class="app-sidebar__item-icon">{icon(icon_name)}</span>
                                    <span class="app-sidebar__item-label">{label}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
