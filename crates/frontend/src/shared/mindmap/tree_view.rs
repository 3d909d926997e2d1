use super::outline::OutlineNode;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn OutlineTreeView(node: OutlineNode, #[prop(optional)] depth: usize) -> impl IntoView {
    let has_children = !node.children.is_empty();

    // Deep branches start collapsed so large maps stay scannable
    let (is_collapsed, set_is_collapsed) = signal(depth >= 3);
    let children = node.children.clone();

    let toggle = move |_| {
        if has_children {
            set_is_collapsed.update(|val| *val = !*val);
        }
    };

    view! {
        <div class="mindmap-node">
            <div
                class="mindmap-node__header"
                class:mindmap-node__header--clickable=has_children
                style="display: flex; align-items: center; gap: 6px; cursor: pointer; padding: 2px 0;"
                on:click=toggle
            >
                {move || if has_children {
                    if is_collapsed.get() {
                        view! { <span class="mindmap-node__icon">{icon("chevron-right")}</span> }.into_any()
                    } else {
                        view! { <span class="mindmap-node__icon">{icon("chevron-down")}</span> }.into_any()
                    }
                } else {
                    view! { <span class="mindmap-node__icon mindmap-node__icon--empty"></span> }.into_any()
                }}

                <span
                    class="mindmap-node__label"
                    class:mindmap-node__label--root=(depth == 0)
                >
                    {node.label.clone()}
                </span>
            </div>

            <Show when=move || has_children && !is_collapsed.get()>
                <div
                    class="mindmap-node__children"
                    style="margin-left: 18px; border-left: 1px solid var(--colorNeutralStroke2); padding-left: 10px;"
                >
                    {children.iter().cloned().map(|child| {
                        view! { <OutlineTreeView node=child depth=depth + 1 /> }.into_any()
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
