use super::outline::build_tree;
use super::tree_view::OutlineTreeView;
use leptos::prelude::*;

/// Renders generated mind-map content as a collapsible tree.
///
/// On any conversion error the viewer degrades to a static placeholder; it
/// does not retry and does not fall back to raw text.
#[component]
pub fn MindMapViewer(content: String) -> impl IntoView {
    match build_tree(&content) {
        Ok(roots) => view! {
            <div class="mindmap" style="padding: 8px 0;">
                {roots.into_iter().map(|node| {
                    view! { <OutlineTreeView node=node /> }.into_any()
                }).collect_view()}
            </div>
        }
        .into_any(),
        Err(e) => {
            log::error!("Mind map conversion failed: {}", e);
            view! {
                <div
                    class="mindmap mindmap--error"
                    style="padding: 16px; color: var(--colorNeutralForeground3); text-align: center;"
                >
                    "Could not render a mind map for this content."
                </div>
            }
            .into_any()
        }
    }
}
