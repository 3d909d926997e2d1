use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// File acquisition zone: drag-and-drop or click-to-browse.
///
/// The `accept` attribute on the hidden input is the only type filter; the
/// backend does not validate file types, callers must not assume it does.
#[component]
pub fn FileDropZone(
    /// Value for the file input `accept` attribute
    #[prop(into)]
    accept: String,
    /// Called with the picked file (first file only)
    on_select: Callback<web_sys::File>,
    /// Blocks interaction, e.g. while a request is outstanding
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (drag_over, set_drag_over) = signal(false);

    let open_picker = move |_| {
        if disabled.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let handle_input = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                on_select.run(file);
            }
        }
        // Re-selecting the same file must fire change again
        input.set_value("");
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if disabled.get() {
            return;
        }
        if let Some(data) = ev.data_transfer() {
            if let Some(files) = data.files() {
                if let Some(file) = files.get(0) {
                    on_select.run(file);
                }
            }
        }
    };

    view! {
        <div
            class="file-drop"
            class:file-drop--active=drag_over
            class:file-drop--disabled=move || disabled.get()
            style="border: 2px dashed var(--colorNeutralStroke2); border-radius: 8px; padding: 28px; text-align: center; cursor: pointer;"
            on:click=open_picker
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_drag_over.set(true);
            }
            on:dragleave=move |_| set_drag_over.set(false)
            on:drop=handle_drop
        >
            <input
                type="file"
                accept=accept
                style="display: none;"
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=handle_input
            />
            {icon("upload")}
            <div style="margin-top: 8px; color: var(--colorNeutralForeground3);">
                "Drop a file here or click to browse"
            </div>
        </div>
    }
}
