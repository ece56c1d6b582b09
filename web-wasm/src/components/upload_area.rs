//! Drop zone for a single leaf image

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, File};

#[component]
pub fn UploadArea<FF, FU, FR>(
    input_ref: NodeRef<Input>,
    selected_name: Signal<Option<String>>,
    is_uploading: Signal<bool>,
    on_file: FF,
    on_upload: FU,
    on_remove: FR,
) -> impl IntoView
where
    FF: Fn(File) + 'static + Clone + Send + Sync,
    FU: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = move |_| {
        let file = input_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file(file);
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            class:hidden=move || is_uploading.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input
                type="file"
                id="fileInput"
                class="hidden"
                accept="image/*"
                node_ref=input_ref
                on:change=on_change
            />
            <label for="fileInput" class="upload-icon">"☁"</label>
            <p class="file-name">
                {move || selected_name.get().unwrap_or_else(|| "Choose a file or drag & drop it here".to_string())}
            </p>
            <Show when=move || selected_name.get().is_some()>
                <div class="upload-actions">
                    <button
                        class="btn btn-light"
                        on:click={
                            let on_upload = on_upload.clone();
                            move |_| on_upload(())
                        }
                    >
                        "Upload"
                    </button>
                    <button
                        class="btn btn-danger"
                        on:click={
                            let on_remove = on_remove.clone();
                            move |_| on_remove(())
                        }
                    >
                        "✕ Remove"
                    </button>
                </div>
            </Show>
        </div>
    }
}
