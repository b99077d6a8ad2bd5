// Scanner page - upload, preview, simulated analysis, result panel
//
// All state lives in one `ScanSession`. Browser callbacks (file read, the
// analysis timer) carry the generation or ticket they started under and the
// session drops them if the selection has moved on.

use leptos::ev::{DragEvent, Event};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use neurascan_core::preview::encode_data_url;
use neurascan_core::{FileCandidate, MockAnalysisEngine, ScanSession, ScannerConfig};
use neurascan_report::components::{
    ICON_IMAGE, ICON_INFO, ICON_UPLOAD, ICON_WARNING, ICON_X, Icon, ScanResultPanel,
};
use neurascan_report::styles::RESULT_CSS;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// Seed from `Math.random`; the browser build has no OS entropy source.
fn browser_seed() -> u64 {
    let half = || (js_sys::Math::random() * 4_294_967_296.0) as u64;
    (half() << 32) | half()
}

#[component]
pub fn ScannerPage() -> impl IntoView {
    let config = ScannerConfig::default();
    let engine = MockAnalysisEngine::new(&config);
    let session = RwSignal::new(ScanSession::new(&config));
    let rng = StoredValue::new(StdRng::seed_from_u64(browser_seed()));
    let file_input = NodeRef::<html::Input>::new();

    let error = Memo::new(move |_| session.with(|s| s.error().map(|e| e.to_string())));
    let preview = Memo::new(move |_| {
        session.with(|s| {
            s.selection()
                .and_then(|file| file.preview_data_url())
                .map(str::to_owned)
        })
    });
    let ready_file = Memo::new(move |_| {
        session.with(|s| {
            let file = s.selection()?;
            (!s.is_processing() && s.result().is_none())
                .then(|| (file.name().to_string(), file.size_label()))
        })
    });
    let can_analyze = Memo::new(move |_| session.with(ScanSession::can_analyze));
    let processing = Memo::new(move |_| session.with(ScanSession::is_processing));
    let dragging = Memo::new(move |_| session.with(ScanSession::is_dragging));
    let result = Memo::new(move |_| session.with(|s| s.result().cloned()));

    // Validate, then read the bytes for the preview. A read that finishes
    // after another selection is ignored; a failed read shows an error.
    let accept_file = move |file: File, dropped: bool| {
        let candidate = FileCandidate::new(file.name(), file.type_(), file.size() as u64);
        let selected = session.try_update(|s| {
            if dropped {
                s.drop_file(candidate)
            } else {
                s.select_file(candidate)
            }
        });
        let Some(Ok(generation)) = selected else {
            return;
        };

        spawn_local(async move {
            match JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => {
                    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                    let data_url = encode_data_url(&file.type_(), &bytes);
                    session.update(|s| {
                        s.attach_preview(generation, data_url);
                    });
                }
                Err(err) => {
                    web_sys::console::warn_2(
                        &JsValue::from_str("Could not read the selected file"),
                        &err,
                    );
                    let discarded = session.try_update(|s| s.fail_preview(generation));
                    if discarded == Some(true) {
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                    }
                }
            }
        });
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file, false);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !session.with_untracked(ScanSession::is_dragging) {
            session.update(ScanSession::drag_enter);
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        session.update(ScanSession::drag_leave);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => accept_file(file, true),
            None => session.update(ScanSession::drag_leave),
        }
    };

    let browse = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let clear = move |_| {
        session.update(ScanSession::clear);
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let analyze = move |_| {
        let Some(ticket) = session.try_update(ScanSession::begin_analysis).flatten() else {
            return;
        };
        set_timeout(
            move || {
                let generated =
                    rng.try_update_value(|rng| engine.generate(ticket.preview_data_url(), rng));
                if let Some(result) = generated {
                    session.update(|s| {
                        s.complete_analysis(&ticket, result);
                    });
                }
            },
            engine.latency(),
        );
    };

    view! {
        <style>{RESULT_CSS}</style>
        <div class="min-h-screen pt-16 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center mb-12">
                    <h1 class="text-3xl font-bold text-gray-900 sm:text-4xl">
                        "Brain Tumor Detection Scanner"
                    </h1>
                    <p class="mt-4 text-xl text-gray-600 max-w-3xl mx-auto">
                        "Upload a brain MRI or CT scan image for advanced digital image processing analysis."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class="bg-white rounded-xl shadow-md p-6">
                        <h2 class="text-xl font-semibold text-gray-900 mb-4">"Upload Scan Image"</h2>

                        {move || error.get().map(|message| view! {
                            <div class="mb-4 p-4 bg-red-50 rounded-lg flex items-start text-red-500" role="alert">
                                <Icon path=ICON_WARNING class="flex-shrink-0 mr-2 mt-0.5" />
                                <p class="text-sm text-red-700">{message}</p>
                            </div>
                        })}

                        <input
                            node_ref=file_input
                            type="file"
                            class="hidden"
                            accept="image/*,.dcm"
                            on:change=on_change
                        />

                        <div
                            class=move || {
                                if dragging.get() {
                                    "border-2 border-dashed rounded-lg p-6 text-center border-blue-500 bg-blue-50 transition-colors duration-200"
                                } else {
                                    "border-2 border-dashed rounded-lg p-6 text-center border-gray-300 hover:border-blue-400 transition-colors duration-200"
                                }
                            }
                            on:dragover=on_drag_over
                            on:dragleave=on_drag_leave
                            on:drop=on_drop
                        >
                            {move || match preview.get() {
                                Some(url) => view! {
                                    <div class="relative">
                                        <img src=url alt="Brain scan preview" class="max-h-64 mx-auto rounded-lg" />
                                        <button
                                            type="button"
                                            class="absolute top-2 right-2 p-1 bg-gray-800 bg-opacity-70 rounded-full text-white hover:bg-opacity-100 transition-opacity"
                                            aria-label="Clear selection"
                                            on:click=clear
                                        >
                                            <Icon path=ICON_X size="16" />
                                        </button>
                                    </div>
                                }
                                .into_any(),
                                None => view! {
                                    <div class="space-y-4">
                                        <div class="mx-auto h-16 w-16 text-gray-400 flex items-center justify-center rounded-full bg-gray-100">
                                            <Icon path=ICON_UPLOAD size="32" />
                                        </div>
                                        <div class="space-y-1">
                                            <p class="text-gray-500">
                                                "Drag and drop your scan image here, or "
                                                <button
                                                    type="button"
                                                    class="text-blue-600 hover:text-blue-700 font-medium focus:outline-none"
                                                    on:click=browse
                                                >
                                                    "browse"
                                                </button>
                                            </p>
                                            <p class="text-sm text-gray-400">
                                                "Supported formats: JPEG, PNG, DICOM (max 10MB)"
                                            </p>
                                        </div>
                                    </div>
                                }
                                .into_any(),
                            }}
                        </div>

                        {move || ready_file.get().map(|(name, size)| view! {
                            <div class="mt-4">
                                <p class="text-sm text-gray-600 mb-2">
                                    "Selected file: "
                                    <span class="font-medium">{name}</span>
                                    {format!(" ({})", size)}
                                </p>
                                <button
                                    type="button"
                                    class="w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300 text-white font-medium rounded-md shadow-sm transition-colors duration-200"
                                    disabled=move || !can_analyze.get()
                                    on:click=analyze
                                >
                                    "Analyze Scan"
                                </button>
                            </div>
                        })}

                        <Show when=move || processing.get()>
                            <div class="mt-6 text-center">
                                <div class="inline-block animate-spin rounded-full h-8 w-8 border-4 border-blue-500 border-t-transparent mb-4"></div>
                                <p class="text-gray-600">"Processing your scan image..."</p>
                                <p class="text-sm text-gray-500 mt-1">
                                    "Applying digital image processing algorithms"
                                </p>
                            </div>
                        </Show>
                    </div>

                    <div class="bg-white rounded-xl shadow-md p-6">
                        {move || match result.get() {
                            Some(result) => view! { <ScanResultPanel result=result /> }.into_any(),
                            None => view! { <ReadyForAnalysis /> }.into_any(),
                        }}
                    </div>
                </div>

                <div class="mt-12 bg-blue-50 rounded-xl p-6">
                    <div class="flex items-start text-blue-500">
                        <Icon path=ICON_INFO size="24" class="flex-shrink-0 mr-3 mt-0.5" />
                        <div>
                            <h3 class="font-medium text-blue-800 mb-2">"About Our Technology"</h3>
                            <p class="text-sm text-blue-700">
                                "This tool uses advanced digital image processing techniques including contrast enhancement, "
                                "segmentation, and feature extraction to analyze brain scans. While highly accurate, "
                                "this analysis is for educational purposes and should be validated by medical professionals."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReadyForAnalysis() -> impl IntoView {
    view! {
        <div class="h-full flex flex-col items-center justify-center text-center p-4">
            <div class="text-gray-300 mb-4">
                <Icon path=ICON_IMAGE size="64" />
            </div>
            <h3 class="text-lg font-medium text-gray-900 mb-2">"Ready for Analysis"</h3>
            <p class="text-gray-500 max-w-md">
                "Upload a brain scan image to begin the analysis. Our advanced digital image processing algorithms will examine the scan for potential tumors."
            </p>
        </div>
    }
}
