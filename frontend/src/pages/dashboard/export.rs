use leptos::*;

use crate::api::{ApiClient, ApiError, ExportFormat, ExportResource, ExportTarget};
use crate::components::{toast::use_toasts, tooltip::Tooltip};
use crate::utils::trigger_blob_download;

/// The fixed export controls offered by the admin dashboard, validated here
/// at construction rather than read off the DOM at click time.
pub fn export_targets() -> Vec<ExportTarget> {
    vec![
        ExportTarget::new(ExportResource::Leaves, ExportFormat::Csv),
        ExportTarget::new(ExportResource::Leaves, ExportFormat::Pdf),
        ExportTarget::new(ExportResource::Attendance, ExportFormat::Csv),
    ]
}

type ExportOutcome = Result<(ExportTarget, Vec<u8>), ApiError>;

#[component]
pub fn ExportControls() -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <h2 class="font-bold text-sm uppercase tracking-wider text-fg-muted">"Exports"</h2>
            <div class="flex flex-wrap gap-3">
                {export_targets()
                    .into_iter()
                    .map(|target| view! { <ExportButton target=target/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One export control. Each button owns its action, so only the triggering
/// control disables while its request is in flight.
#[component]
fn ExportButton(target: ExportTarget) -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let toasts = use_toasts();

    let export_action = create_action(move |target: &ExportTarget| {
        let api = api.clone();
        let target = *target;
        async move { api.export(target).await.map(|bytes| (target, bytes)) }
    });
    let pending = export_action.pending();

    create_effect(move |_| {
        if let Some(result) = export_action.value().get() {
            finish_export(result, toasts);
        }
    });

    let label = target.label();
    let hint = format!("Download {}", target.filename());

    view! {
        <Tooltip text=hint>
            <button
                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text text-sm font-semibold disabled:opacity-50"
                disabled=move || pending.get()
                on:click=move |_| export_action.dispatch(target)
            >
                {label}
            </button>
        </Tooltip>
    }
}

fn finish_export(result: ExportOutcome, toasts: crate::components::toast::Toasts) {
    match result {
        Ok((target, bytes)) => match trigger_blob_download(&target.filename(), &bytes) {
            Ok(()) => toasts.success("Export completed successfully"),
            Err(err) => {
                log::warn!("export download failed: {err}");
                toasts.error("Export failed");
            }
        },
        Err(err) => {
            log::warn!("export request failed: {err}");
            toasts.error("Export failed");
        }
    }
}
