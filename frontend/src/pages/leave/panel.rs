use leptos::*;

use super::form::{day_count, LeaveFormState, LEAVE_TYPES};
use crate::components::{
    forms::{DateField, FieldLabel, SelectField, TextAreaField},
    layout::PageFrame,
    toast::use_toasts,
};

#[component]
pub fn LeavePage() -> impl IntoView {
    view! {
        <PageFrame title="Apply for leave">
            <LeaveForm/>
        </PageFrame>
    }
}

#[component]
pub fn LeaveForm() -> impl IntoView {
    let toasts = use_toasts();
    let form = LeaveFormState::new();
    let gate = form.gate();

    let start_value = form.start_date.value;
    let end_value = form.end_date.value;
    let total_days = form.total_days;
    let range_error = form.range_error;

    // The derived total tracks both date inputs; it is recomputed on every
    // change, never left stale.
    create_effect(move |_| match day_count(&start_value.get(), &end_value.get()) {
        Ok(total) => {
            total_days.set(total);
            range_error.set(None);
        }
        Err(message) => {
            total_days.set(None);
            range_error.set(Some(message));
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        if !gate.validate() {
            ev.prevent_default();
            toasts.error("Please fill all required fields");
        }
        // All fields filled: the browser's default submission proceeds.
    };

    view! {
        <form
            method="post"
            action="/apply_leave"
            class="max-w-lg mx-auto bg-surface-elevated shadow rounded-lg p-6 space-y-4"
            on:submit=on_submit
        >
            <SelectField
                field=form.leave_type
                options=LEAVE_TYPES.to_vec()
                placeholder="Select leave type"
            />
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <DateField field=form.start_date id="startDate"/>
                <DateField field=form.end_date id="endDate"/>
            </div>
            <div class="flex flex-col gap-1.5 w-full">
                <FieldLabel text="Working days"/>
                <input
                    type="text"
                    id="totalDays"
                    readonly
                    class="w-full rounded-lg border-2 border-form-control-border bg-surface-muted py-2 px-3 text-sm"
                    prop:value=move || {
                        total_days.get().map(|n| n.to_string()).unwrap_or_default()
                    }
                />
            </div>
            <Show when=move || range_error.get().is_some()>
                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded text-sm">
                    {move || range_error.get().unwrap_or_default()}
                </div>
            </Show>
            <TextAreaField field=form.reason rows=4/>
            <button
                type="submit"
                class="w-full px-4 py-2 rounded bg-action-primary-bg text-action-primary-text font-semibold"
            >
                "Submit request"
            </button>
        </form>
    }
}
