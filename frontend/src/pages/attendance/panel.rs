use leptos::*;

use super::view_model::use_attendance_view_model;
use crate::components::{clock::Clock, layout::PageFrame, tooltip::Tooltip};

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! { <AttendancePanel/> }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let ui = vm.ui;
    let pending = vm.mark_action.pending();
    let on_check_in = vm.handle_check_in();
    let on_check_out = vm.handle_check_out();

    view! {
        <PageFrame title="Attendance">
            <div class="max-w-lg mx-auto space-y-6">
                <Clock/>
                <div class="grid grid-cols-2 gap-3">
                    <Tooltip text="Record the start of your work period">
                        <button
                            id="checkInBtn"
                            class="w-full flex flex-col items-center justify-center p-4 rounded-2xl border-2 border-status-success-border bg-status-success-bg font-bold transition-all active:scale-95 disabled:opacity-40 disabled:active:scale-100"
                            disabled=move || pending.get() || !ui.get().can_check_in
                            on:click=on_check_in
                        >
                            "Check in"
                        </button>
                    </Tooltip>
                    <Tooltip text="Record the end of your work period">
                        <button
                            id="checkOutBtn"
                            class="w-full flex flex-col items-center justify-center p-4 rounded-2xl border-2 border-action-danger-border bg-surface-elevated font-bold transition-all active:scale-95 disabled:opacity-40 disabled:active:scale-100"
                            disabled=move || pending.get() || !ui.get().can_check_out
                            on:click=on_check_out
                        >
                            "Check out"
                        </button>
                    </Tooltip>
                </div>
                <Show when=move || pending.get()>
                    <div class="flex items-center justify-center gap-2 py-2 text-action-primary-bg">
                        <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-current"></div>
                        <p class="text-sm font-medium">"Recording..."</p>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
