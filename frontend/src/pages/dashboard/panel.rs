use leptos::*;
use leptos_router::use_query_map;

use super::export::ExportControls;
use crate::components::{
    alerts::{flash_entries, use_notices, AlertStack},
    charts::{AttendanceTrendChart, LeaveTypeChart},
    clock::Clock,
    layout::PageFrame,
    tooltip::Popover,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    // Backend redirects land here with their flash messages in the query
    // string; seed them before the stack mounts so the auto-dismiss snapshot
    // covers them.
    let notices = use_notices();
    let query = use_query_map().get_untracked();
    for (kind, message) in flash_entries(
        query.get("flash").cloned(),
        query.get("flash_warning").cloned(),
    ) {
        notices.push(kind, message);
    }

    view! {
        <PageFrame title="Dashboard">
            <AlertStack/>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    <AttendanceTrendChart/>
                    <LeaveTypeChart/>
                </div>
                <div class="space-y-6">
                    <Clock/>
                    <ExportControls/>
                    <Popover
                        title="About these charts"
                        body="Weekly attendance and leave-type breakdowns are sample data; live reporting comes from the exports."
                    >
                        <span class="text-xs text-fg-muted underline cursor-pointer">
                            "What am I looking at?"
                        </span>
                    </Popover>
                </div>
            </div>
        </PageFrame>
    }
}
