use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

#[component]
pub fn PageFrame(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Title text=format!("{title} | LeaveDesk")/>
        <div class="min-h-screen bg-surface-muted">
            <header class="bg-surface-elevated border-b border-border shadow-sm">
                <div class="max-w-5xl mx-auto px-4 py-3 flex items-center justify-between">
                    <span class="font-display font-bold text-lg">"LeaveDesk"</span>
                    <nav class="flex items-center gap-4 text-sm font-medium">
                        <A href="/" class="hover:text-action-primary-bg">"Dashboard"</A>
                        <A href="/attendance" class="hover:text-action-primary-bg">"Attendance"</A>
                        <A href="/leave" class="hover:text-action-primary-bg">"Apply leave"</A>
                    </nav>
                </div>
            </header>
            <main class="max-w-5xl mx-auto px-4 py-6 space-y-6">
                <h1 class="text-2xl font-bold">{title}</h1>
                {children()}
            </main>
        </div>
    }
}
