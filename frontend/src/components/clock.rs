use leptos::*;

use crate::utils::time::{clock_date, clock_time, now_local};

#[component]
pub fn Clock() -> impl IntoView {
    // The signal starts at the current time, so the first paint does not wait
    // for the interval.
    let (now, set_now) = create_signal(now_local());

    // store_value keeps the Interval alive; it is dropped (and cancelled)
    // when the component unmounts.
    #[cfg(target_arch = "wasm32")]
    let _interval = store_value(gloo_timers::callback::Interval::new(1_000, move || {
        set_now.set(now_local());
    }));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;

    view! {
        <div class="bg-gradient-to-br from-action-primary-bg to-action-primary-bg-hover text-text-inverse shadow-lg rounded-lg overflow-hidden">
            <div class="flex flex-col items-center justify-center py-4 space-y-2">
                <div class="current-date text-lg font-medium opacity-90">
                    {move || clock_date(&now.get())}
                </div>
                <div class="current-time text-4xl font-bold tracking-wider font-mono">
                    {move || clock_time(&now.get())}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn clock_renders_both_display_targets() {
        let html = render_to_string(|| view! { <Clock/> });
        assert!(html.contains("current-time"));
        assert!(html.contains("current-date"));
    }
}
