use leptos::*;

/// Hover tooltip; each instance owns its own visibility state.
#[component]
pub fn Tooltip(#[prop(into)] text: String, children: Children) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    let text = store_value(text);

    view! {
        <span
            class="relative inline-block"
            on:mouseenter=move |_| set_visible.set(true)
            on:mouseleave=move |_| set_visible.set(false)
        >
            {children()}
            <Show when=move || visible.get()>
                <span class="absolute bottom-full left-1/2 -translate-x-1/2 mb-2 whitespace-nowrap rounded bg-fg text-text-inverse text-xs px-2 py-1 shadow-lg z-40">
                    {text.get_value()}
                </span>
            </Show>
        </span>
    }
}

/// Click-toggled popover with a title and body, independent per trigger.
#[component]
pub fn Popover(
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    children: Children,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let title = store_value(title);
    let body = store_value(body);

    view! {
        <span class="relative inline-block">
            <span class="cursor-pointer" on:click=move |_| set_open.update(|open| *open = !*open)>
                {children()}
            </span>
            <Show when=move || open.get()>
                <div class="absolute top-full left-1/2 -translate-x-1/2 mt-2 w-64 rounded-lg border border-border bg-surface-elevated shadow-xl z-40">
                    <div class="border-b border-border px-3 py-2 font-bold text-sm">
                        {title.get_value()}
                    </div>
                    <div class="px-3 py-2 text-sm">{body.get_value()}</div>
                </div>
            </Show>
        </span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn tooltip_wraps_its_trigger() {
        let html = render_to_string(|| {
            view! { <Tooltip text="Download as CSV"><button>"Export"</button></Tooltip> }
        });
        assert!(html.contains("Export"));
        // Hidden until hovered.
        assert!(!html.contains("Download as CSV"));
    }
}
