use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn classes(&self) -> &'static str {
        match self {
            ToastLevel::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            ToastLevel::Error => {
                "bg-status-error-bg border-status-error-border text-status-error-text"
            }
            ToastLevel::Info => "bg-surface-elevated border-border text-fg",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "fa-check-circle",
            ToastLevel::Error => "fa-exclamation-circle",
            ToastLevel::Info => "fa-info-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPosition {
    TopRight,
}

impl ToastPosition {
    fn classes(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "fixed top-4 right-4",
        }
    }
}

/// Notification options, fixed at setup and owned by the [`Toasts`] handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastOptions {
    pub close_button: bool,
    pub progress_bar: bool,
    pub newest_on_top: bool,
    pub position: ToastPosition,
    pub timeout_ms: u32,
    pub extended_timeout_ms: u32,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            close_button: true,
            progress_bar: true,
            newest_on_top: true,
            position: ToastPosition::TopRight,
            timeout_ms: 5_000,
            extended_timeout_ms: 1_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Handle to the toast stack; cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Toasts {
    options: ToastOptions,
    items: RwSignal<Vec<Toast>>,
    hovered: RwSignal<Option<u32>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            options,
            items: create_rw_signal(Vec::new()),
            hovered: create_rw_signal(None),
            next_id: store_value(1),
        }
    }

    pub fn options(&self) -> ToastOptions {
        self.options
    }

    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> u32 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let toast = Toast {
            id,
            level,
            message: message.into(),
        };
        let newest_on_top = self.options.newest_on_top;
        self.items.update(|items| {
            if newest_on_top {
                items.insert(0, toast);
            } else {
                items.push(toast);
            }
        });
        self.arm_auto_hide(id, self.options.timeout_ms);
        id
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    pub fn set_hovered(&self, id: Option<u32>) {
        self.hovered.set(id);
    }

    // Timers only exist in the browser runtime; host-side tests exercise the
    // stack synchronously.
    #[cfg(target_arch = "wasm32")]
    fn arm_auto_hide(&self, id: u32, delay_ms: u32) {
        let this = *self;
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            if this.hovered.get_untracked() == Some(id) {
                // Hovered when the timeout fired: extend instead of hiding.
                this.arm_auto_hide(id, this.options.extended_timeout_ms);
            } else {
                this.dismiss(id);
            }
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn arm_auto_hide(&self, _id: u32, _delay_ms: u32) {}
}

pub fn provide_toasts(options: ToastOptions) -> Toasts {
    let toasts = Toasts::new(options);
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts should be provided at the app root")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let options = toasts.options();
    let items = toasts.items();

    view! {
        <div class=format!(
            "{} z-50 flex flex-col gap-2 w-80 pointer-events-none",
            options.position.classes()
        )>
            <For each=move || items.get() key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!(
                                "pointer-events-auto rounded-lg border shadow-lg px-4 py-3 animate-fade-in {}",
                                toast.level.classes()
                            )
                            on:mouseenter=move |_| toasts.set_hovered(Some(id))
                            on:mouseleave=move |_| toasts.set_hovered(None)
                        >
                            <div class="flex items-start gap-2">
                                <i class=format!("fas {} mt-0.5", toast.level.icon())></i>
                                <p class="text-sm font-medium flex-1">{toast.message.clone()}</p>
                                <Show when=move || options.close_button>
                                    <button
                                        class="opacity-60 hover:opacity-100 font-bold"
                                        on:click=move |_| toasts.dismiss(id)
                                    >
                                        "\u{d7}"
                                    </button>
                                </Show>
                            </div>
                            <Show when=move || options.progress_bar>
                                <div
                                    class="mt-2 h-1 rounded bg-current opacity-40 animate-toast-progress"
                                    style=format!("animation-duration: {}ms", options.timeout_ms)
                                ></div>
                            </Show>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn toast_auto_hides_after_its_timeout() {
        let runtime = create_runtime();
        let toasts = Toasts::new(ToastOptions {
            timeout_ms: 10,
            ..ToastOptions::default()
        });
        toasts.success("saved");
        assert_eq!(toasts.items().get_untracked().len(), 1);
        TimeoutFuture::new(50).await;
        assert!(toasts.items().get_untracked().is_empty());
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn hovered_toast_stays_until_the_extended_timeout() {
        let runtime = create_runtime();
        let toasts = Toasts::new(ToastOptions {
            timeout_ms: 10,
            extended_timeout_ms: 40,
            ..ToastOptions::default()
        });
        let id = toasts.push(ToastLevel::Info, "still reading");
        toasts.set_hovered(Some(id));

        // The first timeout fires while hovered, so the toast is re-armed
        // with the extended delay instead of hiding.
        TimeoutFuture::new(25).await;
        assert_eq!(toasts.items().get_untracked().len(), 1);

        toasts.set_hovered(None);
        TimeoutFuture::new(60).await;
        assert!(toasts.items().get_untracked().is_empty());
        runtime.dispose();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn default_options_match_notification_policy() {
        let options = ToastOptions::default();
        assert!(options.close_button);
        assert!(options.progress_bar);
        assert!(options.newest_on_top);
        assert_eq!(options.position, ToastPosition::TopRight);
        assert_eq!(options.timeout_ms, 5_000);
        assert_eq!(options.extended_timeout_ms, 1_000);
    }

    #[test]
    fn push_stacks_newest_on_top() {
        with_runtime(|| {
            let toasts = Toasts::new(ToastOptions::default());
            toasts.success("first");
            toasts.error("second");
            let items = toasts.items().get_untracked();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].message, "second");
            assert_eq!(items[0].level, ToastLevel::Error);
            assert_eq!(items[1].message, "first");
        });
    }

    #[test]
    fn dismiss_removes_only_the_given_toast() {
        with_runtime(|| {
            let toasts = Toasts::new(ToastOptions::default());
            let first = toasts.push(ToastLevel::Info, "keep");
            let second = toasts.push(ToastLevel::Info, "drop");
            toasts.dismiss(second);
            let items = toasts.items().get_untracked();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, first);
        });
    }

    #[test]
    fn toast_host_renders_messages() {
        let html = render_to_string(|| {
            let toasts = provide_toasts(ToastOptions::default());
            toasts.success("Checked in successfully at 09:05");
            view! { <ToastHost/> }
        });
        assert!(html.contains("Checked in successfully at 09:05"));
    }
}
