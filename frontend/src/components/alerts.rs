use leptos::*;

/// Page-load alert banners close themselves after this delay; alerts pushed
/// later keep their own lifecycle.
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
}

impl AlertKind {
    fn classes(&self) -> &'static str {
        match self {
            AlertKind::Info => "bg-surface-elevated border-border text-fg",
            AlertKind::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            AlertKind::Warning => {
                "bg-status-warning-bg border-status-warning-border text-status-warning-text"
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: String,
}

/// Handle to the flash-notice stack shared across pages.
#[derive(Clone, Copy)]
pub struct Notices {
    items: RwSignal<Vec<Alert>>,
    next_id: StoredValue<u32>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Alert>> {
        self.items
    }

    pub fn push(&self, kind: AlertKind, message: impl Into<String>) -> u32 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Alert {
                id,
                kind,
                message: message.into(),
            })
        });
        id
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|alert| alert.id != id));
    }

    pub fn dismiss_many(&self, ids: &[u32]) {
        self.items
            .update(|items| items.retain(|alert| !ids.contains(&alert.id)));
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notices() -> Notices {
    let notices = Notices::new();
    provide_context(notices);
    notices
}

pub fn use_notices() -> Notices {
    use_context::<Notices>().expect("Notices should be provided at the app root")
}

/// Flash notices arrive as query parameters after a backend redirect,
/// e.g. `/?flash=Leave+request+submitted`. Empty values seed nothing.
pub fn flash_entries(flash: Option<String>, warning: Option<String>) -> Vec<(AlertKind, String)> {
    let mut entries = Vec::new();
    if let Some(message) = flash.filter(|message| !message.is_empty()) {
        entries.push((AlertKind::Success, message));
    }
    if let Some(message) = warning.filter(|message| !message.is_empty()) {
        entries.push((AlertKind::Warning, message));
    }
    entries
}

#[component]
pub fn AlertStack() -> impl IntoView {
    let notices = use_notices();
    let items = notices.items();

    // One-shot: snapshot the alerts visible at mount and close exactly those.
    #[cfg(target_arch = "wasm32")]
    {
        let initial: Vec<u32> = items
            .get_untracked()
            .iter()
            .map(|alert| alert.id)
            .collect();
        if !initial.is_empty() {
            gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
                notices.dismiss_many(&initial);
            })
            .forget();
        }
    }

    view! {
        <div class="space-y-2">
            <For each=move || items.get() key=|alert| alert.id let:alert>
                {
                    let id = alert.id;
                    view! {
                        <div class=format!(
                            "flex items-center justify-between border rounded px-4 py-3 {}",
                            alert.kind.classes()
                        )>
                            <p class="text-sm">{alert.message.clone()}</p>
                            <button
                                class="opacity-60 hover:opacity-100 font-bold ml-3"
                                on:click=move |_| notices.dismiss(id)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
