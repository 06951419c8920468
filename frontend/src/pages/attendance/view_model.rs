use leptos::{ev::MouseEvent, *};

use crate::api::{ApiClient, ApiError, AttendanceAction};
use crate::components::toast::use_toasts;
use crate::state::attendance::AttendanceUiState;
use crate::utils::time::{attendance_stamp, now_local};

type MarkResult = Result<(AttendanceAction, String), (AttendanceAction, ApiError)>;

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub ui: RwSignal<AttendanceUiState>,
    pub mark_action: Action<(AttendanceAction, String), MarkResult>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().expect("ApiClient should be provided");
        let toasts = use_toasts();
        let ui = create_rw_signal(AttendanceUiState::default());

        let mark_action = create_action(move |input: &(AttendanceAction, String)| {
            let api = api.clone();
            let (action, time) = input.clone();
            async move {
                api.mark_attendance(action, &time)
                    .await
                    .map(|_| (action, time))
                    .map_err(|err| (action, err))
            }
        });

        create_effect(move |_| {
            if let Some(result) = mark_action.value().get() {
                match result {
                    Ok((action, time)) => {
                        ui.update(|state| state.apply_success(action));
                        toasts.success(match action {
                            AttendanceAction::CheckIn => {
                                format!("Checked in successfully at {time}")
                            }
                            AttendanceAction::CheckOut => {
                                format!("Checked out successfully at {time}")
                            }
                        });
                    }
                    Err((action, err)) => {
                        log::warn!("mark_attendance failed: {err}");
                        toasts.error(match action {
                            AttendanceAction::CheckIn => "Failed to check in",
                            AttendanceAction::CheckOut => "Failed to check out",
                        });
                    }
                }
            }
        });

        Self { ui, mark_action }
    }

    pub fn handle_check_in(&self) -> impl Fn(MouseEvent) {
        self.handle_mark(AttendanceAction::CheckIn)
    }

    pub fn handle_check_out(&self) -> impl Fn(MouseEvent) {
        self.handle_mark(AttendanceAction::CheckOut)
    }

    // The control disables while the action is pending, so a second click
    // cannot start a duplicate in-flight request.
    fn handle_mark(&self, action: AttendanceAction) -> impl Fn(MouseEvent) {
        let mark_action = self.mark_action;
        move |_ev| {
            if mark_action.pending().get_untracked() {
                return;
            }
            // The stamp is captured at click time, not at response time.
            mark_action.dispatch((action, attendance_stamp(&now_local())));
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
