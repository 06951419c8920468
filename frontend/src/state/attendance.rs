use crate::api::AttendanceAction;

/// Enablement of the two attendance controls. Mutually exclusive after a
/// successful check-in; failures never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceUiState {
    pub can_check_in: bool,
    pub can_check_out: bool,
}

impl Default for AttendanceUiState {
    fn default() -> Self {
        Self {
            can_check_in: true,
            can_check_out: false,
        }
    }
}

impl AttendanceUiState {
    pub fn apply_success(&mut self, action: AttendanceAction) {
        match action {
            AttendanceAction::CheckIn => {
                self.can_check_in = false;
                self.can_check_out = true;
            }
            AttendanceAction::CheckOut => {
                self.can_check_out = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_only_check_in_enabled() {
        let state = AttendanceUiState::default();
        assert!(state.can_check_in);
        assert!(!state.can_check_out);
    }

    #[test]
    fn check_in_success_swaps_enablement() {
        let mut state = AttendanceUiState::default();
        state.apply_success(AttendanceAction::CheckIn);
        assert!(!state.can_check_in);
        assert!(state.can_check_out);
    }

    #[test]
    fn check_out_success_disables_only_check_out() {
        let mut state = AttendanceUiState::default();
        state.apply_success(AttendanceAction::CheckIn);
        state.apply_success(AttendanceAction::CheckOut);
        assert!(!state.can_check_in);
        assert!(!state.can_check_out);
    }
}
