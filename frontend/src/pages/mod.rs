pub mod attendance;
pub mod dashboard;
pub mod leave;

pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use leave::LeavePage;
