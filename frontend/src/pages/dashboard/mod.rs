pub mod export;
pub mod panel;

pub use panel::DashboardPage;
