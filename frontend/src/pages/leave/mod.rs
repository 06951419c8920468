pub mod form;
pub mod panel;

pub use panel::LeavePage;
