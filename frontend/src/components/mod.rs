pub mod alerts;
pub mod charts;
pub mod clock;
pub mod forms;
pub mod layout;
pub mod toast;
pub mod tooltip;
