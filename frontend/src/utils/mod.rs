pub mod date;
pub mod download;
pub mod time;

pub use download::trigger_blob_download;
