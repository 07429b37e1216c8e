mod export;
mod health;
mod process_meeting;
mod search;
mod summarize;

pub use export::export_handler;
pub use health::health_handler;
pub use process_meeting::process_meeting_handler;
pub use search::search_handler;
pub use summarize::summarize_handler;
