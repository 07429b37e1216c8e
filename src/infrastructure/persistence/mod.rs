mod in_memory_meeting_repository;
mod sqlite_meeting_repository;
mod sqlite_pool;

pub use in_memory_meeting_repository::InMemoryMeetingRepository;
pub use sqlite_meeting_repository::SqliteMeetingRepository;
pub use sqlite_pool::create_pool;
