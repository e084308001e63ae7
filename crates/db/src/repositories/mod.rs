//! Zero-sized repository structs; every operation takes `&PgPool`.

pub mod dependency_repo;
pub mod history_repo;
pub mod notification_repo;
pub mod record_repo;
pub mod user_repo;

pub use dependency_repo::DependencyRepo;
pub use history_repo::HistoryRepo;
pub use notification_repo::NotificationRepo;
pub use record_repo::RecordRepo;
pub use user_repo::UserRepo;
