pub mod attendance;
pub mod auth;
pub mod internals;
pub mod notes;
pub mod papers;
pub mod students;
pub mod teachers;
pub mod time_schedules;

pub use self::auth::model::SessionUser;
