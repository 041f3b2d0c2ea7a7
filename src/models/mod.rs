pub mod entry;
pub mod status;

pub use entry::AttendanceEntry;
pub use status::Status;
