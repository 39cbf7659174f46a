pub mod alarm;
pub mod logger;

pub use alarm::AlarmObserver;
pub use logger::{CsvLogger, export_history};
