mod entity;

pub use entity::{Price, Schedule, ScheduleToSave};
