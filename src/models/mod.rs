pub mod enums;
pub mod record;
pub mod reminder;

pub use enums::{BadgeColor, DementiaCategory};
pub use record::{AnalysisDetails, BrainRegion, PredictionRecord};
pub use reminder::{Reminder, ReminderSchedule};
