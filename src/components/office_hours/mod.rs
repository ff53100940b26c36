pub mod models;
pub mod policy;
mod validator;

pub use models::{Rejection, ScheduledSlot, ValidationVerdict};
pub use policy::OfficeHoursPolicy;
pub use validator::OfficeHoursValidator;
