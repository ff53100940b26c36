// Export components
pub mod office_hours;

// Re-export the validator and its policy
pub use office_hours::{OfficeHoursPolicy, OfficeHoursValidator};
