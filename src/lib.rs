pub mod components;
pub mod config;
pub mod error;
pub mod utils;

#[cfg(feature = "web-interface")]
pub mod shutdown;
#[cfg(feature = "web-interface")]
pub mod startup;
#[cfg(feature = "web-interface")]
pub mod web;

pub use components::office_hours::{
    OfficeHoursPolicy, OfficeHoursValidator, Rejection, ScheduledSlot, ValidationVerdict,
};
