#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod dates;
pub mod day_range;
pub mod error;
pub mod localization;
pub mod ui_config;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::day_range::{DayRange, Direction};
pub use crate::error::{Error, Exhausted};
pub use crate::localization::{Localize, NoLocation, TzLocation};
pub use crate::ui_config::UiConfig;
pub use calendar_day::{CalendarDay, InvalidDate};
