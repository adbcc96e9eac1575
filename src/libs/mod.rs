//! Core library modules for tlog.
//!
//! - **Resolution**: [`duration`], [`task`], [`day`] and the [`entry`]
//!   assembler that combines them; all pure, with `now` and configuration
//!   passed in explicitly
//! - **Errors and output**: [`error`], [`messages`], [`formatter`]
//! - **Persistence**: [`config`], [`data_storage`], [`secret`]

pub mod config;
pub mod data_storage;
pub mod day;
pub mod duration;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod secret;
pub mod task;
