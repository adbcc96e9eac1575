//! Re-runs the setup wizard on demand.
//!
//! The wizard also runs on its own the first time `tlog` is used without a
//! configuration file. Running it explicitly keeps the current values as
//! defaults and leaves task aliases untouched.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let current = Config::read()?;
    Config::init(&current)?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
