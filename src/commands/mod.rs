pub mod init;
pub mod time;

use anyhow::Result;
use clap::Parser;

/// Log time spent on Jira issues from shorthand arguments.
///
/// Example: `tlog 1h30m 42 yesterday "code review"`
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
pub struct Cli {
    #[command(flatten)]
    time: time::TimeArgs,

    /// Run the setup wizard (Jira login, password, url and default project)
    #[arg(long)]
    init: bool,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        if cli.init {
            return init::cmd();
        }
        time::cmd(cli.time).await
    }
}
