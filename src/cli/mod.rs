use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = r###"terminal_monitoring"###)]
pub struct CmdArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "/etc/terminal_monitoring/monitor.toml")]
    pub config: PathBuf,
}
