mod cli;
mod collect;
mod config;
mod dashboard;
mod ext;
mod init;
mod render;

use std::io;

use clap::Parser;
use tracing::info;

use crate::cli::CmdArgs;
use crate::collect::source::SysinfoSource;
use crate::config::monitor_config::MonitorConfig;
use crate::dashboard::Dashboard;
use crate::init::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args = CmdArgs::parse();
    let config = MonitorConfig::load(&args.config)?;
    info!(interval = ?config.sample_interval, "Starting terminal monitor");

    let source = SysinfoSource::new();
    let mut dashboard = Dashboard::new(source);

    let mut stdout = io::stdout();
    dashboard.init(&mut stdout)?;

    loop {
        std::thread::sleep(config.sample_interval);
        dashboard.tick(&mut stdout)?;
    }
}
