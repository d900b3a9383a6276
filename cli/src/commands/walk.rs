use std::io::{self, Write};
use std::net::IpAddr;
use std::time::{Duration, Instant};

use colored::*;
use tracing::info;

use wayfindr_common::config::WalkConfig;
use wayfindr_core::probe::SystemPing;
use wayfindr_core::session::ssh::SshTransport;
use wayfindr_core::walker::PathWalker;

use crate::commands::CommandLine;
use crate::terminal::{print, spinner};

pub fn walk(commands: CommandLine) -> anyhow::Result<()> {
    let config = commands.to_config();
    let start = match commands.start {
        Some(addr) => addr,
        None => prompt_start()?,
    };

    print::header("walking to the core", config.quiet);

    let spinner_handle = (!config.quiet).then(|| spinner::start(start));
    let start_time: Instant = Instant::now();

    let transport = SshTransport;
    let probe = SystemPing::new(config.ping_timeout);
    let path = PathWalker::new(&transport, &probe, &config).walk(start);

    if let Some(handle) = spinner_handle {
        handle.finish_and_clear();
    }

    report(start, &path, &config, start_time.elapsed());
    Ok(())
}

fn prompt_start() -> anyhow::Result<IpAddr> {
    print!("Enter the starting IP address to find the path for: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let line = line.trim();

    line.parse()
        .map_err(|e| anyhow::anyhow!("invalid starting address '{line}': {e}"))
}

fn report(start: IpAddr, path: &[IpAddr], config: &WalkConfig, total_time: Duration) {
    if path.is_empty() {
        println!("{start} route to core ends here");
        return;
    }

    println!("{}", "Path to core:".bold());
    println!("{start}");
    for hop in path {
        println!("{hop}");
    }
    println!("{}", config.core_sysname.green().bold());

    info!(
        "{} hops found in {:.2}s",
        path.len(),
        total_time.as_secs_f64()
    );
}
