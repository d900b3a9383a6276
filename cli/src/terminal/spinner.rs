use std::net::IpAddr;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Starts the walk spinner; the caller clears it once the walk returns.
pub fn start(start: IpAddr) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_message(format!("walking from {start} toward the core..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
