mod commands;
mod terminal;

use commands::{CommandLine, walk};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    walk::walk(commands)
}
