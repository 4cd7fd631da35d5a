use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing::debug;

use liwc_hindi::logging::init_tracing;
use liwc_hindi::{Analyzer, ResourceConfig, cli};

fn main() -> Result<()> {
    init_tracing();

    let resources = ResourceConfig::from_env().load()?;
    let analyzer = Analyzer::new(resources);

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter Hindi text (Ctrl-D to end):");
    }

    let lines = cli::run(stdin.lock(), io::stdout().lock(), &analyzer)?;
    debug!("analyzed {lines} lines");
    Ok(())
}
