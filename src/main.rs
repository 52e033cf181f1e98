use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;

use sourcefilter::cli::CliArgs;
use sourcefilter::config::AppConfig;
use sourcefilter::runtime::{build_model, Runtime};

fn main() -> Result<()> {
    sourcefilter::tracing::init();

    let args = CliArgs::parse();
    let file_config = AppConfig::load();
    let startup = args.into_config(&file_config);
    tracing::info!(seed = ?startup.seed, max = ?startup.max_sources, "starting");

    let model = build_model(&startup)?;
    let mut runtime = Runtime::new(model, startup.indent_px);

    let input: Box<dyn BufRead> = match &startup.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime.run(input, &mut out)?;
    drop(out);

    if startup.dump_json {
        let json = serde_json::to_string_pretty(runtime.model.store.config())
            .context("failed to serialize sources")?;
        println!("{}", json);
    }

    Ok(())
}
