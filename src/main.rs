//! paper-forge CLI: generate a question paper from `.txt` sources.

mod cli;

use clap::Parser;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so prompts and summaries on stdout stay readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paper_forge=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
