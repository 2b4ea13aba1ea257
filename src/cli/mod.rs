pub mod console;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use paper_forge::config::GenerationConfig;
use paper_forge::document::DocumentLoader;
use paper_forge::export::{export_json, export_text};
use paper_forge::pipeline::PaperGenerator;

use console::{write_summary, Console};

#[derive(Parser, Debug)]
#[command(
    name = "paper-forge",
    version,
    about = "Generate a question paper from plain-text documents"
)]
pub struct Cli {
    /// Folder or .txt file to read. Omit to start the interactive menu.
    #[arg(long, requires = "output")]
    pub source: Option<PathBuf>,

    /// Where to write the paper (.txt is appended when missing)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also write the paper and its metadata as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// JSON config file with counts, keyword limit and seed
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of multiple-choice questions
    #[arg(long)]
    pub mcq: Option<usize>,

    /// Number of fill-in-the-blank questions
    #[arg(long)]
    pub fill: Option<usize>,

    /// Number of short-answer questions
    #[arg(long)]
    pub short: Option<usize>,

    /// Number of long-answer questions
    #[arg(long)]
    pub long: Option<usize>,

    /// How many top keywords to rank
    #[arg(long)]
    pub keywords: Option<usize>,

    /// Seed for MCQ distractor sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = self.resolve_config()?;

        match (&self.source, &self.output) {
            (Some(source), Some(output)) => self.run_once(source, output, &config),
            _ => {
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                Console::new(stdin.lock(), stdout.lock(), config).run()
            }
        }
    }

    /// File values first, then flag overrides.
    fn resolve_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => GenerationConfig::v0(),
        };

        if let Some(n) = self.mcq {
            config.counts.mcq = n;
        }
        if let Some(n) = self.fill {
            config.counts.fill = n;
        }
        if let Some(n) = self.short {
            config.counts.short = n;
        }
        if let Some(n) = self.long {
            config.counts.long = n;
        }
        if let Some(n) = self.keywords {
            config.keyword_limit = n;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        Ok(config)
    }

    fn run_once(&self, source: &Path, output: &Path, config: &GenerationConfig) -> Result<()> {
        let docs = DocumentLoader::new()
            .load(source)
            .with_context(|| format!("loading {}", source.display()))?;

        let outcome = PaperGenerator::default().generate_seeded(&docs, config);
        if outcome.metadata.lines_scored == 0 {
            bail!("Unable to score lines in {}", source.display());
        }

        write_summary(&mut std::io::stdout(), &outcome.paper)?;

        let written = export_text(&outcome.paper, output)
            .with_context(|| format!("writing {}", output.display()))?;
        println!("Saved to {}", written.display());

        if let Some(json_path) = &self.json {
            export_json(&outcome, json_path)
                .with_context(|| format!("writing {}", json_path.display()))?;
            println!("Saved metadata to {}", json_path.display());
        }

        Ok(())
    }
}
