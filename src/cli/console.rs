use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::warn;

use paper_forge::config::GenerationConfig;
use paper_forge::document::DocumentLoader;
use paper_forge::export::export_text;
use paper_forge::pipeline::PaperGenerator;
use paper_forge::scoring::DensityScorer;
use paper_forge::types::QuestionPaper;

const BANNER: &str = "=============================================\n           Question Paper Generator\n=============================================\n";
const MENU: &str = "\n1) Generate Question Paper\n2) Exit\nEnter choice: ";

/// The interactive menu loop over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: GenerationConfig,
    loader: DocumentLoader,
    generator: PaperGenerator<DensityScorer>,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, config: GenerationConfig) -> Self {
        Self {
            input,
            output,
            config,
            loader: DocumentLoader::new(),
            generator: PaperGenerator::default(),
        }
    }

    /// Loop until the user picks Exit or input ends.
    pub fn run(mut self) -> Result<()> {
        write!(self.output, "{BANNER}")?;

        loop {
            let Some(choice) = self.prompt(MENU)? else {
                break;
            };

            match choice.trim() {
                "1" => self.generate_once()?,
                "2" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice!")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn generate_once(&mut self) -> Result<()> {
        let Some(source) = self.prompt("Enter folder path or .txt file path: ")? else {
            return Ok(());
        };

        let docs = match self.loader.load_input(&source) {
            Ok(docs) => docs,
            Err(err) => {
                warn!(error = %err, "no documents loaded");
                writeln!(self.output, "No .txt files found!")?;
                return Ok(());
            }
        };

        let outcome = self.generator.generate_seeded(&docs, &self.config);
        if outcome.metadata.lines_scored == 0 {
            writeln!(self.output, "Unable to score lines!")?;
            return Ok(());
        }

        write_summary(&mut self.output, &outcome.paper)?;

        let Some(destination) = self.prompt("Enter output file path: ")? else {
            return Ok(());
        };

        match export_text(&outcome.paper, Path::new(destination.trim())) {
            Ok(_) => writeln!(self.output, "Saved successfully.")?,
            Err(err) => {
                warn!(error = %err, "export failed");
                writeln!(self.output, "Save failed.")?;
            }
        }

        Ok(())
    }

    /// Print `text` and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

pub fn write_summary<W: Write>(out: &mut W, paper: &QuestionPaper) -> std::io::Result<()> {
    writeln!(out, "\nSummary:")?;
    writeln!(out, "  MCQs: {}", paper.mcqs.len())?;
    writeln!(out, "  Fill Blanks: {}", paper.fill_in_blanks.len())?;
    writeln!(out, "  Short Qs: {}", paper.short_questions.len())?;
    writeln!(out, "  Long Qs: {}", paper.long_questions.len())?;
    Ok(())
}
