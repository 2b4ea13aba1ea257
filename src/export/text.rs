use std::path::{Path, PathBuf};

use tracing::info;

use crate::types::paper::QuestionPaper;
use super::{write_atomic, ExportError};

const MCQ_TITLE: &str = "Multiple Choice Questions";
const FILL_TITLE: &str = "Fill in the Blanks";
const SHORT_TITLE: &str = "Short Answer Questions";
const LONG_TITLE: &str = "Long Answer Questions";

/// Render the paper in its flat text layout: four `==== Title ====`
/// sections, `Qn.` numbering restarting per section, lettered MCQ options
/// and an `Answer:` line per MCQ.
pub fn render_text(paper: &QuestionPaper) -> String {
    let mut out = String::new();

    section(&mut out, MCQ_TITLE);
    for (i, mcq) in paper.mcqs.iter().enumerate() {
        out.push_str(&format!("Q{}. {}\n", i + 1, mcq.prompt));
        for (label, option) in ('A'..='Z').zip(mcq.options.iter()) {
            out.push_str(&format!("   {label}) {option}\n"));
        }
        out.push_str(&format!("   Answer: {}\n\n", mcq.answer));
    }

    section(&mut out, FILL_TITLE);
    numbered(&mut out, &paper.fill_in_blanks, "\n");
    out.push('\n');

    section(&mut out, SHORT_TITLE);
    numbered(&mut out, &paper.short_questions, "\n");
    out.push('\n');

    section(&mut out, LONG_TITLE);
    numbered(&mut out, &paper.long_questions, "\n\n");

    out
}

/// Append `.txt` unless the file name already ends with it (any case).
pub fn ensure_txt_extension(path: &Path) -> PathBuf {
    let has_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if has_txt {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_owned();
    name.push(".txt");
    PathBuf::from(name)
}

/// Write the rendered paper and return the path actually written.
pub fn export_text(paper: &QuestionPaper, path: &Path) -> Result<PathBuf, ExportError> {
    let final_path = ensure_txt_extension(path);
    write_atomic(&final_path, render_text(paper).as_bytes())?;
    info!(path = %final_path.display(), questions = paper.total_questions(), "exported paper");
    Ok(final_path)
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("==== {title} ====\n\n"));
}

fn numbered(out: &mut String, items: &[String], terminator: &str) {
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("Q{}. {}{}", i + 1, item, terminator));
    }
}
