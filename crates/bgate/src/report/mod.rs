mod markdown;
mod pdf;

pub use markdown::render_markdown;
pub use pdf::render_pdf;

use crate::scenario::ScenarioRecord;
use crate::scoring::ScoreRecord;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("no scenario matches score record {scenario_id}")]
    MissingScenario { scenario_id: String },
    #[error("unable to write report {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to assemble PDF {}", .path.display())]
    Pdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },
}

/// Write the Markdown report for one scenario, named `<scenario_id>.md`.
pub fn write_markdown_report(
    out_dir: impl AsRef<Path>,
    scenario: &ScenarioRecord,
    score: &ScoreRecord,
) -> Result<PathBuf, ReportError> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(format!("{}.md", score.scenario_id));
    let document = render_markdown(scenario, score);
    std::fs::write(&path, document).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Render `text` onto paginated letter-size pages at `path`.
pub fn write_pdf_report(path: impl AsRef<Path>, text: &str) -> Result<(), ReportError> {
    let path = path.as_ref();
    let mut document = render_pdf(text).map_err(|source| ReportError::Pdf {
        path: path.to_path_buf(),
        source,
    })?;
    document.compress();
    document.save(path).map_err(|source| ReportError::Pdf {
        path: path.to_path_buf(),
        source: lopdf::Error::IO(source),
    })?;
    Ok(())
}
