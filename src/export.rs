// CSV export of the dashboard tables.
//
// Each export writes a timestamped file under the configured export
// directory and returns its path for the status bar.

use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::info;

use crate::analysis::breakdown::BreakdownRow;
use crate::analysis::similarity::AgentScore;
use crate::analysis::summary::AgentSummary;
use crate::data::Position;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

/// Export the agent summary table.
pub fn export_summary(dir: &Path, rows: &[AgentSummary]) -> Result<PathBuf, ExportError> {
    let path = timestamped_path(dir, "agent_summary")?;
    let mut writer = open_writer(&path)?;

    write_record(
        &mut writer,
        &path,
        &["AgentName", "TotalSigned", "ExpectedSigned", "Difference"],
    )?;
    for row in rows {
        write_record(
            &mut writer,
            &path,
            &[
                row.agent_name.clone(),
                format!("{:.2}", row.total_signed),
                format!("{:.2}", row.expected_signed),
                format!("{:.2}", row.difference),
            ],
        )?;
    }
    finish(writer, &path)?;

    info!(path = %path.display(), rows = rows.len(), "exported agent summary");
    Ok(path)
}

/// Export the position breakdown table, one column per draft year.
pub fn export_breakdown(
    dir: &Path,
    position: Position,
    draft_years: &[u16],
    rows: &[BreakdownRow],
) -> Result<PathBuf, ExportError> {
    let stem = format!("position_breakdown_{}", position.label().to_lowercase());
    let path = timestamped_path(dir, &stem)?;
    let mut writer = open_writer(&path)?;

    let mut header = vec!["AgentName".to_string()];
    header.extend(draft_years.iter().map(|y| y.to_string()));
    write_record(&mut writer, &path, &header)?;

    for row in rows {
        let mut record = vec![row.agent_name.clone()];
        record.extend(row.counts.iter().map(|c| c.to_string()));
        write_record(&mut writer, &path, &record)?;
    }
    finish(writer, &path)?;

    info!(path = %path.display(), rows = rows.len(), "exported position breakdown");
    Ok(path)
}

/// Export the similarity score table.
pub fn export_scores(dir: &Path, rows: &[AgentScore]) -> Result<PathBuf, ExportError> {
    let path = timestamped_path(dir, "similarity_scores")?;
    let mut writer = open_writer(&path)?;

    write_record(&mut writer, &path, &["AgentName", "SimilarityScore"])?;
    for row in rows {
        write_record(
            &mut writer,
            &path,
            &[row.agent_name.clone(), row.score.to_string()],
        )?;
    }
    finish(writer, &path)?;

    info!(path = %path.display(), rows = rows.len(), "exported similarity scores");
    Ok(path)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn timestamped_path(dir: &Path, stem: &str) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    Ok(dir.join(format!("{stem}_{timestamp}.csv")))
}

fn open_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, ExportError> {
    csv::Writer::from_path(path).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_record<W, I, T>(
    writer: &mut csv::Writer<W>,
    path: &Path,
    record: I,
) -> Result<(), ExportError>
where
    W: std::io::Write,
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer.write_record(record).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn finish(mut writer: csv::Writer<std::fs::File>, path: &Path) -> Result<(), ExportError> {
    writer.flush().map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
