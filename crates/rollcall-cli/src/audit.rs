//! Audit log of what was produced, written out once per run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// One `(recipient, body)` pair, appended in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub recipient: String,
    pub body: String,
}

/// In-memory audit log for one pipeline run.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, recipient: impl Into<String>, body: impl Into<String>) {
        self.entries.push(AuditEntry {
            recipient: recipient.into(),
            body: body.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Write the log as `send-log-<timestamp>.csv` in `dir` and return the
    /// path. Two columns, no header, row order is processing order.
    pub fn write_csv(&self, dir: &Path) -> Result<PathBuf> {
        let timestamp = chrono::Local::now().format("%Y%m%dT%H%M%S");
        let path = dir.join(format!("send-log-{timestamp}.csv"));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("create audit log {}", path.display()))?;
        for entry in &self.entries {
            writer
                .write_record([entry.recipient.as_str(), entry.body.as_str()])
                .context("write audit log row")?;
        }
        writer.flush().context("flush audit log")?;
        Ok(path)
    }
}
