use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use rollcall_cli::audit::AuditLog;
use rollcall_cli::delivery::{DeliveryChannel, NoopDelivery, OutboundMessage, OutboxDelivery};
use rollcall_ingest::read_roster;
use rollcall_render::{render, room_table};

use crate::cli::{DEFAULT_SUBJECT, ModeArg, RunArgs, StatsArgs};
use crate::types::RunResult;

/// Full pipeline: parse, render every document in roster order, append each
/// `(recipient, body)` pair to the audit log, and in send mode hand the
/// message to the delivery channel. The audit log is written exactly once,
/// after the whole roster has been processed.
pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let span = info_span!("run", dataset = %args.dataset.display());
    let _guard = span.enter();

    let roster = read_roster(&args.dataset).context("read registration export")?;
    warn_on_duplicate_ids(&roster);

    let out_dir = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    let channel: Box<dyn DeliveryChannel> = match args.mode {
        ModeArg::Local => Box::new(NoopDelivery),
        ModeArg::Send => Box::new(
            OutboxDelivery::new(&out_dir.join("outbox")).context("prepare outbox")?,
        ),
    };
    let subject = args
        .subject
        .clone()
        .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
    let rooms = room_table();

    let mut audit = AuditLog::new();
    let mut delivered = 0usize;
    for participant in &roster {
        let document = render(participant, &rooms);
        audit.record(document.recipient.clone(), document.body.clone());
        channel.deliver(&OutboundMessage {
            to: document.recipient,
            subject: subject.clone(),
            body: document.body,
        })?;
        if args.mode == ModeArg::Send {
            delivered += 1;
        }
    }

    let audit_log = audit.write_csv(&out_dir).context("write audit log")?;
    info!(
        participants = roster.len(),
        delivered,
        audit_log = %audit_log.display(),
        "pipeline finished"
    );
    Ok(RunResult {
        dataset: args.dataset.clone(),
        participants: roster.len(),
        unique_ids: roster.unique_id_count(),
        rendered: audit.len(),
        delivered,
        audit_log: Some(audit_log),
    })
}

/// Parse only; report roster statistics without rendering or writing.
pub fn run_stats(args: &StatsArgs) -> Result<RunResult> {
    let roster = read_roster(&args.dataset).context("read registration export")?;
    warn_on_duplicate_ids(&roster);
    Ok(RunResult {
        dataset: args.dataset.clone(),
        participants: roster.len(),
        unique_ids: roster.unique_id_count(),
        rendered: 0,
        delivered: 0,
        audit_log: None,
    })
}

/// Duplicates are accepted, never repaired; they only get a warning so an
/// operator can decide whether the export needs fixing.
fn warn_on_duplicate_ids(roster: &rollcall_model::Roster) {
    let duplicates = roster.duplicate_ids();
    if !duplicates.is_empty() {
        warn!(ids = ?duplicates, "duplicate registration ids in export");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = "\
title row one,,,,,,,,,,,,,,,,,,,,,
title row two,,,,,,,,,,,,,,,,,,,,,
7,An,Chen,,408-555-0100,an@example.com,教會,會友,,學生事工,職場宣教,,,,M,是,是,,,,素,
,,,,,,,,,,,,,,,,,,,,,
7,Mei,Wang,,408-555-0101,mei@example.com,教會,會友,,弟兄事工,姐妹事工,,,,S,否,否,,,,,paid
";

    fn write_fixture(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("registrations.csv");
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(FIXTURE.as_bytes()).expect("write fixture");
        path
    }

    #[test]
    fn local_run_builds_audit_log_without_delivering() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = RunArgs {
            dataset: write_fixture(dir.path()),
            mode: ModeArg::Local,
            out_dir: Some(dir.path().to_path_buf()),
            subject: None,
        };
        let result = run_pipeline(&args).expect("run pipeline");
        assert_eq!(result.participants, 2);
        assert_eq!(result.unique_ids, 1);
        assert_eq!(result.rendered, 2);
        assert_eq!(result.delivered, 0);
        let audit_log = result.audit_log.expect("audit log path");
        assert!(audit_log.is_file());
        assert!(!dir.path().join("outbox").exists());
    }

    #[test]
    fn send_run_delivers_to_the_outbox() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = RunArgs {
            dataset: write_fixture(dir.path()),
            mode: ModeArg::Send,
            out_dir: Some(dir.path().to_path_buf()),
            subject: None,
        };
        let result = run_pipeline(&args).expect("run pipeline");
        assert_eq!(result.delivered, 2);
        assert!(dir.path().join("outbox").join("0001.html").is_file());
        assert!(dir.path().join("outbox").join("0002.html").is_file());
    }

    #[test]
    fn stats_reads_without_writing_anything() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = StatsArgs {
            dataset: write_fixture(dir.path()),
        };
        let result = run_stats(&args).expect("run stats");
        assert_eq!(result.participants, 2);
        assert_eq!(result.unique_ids, 1);
        assert!(result.audit_log.is_none());
    }
}
