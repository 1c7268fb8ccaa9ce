use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::database::registration_repo::{self, NewAttendanceRecord};

#[derive(Debug, Default)]
pub struct SeedReport {
    pub lines: usize,
    pub inserted: usize,
    pub skipped: usize,
    pub malformed: usize,
}

/// Seeds attendance records from CSV content: one `registration_number,status`
/// pair per line, status defaulting to "active" when omitted. Lines starting
/// with `#` are comments. Existing registration numbers are left alone.
pub async fn seed_records(pool: &SqlitePool, contents: &str) -> sqlx::Result<SeedReport> {
    registration_repo::ensure_schema(pool).await?;

    let mut report = SeedReport::default();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        report.lines += 1;

        let Some((registration_number, status)) = parse_seed_line(line) else {
            warn!("malformed seed line: '{}'", line);
            report.malformed += 1;
            continue;
        };

        if registration_repo::find_by_registration_number(pool, registration_number)
            .await?
            .is_some()
        {
            report.skipped += 1;
            continue;
        }

        registration_repo::insert_record(
            pool,
            NewAttendanceRecord {
                registration_number,
                status,
                attendance: "absent",
            },
        )
        .await?;
        report.inserted += 1;
    }

    info!(
        "attendance seed done: lines={}, inserted={}, skipped={}, malformed={}",
        report.lines, report.inserted, report.skipped, report.malformed
    );

    Ok(report)
}

fn parse_seed_line(line: &str) -> Option<(&str, &str)> {
    let (registration_number, status) = match line.split_once(',') {
        Some((reg, status)) => (reg.trim(), status.trim()),
        None => (line, "active"),
    };

    if registration_number.is_empty() || registration_number.contains(char::is_whitespace) {
        return None;
    }
    let status = if status.is_empty() { "active" } else { status };

    Some((registration_number, status))
}
