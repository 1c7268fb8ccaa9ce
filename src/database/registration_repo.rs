use sqlx::SqlitePool;

use crate::models::AttendanceRecordRow;

pub const SQL_MARK_PRESENT: &str = r#"
UPDATE attendance_records
SET attendance = 'present'
WHERE registration_number = ?1
  AND status = 'active'
"#;

/// Status gate and attendance write in a single statement, so a record that
/// stops being active between calls can never end up marked present.
pub async fn mark_present_if_active(
    pool: &SqlitePool,
    registration_number: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_MARK_PRESENT)
        .bind(registration_number)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_FIND_BY_REGISTRATION_NUMBER: &str = r#"
SELECT
    registration_number,
    status,
    attendance
FROM attendance_records
WHERE registration_number = ?1
LIMIT 1
"#;

pub async fn find_by_registration_number(
    pool: &SqlitePool,
    registration_number: &str,
) -> sqlx::Result<Option<AttendanceRecordRow>> {
    sqlx::query_as::<_, AttendanceRecordRow>(SQL_FIND_BY_REGISTRATION_NUMBER)
        .bind(registration_number)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_RECORD: &str = r#"
INSERT INTO attendance_records (
  registration_number,
  status,
  attendance
) VALUES (?1, ?2, ?3)
"#;

pub struct NewAttendanceRecord<'a> {
    pub registration_number: &'a str,
    pub status: &'a str, // active|inactive
    pub attendance: &'a str,
}

pub async fn insert_record(
    pool: &SqlitePool,
    record: NewAttendanceRecord<'_>,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_RECORD)
        .bind(record.registration_number)
        .bind(record.status)
        .bind(record.attendance)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_CREATE_ATTENDANCE_RECORDS: &str = r#"
CREATE TABLE IF NOT EXISTS attendance_records (
  registration_number TEXT PRIMARY KEY,
  status TEXT NOT NULL DEFAULT 'active',
  attendance TEXT NOT NULL DEFAULT 'absent'
)
"#;

/// Provisioning only; the server itself assumes the table exists.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ATTENDANCE_RECORDS)
        .execute(pool)
        .await?;
    Ok(())
}
