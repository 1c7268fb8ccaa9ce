use sqlx::SqlitePool;

use crate::database::registration_repo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// An active record matched and is now marked present.
    Marked,
    /// Nothing matched: unknown registration number, or a record whose
    /// status is not "active". Callers cannot tell the two apart.
    NotFoundOrInactive,
}

pub async fn verify_registration(
    pool: &SqlitePool,
    registration_number: &str,
) -> sqlx::Result<VerificationOutcome> {
    let affected = registration_repo::mark_present_if_active(pool, registration_number).await?;
    if affected > 0 {
        Ok(VerificationOutcome::Marked)
    } else {
        Ok(VerificationOutcome::NotFoundOrInactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::registration_repo::{self, NewAttendanceRecord};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_pool() -> SqlitePool {
        // One connection, or every statement would see its own empty
        // in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        registration_repo::ensure_schema(&pool).await.expect("schema");
        registration_repo::insert_record(
            &pool,
            NewAttendanceRecord {
                registration_number: "22MIM10077",
                status: "active",
                attendance: "absent",
            },
        )
        .await
        .expect("seed active record");
        registration_repo::insert_record(
            &pool,
            NewAttendanceRecord {
                registration_number: "21BCE04242",
                status: "revoked",
                attendance: "absent",
            },
        )
        .await
        .expect("seed revoked record");
        pool
    }

    #[tokio::test]
    async fn active_record_is_marked_present() {
        let pool = seeded_pool().await;

        let outcome = verify_registration(&pool, "22MIM10077").await.unwrap();
        assert_eq!(outcome, VerificationOutcome::Marked);

        let row = registration_repo::find_by_registration_number(&pool, "22MIM10077")
            .await
            .unwrap()
            .expect("record still there");
        assert_eq!(row.attendance, "present");
        assert_eq!(row.status, "active");
    }

    #[tokio::test]
    async fn non_active_record_is_left_untouched() {
        let pool = seeded_pool().await;

        let outcome = verify_registration(&pool, "21BCE04242").await.unwrap();
        assert_eq!(outcome, VerificationOutcome::NotFoundOrInactive);

        let row = registration_repo::find_by_registration_number(&pool, "21BCE04242")
            .await
            .unwrap()
            .expect("record still there");
        assert_eq!(row.attendance, "absent");
    }

    #[tokio::test]
    async fn unknown_registration_number_reports_not_found() {
        let pool = seeded_pool().await;

        let outcome = verify_registration(&pool, "99XYZ00000").await.unwrap();
        assert_eq!(outcome, VerificationOutcome::NotFoundOrInactive);
    }

    #[tokio::test]
    async fn repeat_verification_still_reports_marked() {
        let pool = seeded_pool().await;

        let first = verify_registration(&pool, "22MIM10077").await.unwrap();
        let second = verify_registration(&pool, "22MIM10077").await.unwrap();
        assert_eq!(first, VerificationOutcome::Marked);
        assert_eq!(second, VerificationOutcome::Marked);
    }

    #[tokio::test]
    async fn record_deactivated_after_marking_cannot_be_marked_again() {
        let pool = seeded_pool().await;

        verify_registration(&pool, "22MIM10077").await.unwrap();
        sqlx::query("UPDATE attendance_records SET status = 'revoked', attendance = 'absent' WHERE registration_number = ?1")
            .bind("22MIM10077")
            .execute(&pool)
            .await
            .unwrap();

        let outcome = verify_registration(&pool, "22MIM10077").await.unwrap();
        assert_eq!(outcome, VerificationOutcome::NotFoundOrInactive);

        let row = registration_repo::find_by_registration_number(&pool, "22MIM10077")
            .await
            .unwrap()
            .expect("record still there");
        assert_eq!(row.attendance, "absent");
    }
}
