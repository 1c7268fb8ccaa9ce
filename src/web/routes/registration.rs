use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::services::verification_service::{self, VerificationOutcome};

#[derive(Debug, Deserialize)]
pub struct VerifyBody {
    #[serde(rename = "registrationNumber", default)]
    registration_number: Option<String>,
}

pub async fn verify_handler(
    State(pool): State<SqlitePool>,
    Json(body): Json<VerifyBody>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let registration_number = body
        .registration_number
        .as_deref()
        .map(str::trim)
        .unwrap_or("");

    // Reject before touching the pool.
    if registration_number.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Registration number is required" })),
        ));
    }

    match verification_service::verify_registration(&pool, registration_number).await {
        Ok(VerificationOutcome::Marked) => Ok(Json(json!({
            "exists": true,
            "message": "Attendance marked as present for the registration number",
        }))),
        Ok(VerificationOutcome::NotFoundOrInactive) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({
                "exists": false,
                "message": "Registration number not found or inactive",
            })),
        )),
        Err(e) => {
            tracing::warn!(registration_number = %registration_number, "attendance_verify_failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Internal server error",
                    "error": e.to_string(),
                })),
            ))
        }
    }
}
