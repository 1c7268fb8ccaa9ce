#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttendanceRecordRow {
    pub registration_number: String,
    pub status: String,
    pub attendance: String,
}
