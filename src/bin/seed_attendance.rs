use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::fs;

use quickentry::services::provisioning_service;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL moet in .env staan");
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("Kan niet verbinden met DB");

    let seed_file = env::var("SEED_FILE").unwrap_or_else(|_| "attendees.csv".to_string());
    let contents = match fs::read_to_string(&seed_file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Kan seed file {} niet lezen: {}", seed_file, e);
            std::process::exit(1);
        }
    };

    match provisioning_service::seed_records(&pool, &contents).await {
        Ok(report) => {
            println!(
                "attendance seed: lines={}, inserted={}, skipped={}, malformed={}",
                report.lines, report.inserted, report.skipped, report.malformed
            );
        }
        Err(e) => {
            eprintln!("attendance seed failed: {}", e);
            std::process::exit(1);
        }
    }
}
