use askama::Template;
use axum::response::Html;

#[derive(Template)]
#[template(path = "scan.html")]
pub struct ScanTemplate;

pub async fn scan_page() -> Html<String> {
    let template = ScanTemplate;
    Html(template.render().unwrap())
}
