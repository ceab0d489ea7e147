pub mod analyze;
pub mod health;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/analyze",
            post(analyze::analyze_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use skillgap_core::{Analyzer, SkillCatalog};
    use tower::ServiceExt;

    use crate::config::Config;

    const BOUNDARY: &str = "skillgap-test-boundary";

    enum Part<'a> {
        File(&'a str, &'a str, &'a [u8]),
        Text(&'a str, &'a str),
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();

        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::File(name, file_name, bytes) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
                Part::Text(name, value) => {
                    body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes());
                    body.extend_from_slice(value.as_bytes());
                }
            }
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn app_with(config: Config) -> Router {
        let analyzer = Analyzer::builder(SkillCatalog::baseline())
            .include_debug(config.include_debug)
            .build();
        build_router(AppState::new(analyzer, config))
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn post_analyze(app: Router, parts: &[Part<'_>]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Body::from(multipart_body(parts)))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const RESUME: &[u8] = b"Python developer with Docker and SQL experience";

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "skillgap");
    }

    #[tokio::test]
    async fn test_analyze_inline_text() {
        let (status, json) = post_analyze(
            app(),
            &[Part::File("resume", "resume.txt", RESUME), Part::Text("jd_text", "Python, AWS, SQL")],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["overall_match"], 50);
        assert_eq!(json["matched_skills"], serde_json::json!(["python", "sql"]));
        assert_eq!(json["missing_skills"], serde_json::json!(["aws"]));
        assert_eq!(json["recommendations"][0]["title"], "Learn Aws");
        assert_eq!(json["debug"]["resume_skills"], serde_json::json!(["docker", "python", "sql"]));
    }

    #[tokio::test]
    async fn test_analyze_without_debug() {
        let config = Config { include_debug: false, ..Config::default() };
        let (status, json) = post_analyze(
            app_with(config),
            &[Part::File("resume", "resume.txt", RESUME), Part::Text("jd_text", "Python")],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json.get("debug").is_none());
    }

    #[tokio::test]
    async fn test_missing_job_description() {
        let (status, json) = post_analyze(
            app(),
            &[Part::File("resume", "resume.txt", RESUME), Part::Text("jd_text", "   ")],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Provide JD text or JD URL.");
    }

    #[tokio::test]
    async fn test_text_and_url_rejected() {
        let (status, json) = post_analyze(
            app(),
            &[
                Part::File("resume", "resume.txt", RESUME),
                Part::Text("jd_text", "Python"),
                Part::Text("jd_url", "https://example.com/job"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_resume() {
        let (status, json) = post_analyze(app(), &[Part::Text("jd_text", "Python")]).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "Upload a resume file.");
    }

    #[tokio::test]
    async fn test_malformed_pdf_reported_before_missing_jd() {
        let (status, json) = post_analyze(app(), &[Part::File("resume", "resume.pdf", b"not a pdf")]).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "DOCUMENT_PARSE_ERROR");
        assert_eq!(json["error"]["message"], "Could not parse resume. Use PDF/DOCX.");
    }

    /// One-page PDF whose content stream selects a font the page never defines.
    fn pdf_with_undefined_font() -> Vec<u8> {
        let content = "BT /F1 12 Tf 72 712 Td (Python SQL) Tj ET";
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> /Contents 4 0 R >>".to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
        ];

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (index, object) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, object).as_bytes());
        }

        let xref = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for offset in offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!("trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n", objects.len() + 1, xref).as_bytes(),
        );
        out
    }

    #[tokio::test]
    async fn test_broken_pdf_is_parse_error_not_internal() {
        let pdf = pdf_with_undefined_font();
        let (status, json) = post_analyze(
            app(),
            &[Part::File("resume", "resume.pdf", &pdf), Part::Text("jd_text", "Python")],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "DOCUMENT_PARSE_ERROR");
        assert_eq!(json["error"]["message"], "Could not parse resume. Use PDF/DOCX.");
    }

    #[tokio::test]
    async fn test_unreachable_job_url() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{addr}/job");
        let (status, json) = post_analyze(
            app(),
            &[Part::File("resume", "resume.txt", RESUME), Part::Text("jd_url", &url)],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "FETCH_ERROR");
        assert_eq!(json["error"]["message"], "Unable to fetch JD URL.");
    }

    #[tokio::test]
    async fn test_upload_limit() {
        let config = Config { max_upload_bytes: 64, ..Config::default() };
        let large = vec![b'a'; 4096];
        let (status, json) = post_analyze(
            app_with(config),
            &[Part::File("resume", "resume.txt", &large), Part::Text("jd_text", "Python")],
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
    }
}
