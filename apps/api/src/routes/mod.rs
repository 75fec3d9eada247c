pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::resume::handlers as resume;
use crate::skills::handlers as skills;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the configured file size.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skills API
        .route("/api/skills/all", get(skills::handle_all_skills))
        .route("/api/skills/suggestions", get(skills::handle_skill_suggestions))
        .route(
            "/api/skills/definition/:name",
            get(skills::handle_skill_definition),
        )
        .route("/api/skills/extract", post(skills::handle_extract))
        .route("/api/skills/complementary", post(skills::handle_complementary))
        // Resume API
        .route("/api/resume/upload", post(resume::handle_resume_upload))
        // Analysis API
        .route("/api/analysis/evaluate", post(analysis::handle_evaluate))
        .route("/api/ats/analyze", post(analysis::handle_ats_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::skills::catalog::SkillCatalog;

    fn app() -> Router {
        let state = AppState::new(Arc::new(SkillCatalog::builtin()), None, Config::default());
        build_router(state)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "skillgraph-api");
    }

    #[tokio::test]
    async fn test_all_skills_lists_catalog() {
        let (status, body) = send(get_request("/api/skills/all")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"][0], "JavaScript");
        assert_eq!(body["skills_data"]["Docker"]["category"], "DevOps Tools");
    }

    #[tokio::test]
    async fn test_suggestions_query() {
        let (status, body) = send(get_request("/api/skills/suggestions?query=script")).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["JavaScript", "TypeScript"]);

        let (_, body) = send(get_request("/api/skills/suggestions")).await;
        assert_eq!(body["suggestions"], json!([]));
    }

    #[tokio::test]
    async fn test_definition_unknown_is_404() {
        let (status, body) = send(get_request("/api/skills/definition/Cobolt")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, body) = send(get_request("/api/skills/definition/Docker")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill"]["canonical_name"], "Docker");
    }

    #[tokio::test]
    async fn test_extract_endpoint() {
        let (status, body) = send(post_json(
            "/api/skills/extract",
            json!({ "text": "Experienced with Python and Docker in production projects." }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["extracted_skills"], json!(["Python", "Docker"]));
        assert_eq!(body["scores"][0]["name"], "Python");
        assert!(body["skills_by_category"]["Programming Languages"].is_array());
    }

    #[tokio::test]
    async fn test_extract_short_text_is_empty_not_error() {
        let (status, body) =
            send(post_json("/api/skills/extract", json!({ "text": "Rust" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["extracted_skills"], json!([]));
    }

    #[tokio::test]
    async fn test_complementary_endpoint() {
        let (status, body) = send(post_json(
            "/api/skills/complementary",
            json!({ "skills": ["Docker"] }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["suggestions"],
            json!(["Kubernetes", "Linux", "CI/CD", "Git", "Testing", "REST API"])
        );
    }

    #[tokio::test]
    async fn test_evaluate_endpoint() {
        let (status, body) = send(post_json(
            "/api/analysis/evaluate",
            json!({ "skills": ["Figma", "Sketch", "Adobe XD"] }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"][0]["title"], "UX/UI Designer");
        assert_eq!(body["analysis"][0]["readiness"], 33);
    }

    #[tokio::test]
    async fn test_ats_uses_resume_text_when_no_skills() {
        let (status, body) = send(post_json(
            "/api/ats/analyze",
            json!({
                "job_description": "Looking for a Python engineer",
                "resume_text": "Experienced with Python and Docker in production projects."
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched_skills"], json!(["Python"]));
        assert_eq!(body["missing_skills"], json!(["Docker"]));
        assert_eq!(body["score"], 50);
    }

    #[tokio::test]
    async fn test_ats_requires_job_description() {
        let (status, body) = send(post_json(
            "/api/ats/analyze",
            json!({ "job_description": "  ", "skills": ["Rust"] }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let boundary = "XBOUNDARY";
        let payload = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"resume.txt\"\r\n\
             Content-Type: text/plain\r\n\r\nPython developer\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/resume/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(payload))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Only PDF files are supported");
    }
}
