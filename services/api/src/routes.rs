use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use crs::batch::RankedCandidate;
use crs::error::AppError;
use crs::intake::ProfileSubmission;
use crs::language::{convert, LanguageFamily, LanguageTest, Skill};
use crs::scoring::{score, CrsResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) scored_at: DateTime<Utc>,
    pub(crate) result: CrsResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConvertRequest {
    pub(crate) test: LanguageTest,
    pub(crate) skill: Skill,
    pub(crate) score: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConvertResponse {
    pub(crate) test: LanguageTest,
    pub(crate) skill: Skill,
    pub(crate) score: f64,
    pub(crate) family: LanguageFamily,
    pub(crate) level: u8,
}

pub(crate) fn crs_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/crs/score", post(score_endpoint))
        .route("/api/v1/crs/rank", post(rank_endpoint))
        .route("/api/v1/language/convert", post(convert_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    payload: Result<Json<ProfileSubmission>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(payload) = payload?;
    let profile = payload.into_profile().map_err(|err| {
        warn!(error = %err, "rejected candidate profile");
        err
    })?;

    let result = score(&profile);
    debug!(
        total = result.total,
        core = result.breakdown.core,
        spouse = result.breakdown.spouse,
        transferability = result.breakdown.transferability,
        additional = result.breakdown.additional,
        "scored candidate profile"
    );

    Ok(Json(ScoreResponse {
        scored_at: Utc::now(),
        result,
    }))
}

pub(crate) async fn convert_endpoint(
    request: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, AppError> {
    let Json(request) = request?;
    let level = convert(request.test, request.skill, request.score);

    Ok(Json(ConvertResponse {
        test: request.test,
        skill: request.skill,
        score: request.score,
        family: request.test.family(),
        level,
    }))
}

pub(crate) async fn rank_endpoint(
    Extension(state): Extension<AppState>,
    body: String,
) -> Result<Json<Vec<RankedCandidate>>, AppError> {
    let ranked = state
        .ranker()
        .rank_reader(Cursor::new(body))
        .map_err(|err| {
            warn!(error = %err, "rejected candidate batch");
            err
        })?;

    info!(candidates = ranked.len(), "ranked candidate batch over http");
    Ok(Json(ranked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    const CANDIDATE_CSV: &str = "candidate_id,age,education_level,first_test,first_reading,first_writing,first_listening,first_speaking,canadian_work_experience\n\
        junior,44,high_school,celpip,5,5,5,5,0\n\
        senior,29,bachelors,celpip,9,9,9,9,1\n";

    fn app(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            max_batch_rows: 10,
        };
        crs_routes().layer(Extension(state))
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn clb9_graduate() -> Value {
        json!({
            "age": 29,
            "education_level": "bachelors",
            "first_language": {
                "test": "celpip",
                "reading": 9,
                "writing": 9,
                "listening": 9,
                "speaking": 9
            },
            "canadian_work_experience": 1
        })
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(true)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_reflects_the_flag() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(read_json_body(response).await["status"], "initializing");

        let response = app(true)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_are_plain_text() {
        let response = app(true)
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type set");
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }

    #[tokio::test]
    async fn score_route_returns_the_breakdown() {
        let response = app(true)
            .oneshot(post_json("/api/v1/crs/score", clb9_graduate()))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["result"]["total"], 432);
        assert_eq!(payload["result"]["breakdown"]["core"], 394);
        assert_eq!(payload["result"]["breakdown"]["transferability"], 38);
        assert!(payload["scored_at"].is_string());
    }

    #[tokio::test]
    async fn score_route_rejects_invalid_profiles() {
        let mut profile = clb9_graduate();
        profile["age"] = json!(-1);

        let response = app(true)
            .oneshot(post_json("/api/v1/crs/score", profile))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = read_json_body(response).await;
        assert!(payload["error"].as_str().unwrap().contains("age"));
    }

    #[tokio::test]
    async fn score_handler_accepts_raw_results() {
        let mut profile = clb9_graduate();
        profile["first_language"] = json!({
            "test": "ielts",
            "scale": "raw",
            "reading": 7.0,
            "writing": 7.0,
            "listening": 8.0,
            "speaking": 7.0
        });
        let submission: ProfileSubmission =
            serde_json::from_value(profile).expect("submission parses");

        let Json(body) = score_endpoint(Ok(Json(submission)))
            .await
            .expect("profile scores");

        assert_eq!(body.result.total, 432);
    }

    #[tokio::test]
    async fn convert_route_maps_ielts_reading() {
        let response = app(true)
            .oneshot(post_json(
                "/api/v1/language/convert",
                json!({ "test": "ielts", "skill": "reading", "score": 6.5 }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["level"], 8);
        assert_eq!(payload["family"], "english");
        assert_eq!(payload["score"], 6.5);
    }

    #[tokio::test]
    async fn convert_handler_never_fails_on_numbers() {
        let request = ConvertRequest {
            test: LanguageTest::Pte,
            skill: Skill::Speaking,
            score: -40.0,
        };

        let Json(body) = convert_endpoint(Ok(Json(request)))
            .await
            .expect("numbers always convert");

        assert_eq!(body.level, 0);
        assert_eq!(body.family, LanguageFamily::English);
    }

    #[tokio::test]
    async fn rank_route_orders_candidates() {
        let response = app(true)
            .oneshot(
                Request::post("/api/v1/crs/rank")
                    .header(header::CONTENT_TYPE, "text/csv")
                    .body(Body::from(CANDIDATE_CSV))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        let ranked = payload.as_array().expect("ranked list");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0]["candidate_id"], "senior");
        assert_eq!(ranked[0]["rank"], 1);
        assert_eq!(ranked[0]["result"]["total"], 432);
        assert_eq!(ranked[1]["candidate_id"], "junior");
    }

    #[tokio::test]
    async fn rank_route_rejects_invalid_rows() {
        let csv = CANDIDATE_CSV.replace("junior,44", "junior,-3");

        let response = app(true)
            .oneshot(
                Request::post("/api/v1/crs/rank")
                    .header(header::CONTENT_TYPE, "text/csv")
                    .body(Body::from(csv))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = read_json_body(response).await;
        assert!(payload["error"].as_str().unwrap().contains("row 1"));
    }

    #[tokio::test]
    async fn malformed_profiles_get_a_json_error_body() {
        let mut profile = clb9_graduate();
        profile
            .as_object_mut()
            .expect("profile object")
            .remove("education_level");

        let response = app(true)
            .oneshot(post_json("/api/v1/crs/score", profile))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = read_json_body(response).await;
        let message = payload["error"].as_str().expect("error message");
        assert!(message.starts_with("invalid request body"));
        assert!(message.contains("education_level"));
    }

    #[tokio::test]
    async fn unknown_test_names_get_a_json_error_body() {
        let response = app(true)
            .oneshot(post_json(
                "/api/v1/language/convert",
                json!({ "test": "toefl", "skill": "reading", "score": 90 }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(read_json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_keeps_its_status() {
        let response = app(true)
            .oneshot(
                Request::post("/api/v1/crs/score")
                    .body(Body::from(clb9_graduate().to_string()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(read_json_body(response).await["error"].is_string());
    }
}
