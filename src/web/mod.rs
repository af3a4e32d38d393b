//! Web module - JSON API over the store and program generator
//!
//! One request at a time against a shared Database, same as local use.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::info;

use crate::db::{Database, SetLog, UserStats};
use crate::program::generate_week;

type SharedDb = Arc<Mutex<Database>>;

/// Internal failures surface as plain 500s; the API has no error payloads
struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

const INDEX_HTML: &str = "<!doctype html>
<html>
<head><meta charset=\"utf-8\"><title>gymtrack</title></head>
<body>
<h1>gymtrack</h1>
<p>JSON API: /api/stats, /api/week/{n}, /api/workout_history, /api/travel_days</p>
</body>
</html>";

#[derive(Debug, Deserialize)]
struct UpdateStatsRequest {
    name: String,
    bodyweight: f64,
    bench_1rm: f64,
    deadlift_1rm: f64,
    squat_1rm: f64,
}

#[derive(Debug, Deserialize)]
struct AddTravelDayRequest {
    date: NaiveDate,
    reason: String,
}

#[derive(Debug, Deserialize)]
struct DeleteTravelDayRequest {
    date: NaiveDate,
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn stats(State(db): State<SharedDb>) -> Result<Json<UserStats>, AppError> {
    let stats = db.lock().await.user_stats()?;
    Ok(Json(stats))
}

async fn update_stats(
    State(db): State<SharedDb>,
    Json(req): Json<UpdateStatsRequest>,
) -> Result<Json<Value>, AppError> {
    let stats = UserStats {
        name: req.name,
        bodyweight: req.bodyweight,
        bench_1rm: req.bench_1rm,
        deadlift_1rm: req.deadlift_1rm,
        squat_1rm: req.squat_1rm,
        last_updated: Utc::now(),
    };
    db.lock().await.update_stats(&stats)?;
    info!("user stats updated");
    Ok(Json(json!({ "success": true })))
}

async fn week_plan(
    State(db): State<SharedDb>,
    Path(week): Path<i32>,
) -> Result<Json<crate::program::WeeklyPlan>, AppError> {
    let stats = db.lock().await.user_stats()?;
    Ok(Json(generate_week(&stats, week)))
}

async fn log_set(
    State(db): State<SharedDb>,
    Json(set): Json<SetLog>,
) -> Result<Json<Value>, AppError> {
    db.lock().await.log_set(&set)?;
    info!(exercise = %set.exercise, weight = set.weight, reps = set.reps, "set logged");
    Ok(Json(json!({ "success": true })))
}

async fn workout_history(State(db): State<SharedDb>) -> Result<Json<Value>, AppError> {
    let rows = db.lock().await.recent_history()?;
    Ok(Json(serde_json::to_value(rows)?))
}

async fn travel_days(State(db): State<SharedDb>) -> Result<Json<Value>, AppError> {
    let days = db.lock().await.travel_days()?;
    Ok(Json(serde_json::to_value(days)?))
}

async fn add_travel_day(
    State(db): State<SharedDb>,
    Json(req): Json<AddTravelDayRequest>,
) -> Result<Json<Value>, AppError> {
    let added = db.lock().await.add_travel_day(req.date, &req.reason)?;
    Ok(Json(json!({ "success": added })))
}

async fn delete_travel_day(
    State(db): State<SharedDb>,
    Json(req): Json<DeleteTravelDayRequest>,
) -> Result<Json<Value>, AppError> {
    db.lock().await.delete_travel_day(req.date)?;
    Ok(Json(json!({ "success": true })))
}

pub fn router(db: SharedDb) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/stats", get(stats))
        .route("/api/update_stats", post(update_stats))
        .route("/api/week/{week}", get(week_plan))
        .route("/api/log_set", post(log_set))
        .route("/api/workout_history", get(workout_history))
        .route("/api/travel_days", get(travel_days))
        .route("/api/add_travel_day", post(add_travel_day))
        .route("/api/delete_travel_day", post(delete_travel_day))
        .with_state(db)
}

/// Bind and serve the API until the process is stopped
pub async fn serve(db: Database, addr: SocketAddr) -> Result<()> {
    let app = router(Arc::new(Mutex::new(db)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
