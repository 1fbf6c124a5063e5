use crate::errors::AppError;
use crate::models::{DailyRecord, DashboardResponse, Submission, Summary};
use crate::session;
use crate::state::{AppState, SessionId};
use crate::ui::render_index;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Query, State,
    },
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use axum_extra::extract::CookieJar;
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    added: Option<u8>,
}

pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
    params: Option<Query<IndexParams>>,
) -> (CookieJar, Html<String>) {
    let notice = params
        .and_then(|Query(params)| params.added)
        .map(|_| "Record added.");
    let page = state
        .with_store(session::current(&jar), |store| render_index(today(), store, notice))
        .await;
    (session::refresh(jar, state.session_ttl), Html(page))
}

pub async fn submit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Form<Submission>, FormRejection>,
) -> Result<(CookieJar, Redirect), AppError> {
    let Form(submission) = payload?;
    let (jar, id) = session::ensure(jar, state.session_ttl);
    append_submission(&state, id, &submission).await?;
    Ok((jar, Redirect::to("/?added=1")))
}

pub async fn end_session_form(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    (end_session(&state, jar).await, Redirect::to("/"))
}

pub async fn list_records(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Vec<DailyRecord>>) {
    let records = state
        .with_store(session::current(&jar), |store| store.all().to_vec())
        .await;
    (session::refresh(jar, state.session_ttl), Json(records))
}

pub async fn create_record(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<DailyRecord>), AppError> {
    let Json(submission) = payload?;
    let (jar, id) = session::ensure(jar, state.session_ttl);
    let record = append_submission(&state, id, &submission).await?;
    Ok((StatusCode::CREATED, jar, Json(record)))
}

pub async fn get_summary(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Summary>) {
    let summary = state
        .with_store(session::current(&jar), |store| store.aggregate())
        .await;
    (session::refresh(jar, state.session_ttl), Json(summary))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<DashboardResponse>) {
    let dashboard = state
        .with_store(session::current(&jar), |store| DashboardResponse {
            records: store.all().to_vec(),
            chart: store.chart_points(),
            summary: store.aggregate(),
        })
        .await;
    (session::refresh(jar, state.session_ttl), Json(dashboard))
}

pub async fn delete_session(State(state): State<AppState>, jar: CookieJar) -> (StatusCode, CookieJar) {
    (StatusCode::NO_CONTENT, end_session(&state, jar).await)
}

pub async fn healthz() -> &'static str {
    "ok"
}

async fn append_submission(
    state: &AppState,
    id: SessionId,
    submission: &Submission,
) -> Result<DailyRecord, AppError> {
    validate(submission)?;

    let record = DailyRecord::from_submission(submission, today());
    let stored = record.clone();
    let count = state
        .with_store_mut(id, move |store| {
            store.append(stored);
            store.len()
        })
        .await;

    info!(
        session = %id,
        date = %record.date,
        views = record.views,
        engagement_rate = record.engagement_rate,
        records = count,
        "record appended"
    );
    Ok(record)
}

async fn end_session(state: &AppState, jar: CookieJar) -> CookieJar {
    if let Some(id) = session::current(&jar) {
        if state.end_session(id).await {
            let remaining = state.session_count().await;
            info!(session = %id, remaining, "session ended");
        }
    }
    session::clear(jar)
}

fn validate(submission: &Submission) -> Result<(), AppError> {
    if !submission.ad_cost.is_finite() || submission.ad_cost < 0.0 {
        return Err(AppError::bad_request("ad_cost must be a non-negative number"));
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
