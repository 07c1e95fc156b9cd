use axum::{extract::rejection::JsonRejection, extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use ct_core::{NewsReport, Topic};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NewsRequest {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// One panel of output: either text to render or a message explaining why there is none.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Text(String),
    Error(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsResponse {
    pub no_results: bool,
    pub news: Section,
    pub analysis: Section,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

pub async fn index() -> Html<&'static str> {
    Html(crate::page::INDEX_HTML)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Digest for the topic, then the agent's report on it. A failure in one
/// panel does not suppress the other.
pub async fn fetch_news(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewsRequest>, JsonRejection>,
) -> Result<Json<NewsResponse>, ApiError> {
    let Json(request) = payload?;
    let topic = Topic::new(request.topic)?;

    let (news, no_results) = match state.news.fetch_topic(&topic).await {
        Ok(report) => {
            let no_results = matches!(report, NewsReport::NoResults);
            (Section::Text(report.to_string()), no_results)
        }
        Err(e) => {
            warn!("📡 News lookup for '{}' failed: {}", topic, e);
            (Section::Error(e.user_message()), false)
        }
    };

    let analysis = match state.agent.report(&topic).await {
        Ok(text) => Section::Text(text),
        Err(e) => Section::Error(e.user_message()),
    };

    Ok(Json(NewsResponse {
        no_results,
        news,
        analysis,
    }))
}

pub async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = payload?;
    if request.question.trim().is_empty() {
        return Err(ct_core::Error::InvalidInput("Question must not be empty".to_string()).into());
    }
    let answer = state.agent.respond(&request.question).await?;
    Ok(Json(AskResponse { answer }))
}
