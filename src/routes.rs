use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderValue,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    error::SearchError,
    models::{SearchParams, SearchResponse},
    search::search_and_persist,
    templates,
};

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

pub async fn search_page(Query(params): Query<SearchParams>) -> Response {
    match params.term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(term) => Html(templates::search_page(term)).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

pub async fn results(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let body = match search_and_persist(&state.itunes, &state.store, params.term.as_deref()).await
    {
        Ok(outcome) => templates::results_fragment(&outcome.term, &outcome.saved),
        Err(err) => {
            tracing::warn!(error = %err, status = %err.status(), "search fragment failed");
            templates::error_fragment()
        },
    };

    let mut resp = Html(body).into_response();
    resp.headers_mut().insert("datastar-selector", HeaderValue::from_static("#content"));
    resp.headers_mut().insert("datastar-mode", HeaderValue::from_static("outer"));
    resp
}

pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, SearchError> {
    let outcome = search_and_persist(&state.itunes, &state.store, params.term.as_deref()).await?;
    Ok(Json(outcome.into()))
}
