use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::Local;
use serde::Deserialize;
use tower_http::services::ServeDir;

use crate::api::ScheduleApi;
use crate::error::AppError;
use crate::layout;
use crate::models::{DeviceClass, WeekIntent};
use crate::page;
use crate::week;

#[derive(Clone)]
pub struct AppState {
    pub api: ScheduleApi,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
}

/// Query string of the schedule page. `current` and `next` are presence-only
/// submit buttons; their values are never read. The `custom` button is
/// accepted and ignored, like any other unknown parameter.
#[derive(Debug, Deserialize)]
struct IndexParams {
    week: Option<i64>,
    group: Option<String>,
    current: Option<String>,
    next: Option<String>,
}

async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());
    let device = DeviceClass::from_user_agent(user_agent);

    let product_name = state.api.product_name().await?;
    let groups = state.api.groups().await?;

    let group = params.group.as_deref().filter(|id| *id != "none");
    let intent = WeekIntent::from_query(params.week, params.current.is_some(), params.next.is_some());

    let (active_week, epoch) = match group {
        Some(group_id) => {
            let epoch = state.api.epoch(group_id).await?;
            let now = Local::now().naive_local();
            (week::resolve(now, epoch, intent), Some(epoch))
        }
        // Without a group there is no epoch to resolve against; keep
        // whatever week the form submitted so the input stays put.
        None => (params.week, None),
    };

    let schedule_html = match (group, active_week, epoch) {
        (Some(group_id), Some(active_week), Some(epoch)) => {
            let days = state.api.schedule(group_id, active_week).await?;
            tracing::debug!(
                group = group_id,
                week = active_week,
                "Fetched schedule"
            );
            layout::render_schedule(&Local, &days, active_week, epoch, device)
        }
        _ => layout::SELECT_GROUP_PROMPT.to_string(),
    };

    let html = page::render_page(
        &product_name,
        &groups,
        group,
        active_week,
        device,
        &schedule_html,
    );
    Ok(html_response(&html))
}

/// Encodes the page to windows-1251, the charset the document head
/// declares. Characters outside the encoding become numeric character
/// references, which the browser renders back losslessly.
fn encode_body(html: &str) -> Vec<u8> {
    let (encoded, _, _) = encoding_rs::WINDOWS_1251.encode(html);
    encoded.into_owned()
}

fn html_response(html: &str) -> Response {
    (
        [(header::CONTENT_TYPE, "text/html; charset=windows-1251")],
        encode_body(html),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_text_encodes_to_single_bytes() {
        let bytes = encode_body("Расписание");
        assert_eq!(
            bytes,
            vec![0xD0, 0xE0, 0xF1, 0xEF, 0xE8, 0xF1, 0xE0, 0xED, 0xE8, 0xE5]
        );
    }

    #[test]
    fn ascii_markup_passes_through() {
        let bytes = encode_body("<table>");
        assert_eq!(bytes, b"<table>");
    }
}
