//! HTTP client for the calendar API

use anyhow::{Context, Result};
use calgrid_core::config::CalgridConfig;
use calgrid_core::{CalendarEvent, EventDraft};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use url::Url;

/// HTTP client for the calendar API
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

// Response types matching the API

#[derive(Deserialize)]
struct EventsResponse {
    #[serde(default)]
    events: Option<Vec<CalendarEvent>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventBody {
    Wrapped { event: CalendarEvent },
    Bare(CalendarEvent),
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl Client {
    pub fn new(config: &CalgridConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: parse_base_url(&config.api_base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid API path '{}'", path))
    }

    /// GET /calendar
    ///
    /// `None` when the response carries no event list at all.
    pub async fn list_events(&self) -> Result<Option<Vec<CalendarEvent>>> {
        let url = self.endpoint("calendar")?;
        tracing::debug!(%url, "fetching events");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to connect to calendar API")?;
        let body: EventsResponse = check(resp).await?.json().await?;

        tracing::debug!(count = body.events.as_ref().map(Vec::len), "fetched events");
        Ok(body.events)
    }

    /// GET /calendar/{id}
    pub async fn get_event(&self, id: i64) -> Result<CalendarEvent> {
        let url = self.endpoint(&format!("calendar/{}", id))?;
        tracing::debug!(%url, "fetching event");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to connect to calendar API")?;
        let text = check(resp).await?.text().await?;

        parse_event_body(&text).with_context(|| format!("Unexpected response for event {}", id))
    }

    /// POST /calendar
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Option<CalendarEvent>> {
        let url = self.endpoint("calendar")?;
        tracing::info!(%url, title = %draft.event_title, date = %draft.date, "creating event");

        let resp = self
            .http
            .post(url)
            .json(draft)
            .send()
            .await
            .context("Failed to connect to calendar API")?;
        let text = check(resp).await?.text().await?;

        Ok(parse_event_body(&text))
    }

    /// POST /calendar/{id}
    pub async fn update_event(&self, id: i64, draft: &EventDraft) -> Result<Option<CalendarEvent>> {
        let url = self.endpoint(&format!("calendar/{}", id))?;
        tracing::info!(%url, id, "updating event");

        let resp = self
            .http
            .post(url)
            .json(draft)
            .send()
            .await
            .context("Failed to connect to calendar API")?;
        let text = check(resp).await?.text().await?;

        Ok(parse_event_body(&text))
    }

    /// DELETE /calendar/{id}
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let url = self.endpoint(&format!("calendar/{}", id))?;
        tracing::info!(%url, id, "deleting event");

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .context("Failed to connect to calendar API")?;
        check(resp).await?;

        Ok(())
    }
}

/// Base URLs are treated as directories so relative joins keep their path.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).with_context(|| format!("Invalid api_base_url '{}'", raw.trim_end_matches('/')))
}

/// Pass successful responses through; turn the rest into errors.
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(%status, "calendar API request failed");
    anyhow::bail!("{}", error_message(status, &body))
}

fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) if !err.error.trim().is_empty() => err.error,
        _ => format!("Calendar API returned {}", status),
    }
}

fn parse_event_body(text: &str) -> Option<CalendarEvent> {
    match serde_json::from_str::<EventBody>(text).ok()? {
        EventBody::Wrapped { event } => Some(event),
        EventBody::Bare(event) => Some(event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_keeps_its_path() {
        let base = parse_base_url("https://example.com/api").unwrap();
        assert_eq!(base.join("calendar/7").unwrap().as_str(), "https://example.com/api/calendar/7");

        let base = parse_base_url("http://127.0.0.1:3000").unwrap();
        assert_eq!(base.join("calendar").unwrap().as_str(), "http://127.0.0.1:3000/calendar");
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn events_list_may_be_absent() {
        let body: EventsResponse = serde_json::from_str("{}").unwrap();
        assert!(body.events.is_none());

        let body: EventsResponse = serde_json::from_str(r#"{"events": null}"#).unwrap();
        assert!(body.events.is_none());

        let body: EventsResponse = serde_json::from_str(
            r#"{"events": [{"id": 1, "event_title": "Standup", "date": "2026-01-12"}]}"#,
        )
        .unwrap();
        assert_eq!(body.events.unwrap().len(), 1);
    }

    #[test]
    fn event_body_bare_or_wrapped() {
        let bare = parse_event_body(r#"{"id": 2, "event_title": "Demo"}"#).unwrap();
        assert_eq!(bare.id, 2);

        let wrapped =
            parse_event_body(r#"{"event": {"id": 3, "event_title": "Review"}}"#).unwrap();
        assert_eq!(wrapped.id, 3);

        assert!(parse_event_body(r#"{"message": "ok"}"#).is_none());
        assert!(parse_event_body("").is_none());
    }

    #[test]
    fn error_message_prefers_server_text() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"error": "date is required"}"#),
            "date is required"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, "<html>nope</html>"),
            "Calendar API returned 404 Not Found"
        );
    }
}
