use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::models::{DaySlot, Group, Lesson};

/// Client for the schedule backend. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct ScheduleApi {
    http: reqwest::Client,
    base_url: String,
}

impl ScheduleApi {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Display name of the institution, served as plain text.
    pub async fn product_name(&self) -> Result<String> {
        let url = format!("{}/product/name", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("Product name request failed")?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("Product name response read failed")?;
        if !status.is_success() {
            return Err(anyhow!("Product name API error: {} - {}", status, body));
        }
        Ok(body)
    }

    /// Full group roster, unpaginated.
    pub async fn groups(&self) -> Result<Vec<Group>> {
        let url = format!("{}/groups/list", self.base_url);
        self.fetch_ok(&url, "Group list").await
    }

    /// Start of week 1 for the group, in UTC milliseconds. A missing epoch
    /// for a real group id is a backend contract violation, not a case to
    /// recover from.
    pub async fn epoch(&self, group_id: &str) -> Result<i64> {
        let url = format!("{}/epoch?group_id={}", self.base_url, group_id);
        let payload: EpochPayload = self.fetch_ok(&url, "Epoch").await?;
        Ok(payload.epoch)
    }

    /// Six day-slots of lessons for the group and week; empty slots come
    /// back as empty lists.
    pub async fn schedule(&self, group_id: &str, week: i64) -> Result<Vec<DaySlot>> {
        let url = format!(
            "{}/schedule?group_id={}&week={}",
            self.base_url, group_id, week
        );
        let days: Vec<Vec<Lesson>> = self.fetch_ok(&url, "Schedule").await?;
        Ok(days)
    }

    async fn fetch_ok<T: serde::de::DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("{what} request failed"))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("{what} response read failed"))?;
        if !status.is_success() {
            return Err(anyhow!("{what} API error: {status} - {body}"));
        }
        let envelope: Envelope<T> = serde_json::from_str(&body)
            .with_context(|| format!("{what} response parse failed"))?;
        envelope.into_result(what)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    ok: Option<T>,
    error: Option<serde_json::Value>,
}

impl<T> Envelope<T> {
    fn into_result(self, what: &str) -> Result<T> {
        if let Some(error) = self.error {
            return Err(anyhow!("{what} API returned an error: {error}"));
        }
        self.ok
            .ok_or_else(|| anyhow!("{what} response missing ok payload"))
    }
}

#[derive(Debug, Deserialize)]
struct EpochPayload {
    epoch: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_unwraps_payload() {
        let envelope: Envelope<EpochPayload> =
            serde_json::from_str(r#"{"ok":{"epoch":1725235200000}}"#).unwrap();
        assert_eq!(envelope.into_result("Epoch").unwrap().epoch, 1725235200000);
    }

    #[test]
    fn error_envelope_becomes_an_error() {
        let envelope: Envelope<EpochPayload> =
            serde_json::from_str(r#"{"error":"no such group"}"#).unwrap();
        assert!(envelope.into_result("Epoch").is_err());
    }

    #[test]
    fn envelope_without_payload_is_an_error() {
        let envelope: Envelope<EpochPayload> = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_result("Epoch").is_err());
    }

    #[test]
    fn schedule_envelope_deserializes_day_slots() {
        let raw = r#"{"ok":[[{"name":"Физика","lesson_type":"Лекция","auditorium":"101"},{"empty":true}],[],[],[],[],[]]}"#;
        let envelope: Envelope<Vec<DaySlot>> = serde_json::from_str(raw).unwrap();
        let days = envelope.into_result("Schedule").unwrap();
        assert_eq!(days.len(), 6);
        assert_eq!(days[0].len(), 2);
        assert!(matches!(days[0][1], Lesson::Empty { .. }));
        assert!(days[1].is_empty());
    }

    #[test]
    fn group_roster_deserializes() {
        let envelope: Envelope<Vec<Group>> =
            serde_json::from_str(r#"{"ok":[{"id":"101","name":"ИС-21"}]}"#).unwrap();
        let groups = envelope.into_result("Group list").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, "101");
        assert_eq!(groups[0].name, "ИС-21");
    }
}
