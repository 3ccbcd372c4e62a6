use super::{FetchError, SaveError, SettingsStore};
use crate::availability::normalize::decode_embedded_json;
use crate::availability::{
    normalize_business_hours, worker_availability_to_business_hours, AvailabilitySettings,
    BusinessHours, TimeslotTemplate, WorkingHours,
};
use crate::config::Config;
use crate::error::AppResult;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Raw availability-settings payload as storage returns it.
///
/// Keys arrive in either casing and every field may be absent or itself a
/// JSON-encoded string; values stay untyped here and are normalized before
/// anything downstream sees them.
#[derive(Debug, Default, Deserialize)]
struct SettingsPayload {
    #[serde(rename = "businessHours", alias = "business_hours", default)]
    business_hours: Option<Value>,
    #[serde(rename = "drivingTime", alias = "driving_time", default)]
    driving_time: Option<Value>,
    #[serde(rename = "timeslotTemplates", alias = "timeslot_templates", default)]
    timeslot_templates: Option<Value>,
}

/// Raw worker-availability payload: `{availability}` possibly JSON-encoded
#[derive(Debug, Default, Deserialize)]
struct WorkerPayload {
    #[serde(default)]
    availability: Option<Value>,
}

/// Error body some endpoints return on a rejected write
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Project a raw settings payload into the fully-typed document.
///
/// Never fails: malformed pieces fall back field by field to defaults.
fn settings_from_payload(payload: SettingsPayload) -> AvailabilitySettings {
    let business_hours = normalize_business_hours(payload.business_hours.as_ref());

    let driving_time = payload
        .driving_time
        .as_ref()
        .map(decode_embedded_json)
        .and_then(|value| value.as_u64())
        .unwrap_or(0) as u32;

    let templates = payload
        .timeslot_templates
        .as_ref()
        .map(decode_embedded_json)
        .and_then(|value| serde_json::from_value::<Vec<TimeslotTemplate>>(value).ok())
        .unwrap_or_default();

    AvailabilitySettings {
        business_hours,
        driving_time,
        templates,
    }
}

/// REST client for the availability endpoints of the booking-platform API
#[derive(Clone)]
pub struct AvailabilityClient {
    http: Client,
    base_url: String,
    api_token: Option<String>,
}

impl AvailabilityClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        Url::parse(&format!("{}/{}", self.base_url, path)).map_err(|e| e.to_string())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET a JSON document. A 2xx body that fails to parse is treated as
    /// malformed input rather than a failure, so callers fall through to
    /// their defaults.
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.endpoint(path).map_err(FetchError::Other)?;
        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if status.is_server_error() {
            return Err(FetchError::Server(status.as_u16()));
        }
        if !status.is_success() {
            return Err(FetchError::Other(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            warn!("Availability response body is not valid JSON: {}", e);
            Value::Null
        }))
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<(), SaveError> {
        let url = self.endpoint(path).map_err(SaveError::Other)?;
        let response = self
            .authorize(self.http.put(url))
            .json(body)
            .send()
            .await
            .map_err(|e| SaveError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Surface the server's own message verbatim when it sent one
        let body = response.text().await.unwrap_or_default();
        let error_body: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
        match error_body.error {
            Some(message) => Err(SaveError::Rejected(message)),
            None => Err(SaveError::Other(format!("HTTP {}", status))),
        }
    }
}

#[async_trait]
impl SettingsStore for AvailabilityClient {
    async fn fetch_settings(&self, user_id: &str) -> Result<AvailabilitySettings, FetchError> {
        let value = self
            .get_json(&format!("users/{}/availability-settings", user_id))
            .await?;
        debug!("Loaded availability settings for user {}", user_id);

        let payload: SettingsPayload = serde_json::from_value(value).unwrap_or_default();
        Ok(settings_from_payload(payload))
    }

    async fn save_settings(
        &self,
        user_id: &str,
        settings: &AvailabilitySettings,
    ) -> Result<(), SaveError> {
        let body = serde_json::to_value(settings).map_err(|e| SaveError::Other(e.to_string()))?;
        self.put_json(&format!("users/{}/availability-settings", user_id), &body)
            .await
    }

    async fn fetch_worker_availability(
        &self,
        team_member_id: &str,
    ) -> Result<BusinessHours, FetchError> {
        let value = self
            .get_json(&format!("team-members/{}/availability", team_member_id))
            .await?;

        let payload: WorkerPayload = serde_json::from_value(value).unwrap_or_default();
        Ok(worker_availability_to_business_hours(
            payload.availability.as_ref(),
        ))
    }

    async fn save_worker_availability(
        &self,
        team_member_id: &str,
        working_hours: &WorkingHours,
    ) -> Result<(), SaveError> {
        // Worker availability is persisted as a JSON string blob
        let blob = serde_json::to_string(&json!({ "workingHours": working_hours }))
            .map_err(|e| SaveError::Other(e.to_string()))?;
        let body = json!({ "availability": blob });

        self.put_json(&format!("team-members/{}/availability", team_member_id), &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::DayOfWeek;

    #[test]
    fn test_payload_accepts_both_key_casings() {
        let camel: SettingsPayload = serde_json::from_value(json!({
            "businessHours": {"monday": {"start": "08:00"}},
            "timeslotTemplates": []
        }))
        .unwrap();
        let snake: SettingsPayload = serde_json::from_value(json!({
            "business_hours": {"monday": {"start": "08:00"}},
            "timeslot_templates": []
        }))
        .unwrap();

        let from_camel = settings_from_payload(camel);
        let from_snake = settings_from_payload(snake);
        assert_eq!(from_camel, from_snake);
        assert_eq!(from_camel.business_hours.day(DayOfWeek::Monday).start, "08:00");
    }

    #[test]
    fn test_double_encoded_business_hours() {
        let payload: SettingsPayload = serde_json::from_value(json!({
            "businessHours": "{\"friday\":{\"start\":\"07:00\",\"end\":\"13:00\"}}"
        }))
        .unwrap();

        let settings = settings_from_payload(payload);
        let friday = settings.business_hours.day(DayOfWeek::Friday);
        assert_eq!(friday.start, "07:00");
        assert_eq!(friday.end, "13:00");
    }

    #[test]
    fn test_malformed_payload_yields_defaults() {
        let payload: SettingsPayload = serde_json::from_value(json!({
            "businessHours": "{not json",
            "drivingTime": "also not a number",
            "timeslotTemplates": 42
        }))
        .unwrap();

        let settings = settings_from_payload(payload);
        assert_eq!(settings, AvailabilitySettings::default());
    }

    #[test]
    fn test_driving_time_survives_the_round_trip() {
        let payload: SettingsPayload =
            serde_json::from_value(json!({"drivingTime": 45})).unwrap();
        assert_eq!(settings_from_payload(payload).driving_time, 45);
    }
}
