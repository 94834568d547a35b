use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{AnalysisDetails, DementiaCategory, PredictionRecord, Reminder, ReminderSchedule};

use super::error::ApiError;

/// Fresh classifier output for an uploaded scan, before it is saved as a
/// history record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "prediction", default)]
    pub category: DementiaCategory,
    /// The analyze endpoints emit this as a number or a numeric string
    /// depending on the code path; unparseable values become 0.
    #[serde(default, deserialize_with = "confidence_from_wire")]
    pub confidence: f64,
    /// Per-label softmax scores, when the backend includes them.
    #[serde(rename = "raw_predictions", default)]
    pub raw_scores: BTreeMap<String, f64>,
}

fn confidence_from_wire<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
    }

    Ok(match Wire::deserialize(deserializer)? {
        Wire::Number(n) => n,
        Wire::Text(s) => s.trim().trim_end_matches('%').parse().unwrap_or(0.0),
    })
}

/// Non-2xx responses carry `{"error": "..."}`; the message is shown to
/// the user verbatim.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client-side contract for the BrainScan platform API.
#[allow(async_fn_in_trait)]
pub trait PlatformApi {
    async fn fetch_history(&self, token: &str) -> Result<Vec<PredictionRecord>, ApiError>;

    async fn upload_scan(
        &self,
        token: &str,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<AnalysisOutcome, ApiError>;

    /// Unauthenticated analysis for the public demo flow. Nothing is
    /// persisted server-side.
    async fn analyze_public(
        &self,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<AnalysisOutcome, ApiError>;

    async fn save_results(
        &self,
        token: &str,
        prediction_id: &str,
        details: &AnalysisDetails,
    ) -> Result<(), ApiError>;

    async fn delete_prediction(&self, token: &str, prediction_id: &str) -> Result<(), ApiError>;

    async fn fetch_reminders(&self, token: &str) -> Result<ReminderSchedule, ApiError>;

    async fn update_reminder(&self, token: &str, reminder: &Reminder) -> Result<(), ApiError>;

    async fn delete_reminder(&self, token: &str, reminder_id: &str) -> Result<(), ApiError>;
}

/// HTTP client for the platform API.
pub struct HttpPlatformApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPlatformApi {
    /// Create a client pointing at the given API base.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Client for the configured API base with a 30s timeout.
    pub fn from_env() -> Self {
        Self::new(&config::api_base_url(), 30)
    }

    fn map_transport(&self, err: reqwest::Error) -> ApiError {
        if err.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err.to_string())
        }
    }

    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("Request failed with HTTP {status}"),
        };
        ApiError::Http { status, message }
    }

    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    fn scan_form(filename: &str, image: Vec<u8>) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(image).file_name(filename.to_string());
        reqwest::multipart::Form::new().part("image", part)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveResultsRequest<'a> {
    prediction_id: &'a str,
    details: &'a AnalysisDetails,
}

impl PlatformApi for HttpPlatformApi {
    async fn fetch_history(&self, token: &str) -> Result<Vec<PredictionRecord>, ApiError> {
        let url = format!("{}/predictions/history", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let response = Self::expect_success(response).await?;
        response
            .json::<Vec<PredictionRecord>>()
            .await
            .map_err(|e| ApiError::ResponseParsing(e.to_string()))
    }

    async fn upload_scan(
        &self,
        token: &str,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<AnalysisOutcome, ApiError> {
        let url = format!("{}/predictions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .multipart(Self::scan_form(filename, image))
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let response = Self::expect_success(response).await?;
        response
            .json::<AnalysisOutcome>()
            .await
            .map_err(|e| ApiError::ResponseParsing(e.to_string()))
    }

    async fn analyze_public(
        &self,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<AnalysisOutcome, ApiError> {
        let url = format!("{}/predictions/public-analyze", self.base_url);
        let response = self
            .client
            .post(&url)
            .multipart(Self::scan_form(filename, image))
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let response = Self::expect_success(response).await?;
        response
            .json::<AnalysisOutcome>()
            .await
            .map_err(|e| ApiError::ResponseParsing(e.to_string()))
    }

    async fn save_results(
        &self,
        token: &str,
        prediction_id: &str,
        details: &AnalysisDetails,
    ) -> Result<(), ApiError> {
        let url = format!("{}/predictions/save", self.base_url);
        let body = SaveResultsRequest {
            prediction_id,
            details,
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        Self::expect_success(response).await.map(|_| ())
    }

    async fn delete_prediction(&self, token: &str, prediction_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/predictions/{}", self.base_url, prediction_id);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        Self::expect_success(response).await.map(|_| ())
    }

    async fn fetch_reminders(&self, token: &str) -> Result<ReminderSchedule, ApiError> {
        let url = format!("{}/reminders", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let response = Self::expect_success(response).await?;
        response
            .json::<ReminderSchedule>()
            .await
            .map_err(|e| ApiError::ResponseParsing(e.to_string()))
    }

    async fn update_reminder(&self, token: &str, reminder: &Reminder) -> Result<(), ApiError> {
        let url = format!("{}/reminders/{}", self.base_url, reminder.id);
        let response = self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(reminder)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        Self::expect_success(response).await.map(|_| ())
    }

    async fn delete_reminder(&self, token: &str, reminder_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/reminders/{}", self.base_url, reminder_id);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        Self::expect_success(response).await.map(|_| ())
    }
}

/// Mock platform API for testing — serves configured data and records
/// destructive calls.
pub struct MockPlatformApi {
    history: Vec<PredictionRecord>,
    reminders: ReminderSchedule,
    outcome: Option<AnalysisOutcome>,
    failure: Option<String>,
    deleted_predictions: Mutex<Vec<String>>,
    deleted_reminders: Mutex<Vec<String>>,
    updated_reminders: Mutex<Vec<String>>,
}

impl MockPlatformApi {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            reminders: ReminderSchedule::default(),
            outcome: None,
            failure: None,
            deleted_predictions: Mutex::new(Vec::new()),
            deleted_reminders: Mutex::new(Vec::new()),
            updated_reminders: Mutex::new(Vec::new()),
        }
    }

    pub fn with_history(mut self, records: Vec<PredictionRecord>) -> Self {
        self.history = records;
        self
    }

    pub fn with_reminders(mut self, schedule: ReminderSchedule) -> Self {
        self.reminders = schedule;
        self
    }

    pub fn with_outcome(mut self, outcome: AnalysisOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Make every operation fail with the given server message.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn deleted_prediction_ids(&self) -> Vec<String> {
        self.deleted_predictions.lock().unwrap().clone()
    }

    pub fn deleted_reminder_ids(&self) -> Vec<String> {
        self.deleted_reminders.lock().unwrap().clone()
    }

    pub fn updated_reminder_ids(&self) -> Vec<String> {
        self.updated_reminders.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match &self.failure {
            Some(message) => Err(ApiError::Http {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn outcome_or_default(&self) -> AnalysisOutcome {
        self.outcome.clone().unwrap_or_else(|| AnalysisOutcome {
            id: Some(uuid::Uuid::new_v4().to_string()),
            category: DementiaCategory::NonDemented,
            confidence: 90.0,
            raw_scores: BTreeMap::new(),
        })
    }
}

impl Default for MockPlatformApi {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformApi for MockPlatformApi {
    async fn fetch_history(&self, _token: &str) -> Result<Vec<PredictionRecord>, ApiError> {
        self.check_failure()?;
        Ok(self.history.clone())
    }

    async fn upload_scan(
        &self,
        _token: &str,
        _filename: &str,
        _image: Vec<u8>,
    ) -> Result<AnalysisOutcome, ApiError> {
        self.check_failure()?;
        Ok(self.outcome_or_default())
    }

    async fn analyze_public(
        &self,
        _filename: &str,
        _image: Vec<u8>,
    ) -> Result<AnalysisOutcome, ApiError> {
        self.check_failure()?;
        Ok(self.outcome_or_default())
    }

    async fn save_results(
        &self,
        _token: &str,
        _prediction_id: &str,
        _details: &AnalysisDetails,
    ) -> Result<(), ApiError> {
        self.check_failure()
    }

    async fn delete_prediction(&self, _token: &str, prediction_id: &str) -> Result<(), ApiError> {
        self.check_failure()?;
        self.deleted_predictions
            .lock()
            .unwrap()
            .push(prediction_id.to_string());
        Ok(())
    }

    async fn fetch_reminders(&self, _token: &str) -> Result<ReminderSchedule, ApiError> {
        self.check_failure()?;
        Ok(self.reminders.clone())
    }

    async fn update_reminder(&self, _token: &str, reminder: &Reminder) -> Result<(), ApiError> {
        self.check_failure()?;
        self.updated_reminders
            .lock()
            .unwrap()
            .push(reminder.id.clone());
        Ok(())
    }

    async fn delete_reminder(&self, _token: &str, reminder_id: &str) -> Result<(), ApiError> {
        self.check_failure()?;
        self.deleted_reminders
            .lock()
            .unwrap()
            .push(reminder_id.to_string());
        Ok(())
    }
}
