use super::{CommissionApi, RemoteApiError};
use crate::shared::config::RemoteApiConfig;
use async_trait::async_trait;
use contracts::domain::a001_commission_structure::CommissionStructurePayload;
use contracts::enums::PropertyCategory;
use std::time::Duration;

/// Клиент REST API services.dcarbon.solutions
pub struct HttpCommissionApi {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpCommissionApi {
    pub fn new(config: &RemoteApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// URL структуры комиссий категории
    pub fn endpoint(&self, category: PropertyCategory) -> String {
        format!("{}/admin/commission-structure/{}", self.base_url, category.path())
    }

    fn map_send_error(&self, url: &str, e: reqwest::Error) -> RemoteApiError {
        let message = if e.is_timeout() {
            format!("timeout after {} sec ({})", self.timeout_secs, url)
        } else if e.is_connect() {
            format!("cannot connect to {}: {}", url, e)
        } else {
            format!("request to {} failed: {}", url, e)
        };
        RemoteApiError::Network(message)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RemoteApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RemoteApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Срезать вложенный объект `data`, если API обернул ответ
fn unwrap_data(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    }
}

#[async_trait]
impl CommissionApi for HttpCommissionApi {
    async fn fetch(
        &self,
        category: PropertyCategory,
        auth: Option<&str>,
    ) -> Result<CommissionStructurePayload, RemoteApiError> {
        let url = self.endpoint(category);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = auth {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_send_error(&url, e))?;
        let response = Self::check_status(response).await?;

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RemoteApiError::Decode(e.to_string()))?;
        serde_json::from_value(unwrap_data(value)).map_err(|e| RemoteApiError::Decode(e.to_string()))
    }

    async fn submit(
        &self,
        category: PropertyCategory,
        payload: &CommissionStructurePayload,
        auth: Option<&str>,
    ) -> Result<(), RemoteApiError> {
        let url = self.endpoint(category);
        tracing::debug!("PUT {}", url);

        let mut request = self.client.put(&url).json(payload);
        if let Some(token) = auth {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_send_error(&url, e))?;
        Self::check_status(response).await?;
        Ok(())
    }
}
