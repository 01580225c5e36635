use crate::config::CarrierConfig;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct CarrierTestRequest<'a> {
    company: CompanyCredentials<'a>,
}

#[derive(Debug, Serialize)]
struct CompanyCredentials<'a> {
    name: &'a str,
    #[serde(rename = "Key")]
    key: &'a str,
    #[serde(rename = "Token")]
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct CarrierTestResponse {
    #[serde(default)]
    good: bool,
}

/// Port to the delivery company's credential validation endpoint.
#[async_trait]
pub trait CarrierValidator: Send + Sync {
    /// Side-effect free on the carrier side; safe to repeat after a failure.
    async fn validate(&self, name: &str, key: &str, token: &str) -> AppResult<bool>;
}

pub struct CarrierApi {
    client: Client,
    config: CarrierConfig,
}

impl CarrierApi {
    pub fn new(config: CarrierConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CarrierValidator for CarrierApi {
    async fn validate(&self, name: &str, key: &str, token: &str) -> AppResult<bool> {
        let url = format!("{}/carrier/test", self.config.base_url);
        let body = CarrierTestRequest {
            company: CompanyCredentials { name, key, token },
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::InvalidCredentials(format!(
                "validation endpoint returned HTTP {}",
                status.as_u16()
            )));
        }

        let verdict: CarrierTestResponse = response.json().await.map_err(|_| {
            AppError::InvalidCredentials("malformed validation response".to_string())
        })?;

        log::info!("Carrier credential check for {name}: good={}", verdict.good);
        Ok(verdict.good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let body = CarrierTestRequest {
            company: CompanyCredentials {
                name: "FastShip",
                key: "k-123",
                token: "t-456",
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"company": {"name": "FastShip", "Key": "k-123", "Token": "t-456"}})
        );
    }

    #[test]
    fn test_missing_good_field_reads_as_false() {
        let verdict: CarrierTestResponse = serde_json::from_str("{}").unwrap();
        assert!(!verdict.good);
    }
}
