use crate::config::ContactConfig;
use crate::contact::ContactPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("contact relay is not configured (missing {0})")]
    NotConfigured(&'static str),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Anything that can deliver a contact form submission.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Relay speaking the EmailJS REST API (`POST /api/v1.0/email/send`).
pub struct EmailJsRelay {
    http: Client,
    endpoint: String,
    service_id: Option<String>,
    template_id: Option<String>,
    public_key: Option<String>,
}

impl EmailJsRelay {
    pub fn new(config: &ContactConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        })
    }

    pub fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.endpoint)
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    fn credentials(&self) -> Result<(&str, &str, &str), RelayError> {
        let service = self
            .service_id
            .as_deref()
            .ok_or(RelayError::NotConfigured("service_id"))?;
        let template = self
            .template_id
            .as_deref()
            .ok_or(RelayError::NotConfigured("template_id"))?;
        let key = self
            .public_key
            .as_deref()
            .ok_or(RelayError::NotConfigured("public_key"))?;
        Ok((service, template, key))
    }
}

#[async_trait]
impl ContactRelay for EmailJsRelay {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        let (service_id, template_id, user_id) = self.credentials()?;
        let body = SendRequest {
            service_id,
            template_id,
            user_id,
            template_params: payload,
        };

        let response = self.http.post(self.send_url()).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "contact relay rejected message");
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        tracing::info!(from = %payload.reply_to, "contact message relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> ContactConfig {
        ContactConfig {
            endpoint: "https://relay.test/".into(),
            service_id: Some("svc".into()),
            template_id: Some("tpl".into()),
            public_key: Some("key".into()),
            ..ContactConfig::default()
        }
    }

    #[test]
    fn test_send_url_trims_slash() {
        let relay = EmailJsRelay::new(&configured()).unwrap();
        assert_eq!(relay.send_url(), "https://relay.test/api/v1.0/email/send");
        assert!(relay.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails_before_network() {
        let relay = EmailJsRelay::new(&ContactConfig::default()).unwrap();
        assert!(!relay.is_configured());
        let payload = ContactPayload::new("Ada", "ada@example.com", "hello");
        let err = relay.submit(&payload).await.unwrap_err();
        assert!(matches!(err, RelayError::NotConfigured("service_id")));
    }

    #[test]
    fn test_request_body_shape() {
        let payload = ContactPayload::new("Ada", "ada@example.com", "hello");
        let body = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: &payload,
        };
        let value = toml::Value::try_from(&body).unwrap();
        let params = value.get("template_params").unwrap();
        assert_eq!(value.get("user_id").unwrap().as_str(), Some("key"));
        assert_eq!(params.get("from_name").unwrap().as_str(), Some("Ada"));
        assert_eq!(params.get("reply_to").unwrap().as_str(), Some("ada@example.com"));
    }
}
