use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailConfig;
use crate::lead::form::LeadFields;

/// Any way the email provider can fail to accept a lead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SendFailure {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers a submitted lead somewhere a human will read it.
///
/// The returned future resolves exactly once. It must not borrow `self`, so
/// the caller can drop the sender while the request is still in flight.
pub trait LeadSender {
    fn send(&self, lead: LeadFields) -> LocalBoxFuture<'static, Result<(), SendFailure>>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a LeadFields,
}

impl<'a> EmailJsRequest<'a> {
    fn new(config: &'a EmailConfig, lead: &'a LeadFields) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: lead,
        }
    }
}

/// Sends leads through the EmailJS REST endpoint straight from the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailJsSender {
    config: EmailConfig,
}

impl EmailJsSender {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

impl LeadSender for EmailJsSender {
    fn send(&self, lead: LeadFields) -> LocalBoxFuture<'static, Result<(), SendFailure>> {
        let config = self.config.clone();
        async move {
            let request = Request::post(&config.endpoint)
                .json(&EmailJsRequest::new(&config, &lead))
                .map_err(|e| SendFailure::Encode(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| SendFailure::Network(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(SendFailure::Rejected { status, body })
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> EmailConfig {
        EmailConfig {
            endpoint: "https://mail.test/send".to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "pk_test".to_string(),
        }
    }

    #[test]
    fn request_body_matches_emailjs_shape() {
        let lead = LeadFields {
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            phone: "555".to_string(),
            company: String::new(),
            message: "hi".to_string(),
        };
        let config = config();

        let body = serde_json::to_value(EmailJsRequest::new(&config, &lead)).unwrap();

        assert_eq!(
            body,
            json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "pk_test",
                "template_params": {
                    "name": "Ada",
                    "email": "a@b.com",
                    "phone": "555",
                    "company": "",
                    "message": "hi",
                },
            })
        );
    }

    #[test]
    fn rejection_message_carries_status_and_body() {
        let failure = SendFailure::Rejected {
            status: 400,
            body: "The Public Key is invalid".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "provider rejected message with status 400: The Public Key is invalid"
        );
    }
}
