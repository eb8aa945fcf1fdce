//! Contact form submission

use gloo_net::http::Request;

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::types::ContactMessage;

impl ContactMessage {
    /// Check the fields a reply needs. Phone is optional.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SiteError::InvalidInput("Please tell us your name".to_string()));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SiteError::InvalidInput("Please enter your email address".to_string()));
        }
        if !email.contains('@') {
            return Err(SiteError::InvalidInput(format!("'{}' is not an email address", email)));
        }
        if self.message.trim().is_empty() {
            return Err(SiteError::InvalidInput("Please tell us about your space".to_string()));
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Resolve the endpoint for a message, validating it first
pub fn prepare_submission(config: &SiteConfig, message: &ContactMessage) -> Result<String> {
    message.validate()?;
    config
        .contact_endpoint
        .clone()
        .ok_or(SiteError::NotConfigured)
}

/// POST the message as JSON to the configured endpoint
pub async fn submit_contact(config: &SiteConfig, message: &ContactMessage) -> Result<()> {
    let message = message.trimmed();
    let url = prepare_submission(config, &message)?;

    let req = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(&message)
        .map_err(|e| SiteError::Network(format!("Failed to serialize request: {}", e)))?;

    let resp = req
        .send()
        .await
        .map_err(|e| SiteError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(SiteError::Rejected(resp.status()));
    }

    tracing::info!("contact message sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Nour".to_string(),
            phone: String::new(),
            email: "nour@example.com".to_string(),
            message: "A walk-in dressing for a 4x3m room".to_string(),
        }
    }

    #[test]
    fn test_valid_message_without_phone() {
        assert!(message().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let msg = ContactMessage { name: "   ".to_string(), ..message() };
        assert!(matches!(msg.validate(), Err(SiteError::InvalidInput(_))));
    }

    #[test]
    fn test_email_without_at_rejected() {
        let msg = ContactMessage { email: "nour.example.com".to_string(), ..message() };
        let err = msg.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: 'nour.example.com' is not an email address"
        );
    }

    #[test]
    fn test_blank_message_rejected() {
        let msg = ContactMessage { message: "\n".to_string(), ..message() };
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_unconfigured_endpoint() {
        let config = SiteConfig::default();
        assert_eq!(
            prepare_submission(&config, &message()),
            Err(SiteError::NotConfigured)
        );
    }

    #[test]
    fn test_validation_runs_before_endpoint_check() {
        let config = SiteConfig::default();
        let msg = ContactMessage::default();
        assert!(matches!(
            prepare_submission(&config, &msg),
            Err(SiteError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_configured_endpoint() {
        let config = SiteConfig {
            contact_endpoint: Some("https://forms.example.com/gulf".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(
            prepare_submission(&config, &message()).as_deref(),
            Ok("https://forms.example.com/gulf")
        );
    }

    #[test]
    fn test_payload_field_names() {
        let json = serde_json::to_value(message()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        for key in ["name", "phone", "email", "message"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_trimmed() {
        let msg = ContactMessage { name: "  Nour ".to_string(), ..message() };
        assert_eq!(msg.trimmed().name, "Nour");
    }
}
