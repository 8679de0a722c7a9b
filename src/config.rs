
/// EmailJS account settings the lead form sends through.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub fn get_email_config() -> EmailConfig {
    EmailConfig {
        endpoint: EMAILJS_ENDPOINT.to_string(),
        service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_qabxpug").to_string(),
        template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_2ukmb79").to_string(),
        public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("q8R-BFjnK5JqIa1Pm").to_string(),
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
