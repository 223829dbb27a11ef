//! Phone verification through Twilio Verify.
//!
//! Twilio generates, sends and checks the codes; this service only forwards the phone
//! number and the submitted code. Any transport or non-success HTTP status surfaces as
//! `AppError::ReqwestErr` and becomes a 500 with the detail logged.

use serde::Deserialize;

use crate::server::{config::TwilioConfig, error::AppError};

/// Verification status Twilio reports for a correct code.
const APPROVED_STATUS: &str = "approved";

#[derive(Debug, Deserialize)]
struct VerificationResponse {
    status: String,
}

pub struct OtpService<'a> {
    http_client: &'a reqwest::Client,
    twilio: &'a TwilioConfig,
}

impl<'a> OtpService<'a> {
    pub fn new(http_client: &'a reqwest::Client, twilio: &'a TwilioConfig) -> Self {
        Self {
            http_client,
            twilio,
        }
    }

    /// Asks Twilio to text a verification code to the phone number.
    ///
    /// # Returns
    /// - `Ok(())` - Twilio accepted the request
    /// - `Err(AppError::BadRequest)` - Empty phone number
    /// - `Err(AppError::ReqwestErr)` - Twilio unreachable or rejected the request
    pub async fn send(&self, phone_number: &str) -> Result<(), AppError> {
        require_phone(phone_number)?;

        let response: VerificationResponse = self
            .http_client
            .post(self.endpoint("Verifications"))
            .basic_auth(&self.twilio.account_sid, Some(&self.twilio.auth_token))
            .form(&[("To", phone_number), ("Channel", "sms")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!("Verification for {} is {}", phone_number, response.status);

        Ok(())
    }

    /// Checks a submitted code with Twilio.
    ///
    /// # Returns
    /// - `Ok(true)` - Twilio approved the code
    /// - `Ok(false)` - Code is wrong
    /// - `Err(AppError::BadRequest)` - Empty phone number or code
    /// - `Err(AppError::ReqwestErr)` - Twilio unreachable or rejected the request
    pub async fn verify(&self, phone_number: &str, code: &str) -> Result<bool, AppError> {
        require_phone(phone_number)?;
        if code.trim().is_empty() {
            return Err(AppError::BadRequest("OTP is required".to_string()));
        }

        let response: VerificationResponse = self
            .http_client
            .post(self.endpoint("VerificationCheck"))
            .basic_auth(&self.twilio.account_sid, Some(&self.twilio.auth_token))
            .form(&[("To", phone_number), ("Code", code)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.status == APPROVED_STATUS)
    }

    fn endpoint(&self, resource: &str) -> String {
        format!(
            "{}/Services/{}/{}",
            self.twilio.base_url, self.twilio.verify_service_sid, resource
        )
    }
}

fn require_phone(phone_number: &str) -> Result<(), AppError> {
    if phone_number.trim().is_empty() {
        return Err(AppError::BadRequest("Phone number is required".to_string()));
    }

    Ok(())
}
