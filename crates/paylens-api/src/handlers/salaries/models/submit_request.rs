//! Salary submission request model

use serde::Deserialize;

use paylens_salaries::NewSubmission;

/// Maximum length for free-text fields (prevent memory exhaustion)
const MAX_FIELD_LENGTH: usize = 256;

/// Request body for POST /salaries.
///
/// Status and timestamp are never part of the request; the server assigns
/// both. Omitted optional fields take the domain defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSalaryRequest {
    #[serde(deserialize_with = "validate_required_field")]
    pub country: String,
    #[serde(deserialize_with = "validate_required_field")]
    pub company: String,
    #[serde(deserialize_with = "validate_required_field")]
    pub role: String,
    #[serde(default)]
    pub experience_years: Option<i32>,
    #[serde(default)]
    pub level: Option<String>,
    pub salary_amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub is_anonymous: Option<bool>,
    #[serde(default)]
    pub user_email: Option<String>,
}

impl From<SubmitSalaryRequest> for NewSubmission {
    fn from(req: SubmitSalaryRequest) -> Self {
        NewSubmission {
            country: req.country,
            company: req.company,
            role: req.role,
            years_of_experience: req.experience_years,
            level: req.level,
            salary_amount: req.salary_amount,
            currency: req.currency,
            period: req.period,
            is_anonymous: req.is_anonymous,
            user_email: req.user_email,
        }
    }
}

fn validate_required_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::custom("field must not be empty"));
    }
    if s.len() > MAX_FIELD_LENGTH {
        return Err(serde::de::Error::custom(format!(
            "field exceeds maximum length of {} characters",
            MAX_FIELD_LENGTH
        )));
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_body_parses_with_defaults_unset() {
        let parsed: SubmitSalaryRequest = serde_json::from_str(
            r#"{
                "country": "Germany",
                "company": "Acme GmbH",
                "role": "Backend Engineer",
                "salaryAmount": 95000.0
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.country, "Germany");
        assert!(parsed.currency.is_none());
        assert!(parsed.is_anonymous.is_none());

        let new: NewSubmission = parsed.into();
        assert_eq!(new.salary_amount, 95_000.0);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let parsed: SubmitSalaryRequest = serde_json::from_str(
            r#"{
                "country": "Germany",
                "company": "Acme GmbH",
                "role": "Backend Engineer",
                "experienceYears": 6,
                "salaryAmount": 95000.0,
                "isAnonymous": false,
                "userEmail": "alice@example.com"
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.experience_years, Some(6));
        assert_eq!(parsed.is_anonymous, Some(false));
        assert_eq!(parsed.user_email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let err = serde_json::from_str::<SubmitSalaryRequest>(
            r#"{
                "country": "  ",
                "company": "Acme GmbH",
                "role": "Backend Engineer",
                "salaryAmount": 95000.0
            }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let err = serde_json::from_str::<SubmitSalaryRequest>(
            r#"{"country": "Germany", "company": "Acme GmbH", "role": "Backend Engineer"}"#,
        );
        assert!(err.is_err(), "salaryAmount is required");
    }
}
