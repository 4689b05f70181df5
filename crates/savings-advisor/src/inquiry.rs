//! Contact Inquiries
//!
//! Validation and submission for the contact form. Submission stays
//! client-side: a validated inquiry is turned into a `mailto:` link so the
//! visitor's own mail client carries the request.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;

/// Where inquiries are addressed
pub const CONTACT_EMAIL: &str = "hei@svarbot.no";

// Shape check only: something@something.something, no whitespace.
// Norwegian addresses can carry æ/ø/å, so no ASCII letter classes.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validation failures, worded for direct display in the form
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Vennligst fyll ut alle påkrevde felt")]
    MissingRequiredFields,

    #[error("Vennligst velg minst ett tilbud")]
    NoServiceSelected,

    #[error("Vennligst oppgi en gyldig e-postadresse")]
    InvalidEmail,
}

/// The offers a visitor can ask about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceInterest {
    Pilot,
    Standard,
    Consulting,
}

impl ServiceInterest {
    /// Every offer, in the order the form lists them
    pub const ALL: [ServiceInterest; 3] = [
        ServiceInterest::Pilot,
        ServiceInterest::Standard,
        ServiceInterest::Consulting,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ServiceInterest::Pilot => "pilot",
            ServiceInterest::Standard => "standard",
            ServiceInterest::Consulting => "consulting",
        }
    }

    /// Label shown next to the checkbox and written into the inquiry mail
    pub fn label(&self) -> &'static str {
        match self {
            ServiceInterest::Pilot => "Gratis pilot (1 måned test)",
            ServiceInterest::Standard => "Standard løsning (1 000 kr/mnd)",
            ServiceInterest::Consulting => "AI-konsultering (skreddersydd løsning)",
        }
    }
}

/// A contact form submission
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inquiry {
    /// Company name (required)
    pub company: String,

    /// Contact person (required)
    pub contact_person: String,

    /// Reply address (required)
    pub email: String,

    /// Phone number (optional)
    pub phone: String,

    /// Offers the visitor is interested in (at least one)
    pub services: Vec<ServiceInterest>,

    /// Free-text description (optional)
    pub message: String,
}

impl Inquiry {
    /// Check the form rules in the order the form reports them
    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty()
            || self.contact_person.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Err(InquiryError::MissingRequiredFields.into());
        }

        if self.services.is_empty() {
            return Err(InquiryError::NoServiceSelected.into());
        }

        if !EMAIL_REGEX.is_match(self.email.trim()) {
            return Err(InquiryError::InvalidEmail.into());
        }

        Ok(())
    }

    /// Build the `mailto:` link that carries this inquiry
    pub fn mailto_url(&self) -> String {
        let services_text = self
            .services
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ");
        let phone = if self.phone.trim().is_empty() {
            "Ikke oppgitt"
        } else {
            self.phone.trim()
        };
        let message = if self.message.trim().is_empty() {
            "Ingen beskrivelse oppgitt"
        } else {
            self.message.trim()
        };

        let subject = format!("Ny forespørsel fra {}", self.company);
        let body = format!(
            "Ny forespørsel fra {}\n\nKontaktperson: {}\nE-post: {}\nTelefon: {}\n\n\
             Ønsket tilbud: {}\n\nBeskrivelse:\n{}\n\n---\nSendt fra svarbot.no kontakt-skjema",
            self.company, self.contact_person, self.email, phone, services_text, message
        );

        format!(
            "mailto:{}?subject={}&body={}",
            CONTACT_EMAIL,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    fn complete() -> Inquiry {
        Inquiry {
            company: "Nordlys AS".into(),
            contact_person: "Kari Nordmann".into(),
            email: "kari@nordlys.no".into(),
            phone: "99887766".into(),
            services: vec![ServiceInterest::Pilot, ServiceInterest::Standard],
            message: "Vi drukner i kundemail.".into(),
        }
    }

    #[test]
    fn test_service_interest_as_str() {
        assert_eq!(ServiceInterest::Pilot.as_str(), "pilot");
        assert_eq!(ServiceInterest::Standard.as_str(), "standard");
        assert_eq!(ServiceInterest::Consulting.as_str(), "consulting");
    }

    #[test]
    fn test_complete_inquiry_is_valid() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut inquiry = complete();
        inquiry.company = "  ".into();

        let err = inquiry.validate().unwrap_err();
        assert_eq!(err.to_string(), "Vennligst fyll ut alle påkrevde felt");
    }

    #[test]
    fn test_at_least_one_service() {
        let mut inquiry = complete();
        inquiry.services.clear();

        assert!(matches!(
            inquiry.validate(),
            Err(AdvisorError::Inquiry(InquiryError::NoServiceSelected))
        ));
    }

    #[test]
    fn test_first_violated_rule_wins() {
        // Everything wrong at once still reports the required fields first
        let inquiry = Inquiry {
            company: "  ".into(),
            email: "ikke-en-adresse".into(),
            ..Inquiry::default()
        };
        assert!(matches!(
            inquiry.validate(),
            Err(AdvisorError::Inquiry(InquiryError::MissingRequiredFields))
        ));

        // With the required fields filled, the service rule outranks the
        // e-mail shape
        let mut inquiry = complete();
        inquiry.services.clear();
        inquiry.email = "ikke-en-adresse".into();
        assert!(matches!(
            inquiry.validate(),
            Err(AdvisorError::Inquiry(InquiryError::NoServiceSelected))
        ));
    }

    #[test]
    fn test_email_shapes() {
        let mut inquiry = complete();
        for bad in ["kari", "kari@nordlys", "kari@nordlys.", "@nordlys.no", "kari nord@lys.no"] {
            inquiry.email = bad.into();
            assert!(
                matches!(
                    inquiry.validate(),
                    Err(AdvisorError::Inquiry(InquiryError::InvalidEmail))
                ),
                "accepted {:?}",
                bad
            );
        }

        inquiry.email = "post@bedrift.no".into();
        assert!(inquiry.validate().is_ok());

        // Addresses with Norwegian letters are fine
        inquiry.email = "bjørn@blåbær.no".into();
        assert!(inquiry.validate().is_ok());
    }

    #[test]
    fn test_mailto_addressing_and_subject() {
        let url = complete().mailto_url();
        assert!(url.starts_with("mailto:hei@svarbot.no?subject="));
        assert!(url.contains("Ny%20foresp%C3%B8rsel%20fra%20Nordlys%20AS"));
    }

    #[test]
    fn test_mailto_body_fallbacks() {
        let mut inquiry = complete();
        inquiry.phone = String::new();
        inquiry.message = String::new();

        let url = inquiry.mailto_url();
        assert!(url.contains(&urlencoding::encode("Telefon: Ikke oppgitt").into_owned()));
        assert!(url.contains(&urlencoding::encode("Ingen beskrivelse oppgitt").into_owned()));
    }

    #[test]
    fn test_mailto_lists_chosen_services() {
        let url = complete().mailto_url();
        let expected =
            urlencoding::encode("Gratis pilot (1 måned test), Standard løsning (1 000 kr/mnd)")
                .into_owned();
        assert!(url.contains(&expected));
    }
}
