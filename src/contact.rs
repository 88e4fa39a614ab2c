use serde::Serialize;
use thiserror::Error;

/// Text surfaced after a successful submit.
pub const ACKNOWLEDGEMENT: &str = "Form submitted!";

/// The four contact form fields. Each must be non-empty; the form guard
/// rejects a request with an empty one before any handler runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromForm, Serialize)]
pub struct ContactFields {
    #[field(validate = len(1..))]
    pub name: String,
    #[field(validate = len(1..))]
    pub email: String,
    #[field(validate = len(1..))]
    pub subject: String,
    #[field(validate = len(1..))]
    pub message: String,
}

impl ContactFields {
    /// First empty required field, in form order.
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Acknowledges complete submissions. Nothing is sent or stored, and the
/// submitted values are left with the caller.
#[derive(Debug, Default)]
pub struct ContactFormHandler {
    acknowledged: u64,
}

impl ContactFormHandler {
    pub fn submit(&mut self, fields: &ContactFields) -> Result<Acknowledgement, SubmitBlocked> {
        if let Some(field) = fields.first_missing() {
            return Err(SubmitBlocked::MissingField(field));
        }
        self.acknowledged += 1;
        log::info!("Contact form acknowledged (nothing sent)");
        Ok(Acknowledgement {
            message: ACKNOWLEDGEMENT,
        })
    }

    pub fn acknowledged(&self) -> u64 {
        self.acknowledged
    }
}

/// What the contact section shows after a no-script submit: the values as
/// entered plus the acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEcho {
    pub fields: ContactFields,
    pub acknowledgement: Option<Acknowledgement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactFields {
        ContactFields {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "Test message".into(),
        }
    }

    #[test]
    fn test_complete_submission_acknowledged_once() {
        let mut handler = ContactFormHandler::default();
        let fields = jane();
        let ack = handler.submit(&fields).unwrap();
        assert_eq!(ack.message, "Form submitted!");
        assert_eq!(handler.acknowledged(), 1);
        assert_eq!(fields, jane());
    }

    #[test]
    fn test_each_empty_field_blocks() {
        let mut handler = ContactFormHandler::default();
        for field in ["name", "email", "subject", "message"] {
            let mut fields = jane();
            match field {
                "name" => fields.name.clear(),
                "email" => fields.email.clear(),
                "subject" => fields.subject.clear(),
                _ => fields.message.clear(),
            }
            assert_eq!(handler.submit(&fields), Err(SubmitBlocked::MissingField(field)));
        }
        assert_eq!(handler.acknowledged(), 0);
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut fields = jane();
        fields.subject = " ".into();
        assert_eq!(fields.first_missing(), None);
    }
}
