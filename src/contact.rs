use crate::error::Error;

/// Values entered in the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    /// Same check the browser applies to `required` inputs: each field
    /// must be non-empty. Whitespace counts as a value.
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ] {
            if value.is_empty() {
                return Err(Error::MissingField(field.as_str()));
            }
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Message from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` URL that hands the message to the visitor's mail client.
    pub fn mailto_link(&self, recipient: &str) -> Result<String, Error> {
        self.validate()?;

        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn mailto_carries_each_field_once() {
        let link = jane().mailto_link("me@example.com").expect("complete form");

        assert!(link.starts_with("mailto:me@example.com?subject=Message%20from%20Jane&body="));

        let body = link.split("&body=").nth(1).expect("body parameter");
        assert_eq!(body.matches("Jane").count(), 1);
        assert_eq!(body.matches("jane%40x.com").count(), 1);
        assert_eq!(body.matches("Hi").count(), 1);
        assert!(!body.contains(' '));
        assert!(!body.contains('\n'));

        let decoded = urlencoding::decode(body).expect("valid percent-encoding");
        assert_eq!(decoded, "Name: Jane\nEmail: jane@x.com\n\nMessage:\nHi");
    }

    #[test]
    fn reserved_characters_in_message_are_encoded() {
        let form = jane().with(ContactField::Message, "a&b=c?d#e".to_string());
        let link = form.mailto_link("me@example.com").expect("complete form");

        assert_eq!(link.matches('&').count(), 1);
        assert!(link.ends_with("a%26b%3Dc%3Fd%23e"));
    }

    #[test]
    fn empty_field_is_rejected() {
        let form = jane().with(ContactField::Email, String::new());
        let result = form.mailto_link("me@example.com");
        assert!(matches!(result, Err(Error::MissingField("email"))));
    }

    #[test]
    fn whitespace_message_still_produces_link() {
        let form = jane().with(ContactField::Message, "   ".to_string());
        let link = form.mailto_link("me@example.com").expect("whitespace is a value");
        assert!(link.ends_with("Message%3A%0A%20%20%20"));
    }

    #[test]
    fn field_names_round_trip() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            assert_eq!(ContactField::parse(field.as_str()), Some(field));
        }
        assert_eq!(ContactField::parse("phone"), None);
    }
}
