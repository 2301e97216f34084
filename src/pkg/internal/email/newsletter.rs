use std::fmt::{self, Display};

use chrono::Utc;

use super::{SendEmail, send_email};
use crate::conf::settings;

pub struct SubscriptionNotice<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub occupation: &'a str,
}

impl<'a> Display for SubscriptionNotice<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"
New Newsletter Subscription:

Name: {}
Email: {}
Occupation: {}
Date: {}

This person has subscribed to the {} newsletter.
"#,
            self.name,
            self.email,
            self.occupation,
            Utc::now().to_rfc3339(),
            &settings.service_name
        )
    }
}

impl<'a> SendEmail for SubscriptionNotice<'a> {
    fn send(&self, email: &str) -> crate::prelude::Result<()> {
        send_email(
            email,
            "New ProductSpace newsletter subscription",
            &format!("{}", &self),
            false,
        )?;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::prelude::Result;

    #[tokio::test]
    #[traced_test]
    async fn test_subscription_notice() -> Result<()> {
        SubscriptionNotice {
            name: "Ada",
            email: "ada@example.com",
            occupation: "Product Manager",
        }
        .send(&settings.newsletter_email)?;
        Ok(())
    }

    #[test]
    fn test_notice_body_carries_subscriber_details() {
        let body = SubscriptionNotice {
            name: "Ada",
            email: "ada@example.com",
            occupation: "Product Manager",
        }
        .to_string();
        assert!(body.contains("Name: Ada"));
        assert!(body.contains("Email: ada@example.com"));
        assert!(body.contains("Occupation: Product Manager"));
    }
}
