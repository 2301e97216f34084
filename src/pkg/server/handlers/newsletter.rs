use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    conf::settings,
    pkg::internal::email::{SendEmail, newsletter::SubscriptionNotice},
    prelude::{Error, Result},
};

#[derive(Deserialize)]
pub struct SubscribeInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub occupation: Option<String>,
}

pub async fn subscribe(Json(input): Json<SubscribeInput>) -> Result<Json<Value>> {
    let (Some(name), Some(email), Some(occupation)) = (
        input.name.filter(|value| !value.is_empty()),
        input.email.filter(|value| !value.is_empty()),
        input.occupation.filter(|value| !value.is_empty()),
    ) else {
        return Err(Error::Validation(
            "Name, email, and occupation are required".into(),
        ));
    };
    tracing::info!("newsletter subscription from {} <{}>", &name, &email);
    SubscriptionNotice {
        name: &name,
        email: &email,
        occupation: &occupation,
    }
    .send(&settings.newsletter_email)?;
    Ok(Json(json!({
        "success": true,
        "message": "Thank you for subscribing to our newsletter!",
    })))
}
