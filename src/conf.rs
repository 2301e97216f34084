use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: String,
    //smtp - subscription notices are only logged while these stay unset
    #[serde(default)]
    pub from_email: String,
    #[serde(default)]
    pub newsletter_email: String,
    #[serde(default)]
    pub smtp_user: String,
    #[serde(default)]
    pub smtp_pass: String,
    #[serde(default)]
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

fn default_service_name() -> String {
    "ProductSpace".into()
}

fn default_listen_port() -> String {
    "3000".into()
}

fn default_smtp_port() -> u16 {
    587
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if s.newsletter_email.is_empty() {
            s.newsletter_email = "scuproductspace@gmail.com".into();
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
