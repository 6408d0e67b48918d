use crate::config::loader::{Config, ConfigError};
use crate::models::form_dto::build_form;
use crate::models::selected_file_dao::SelectedFile;
use crate::services::submitter::{Endpoint, SubmitError};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Talks to the `/process` endpoint of the configured server.
pub struct Client {
    http: reqwest::Client,
    url: Url,
}

impl Client {
    pub fn new(config: &Config) -> Result<Client, ConfigError> {
        Ok(Client {
            http: reqwest::Client::new(),
            url: config.process_url()?,
        })
    }
}

impl Endpoint for Client {
    async fn process(&self, file: SelectedFile) -> Result<Value, SubmitError> {
        let form = build_form(file).map_err(SubmitError::InvalidForm)?;

        let response = self
            .http
            .post(self.url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(SubmitError::RequestFailed)?;

        // The status is not inspected, only the body decides the outcome
        debug!("{} responded with {}", self.url, response.status());

        let body = response
            .text()
            .await
            .map_err(SubmitError::ResponseReadFailed)?;
        debug!("{:?}", body);

        serde_json::from_str::<Value>(&body).map_err(SubmitError::DeserializationFailed)
    }
}
