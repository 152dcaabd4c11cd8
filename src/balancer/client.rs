use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::args::DEFAULT_USER_AGENT;
use crate::domain::Algorithm;
use crate::error::{BalancerError, CallFailure, HttpError};
use crate::fleet::TargetId;

use super::wire::{
    ADD_IP_PATH, AddIpRequest, GET_IP_PATH, GetIpResponse, SET_ALGORITHM_PATH, check_ack,
};
use super::{Balancer, Snapshot};

#[derive(Debug, Clone)]
pub struct BalancerSettings {
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

/// `Balancer` backed by the HTTP contract (`get_ip`, `set_algorithm`, `add_ip`).
#[derive(Debug, Clone)]
pub struct HttpBalancer {
    client: Client,
    base: Url,
}

impl HttpBalancer {
    /// Builds the HTTP client and validates the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid or the client cannot be built.
    pub fn new(settings: &BalancerSettings) -> Result<Self, HttpError> {
        let base = parse_base_url(&settings.base_url)?;
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;
        Ok(Self { client, base })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, CallFailure> {
        self.base
            .join(path)
            .map_err(|err| CallFailure::InvalidUrl {
                path: path.to_owned(),
                source: err,
            })
    }

    async fn ack(response: Response) -> Result<(), CallFailure> {
        let response = require_success(response)?;
        let body = response
            .text()
            .await
            .map_err(|err| CallFailure::Decode { source: err })?;
        check_ack(&body)
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, CallFailure> {
        let url = self.endpoint(GET_IP_PATH)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| CallFailure::Transport { source: err })?;
        let body: GetIpResponse = require_success(response)?
            .json()
            .await
            .map_err(|err| CallFailure::Decode { source: err })?;
        Ok(Snapshot::from(body))
    }

    async fn switch_algorithm(&self, algorithm: Algorithm) -> Result<(), CallFailure> {
        let url = self.endpoint(&format!("{}/{}", SET_ALGORITHM_PATH, algorithm.as_str()))?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| CallFailure::Transport { source: err })?;
        Self::ack(response).await
    }

    async fn announce(&self, id: &TargetId) -> Result<(), CallFailure> {
        let url = self.endpoint(ADD_IP_PATH)?;
        let response = self
            .client
            .post(url)
            .json(&AddIpRequest { ip: id.as_str() })
            .send()
            .await
            .map_err(|err| CallFailure::Transport { source: err })?;
        Self::ack(response).await
    }
}

#[async_trait]
impl Balancer for HttpBalancer {
    async fn send_request(&self) -> Result<Snapshot, BalancerError> {
        let snapshot = self
            .fetch_snapshot()
            .await
            .map_err(|cause| BalancerError::Dispatch { cause })?;
        debug!(selected = %snapshot.selected_id, "balancer routed request");
        Ok(snapshot)
    }

    async fn set_algorithm(&self, algorithm: Algorithm) -> Result<(), BalancerError> {
        self.switch_algorithm(algorithm)
            .await
            .map_err(|cause| BalancerError::Configuration {
                algorithm: algorithm.as_str().to_owned(),
                cause,
            })
    }

    async fn register_target(&self, id: &TargetId) -> Result<(), BalancerError> {
        self.announce(id)
            .await
            .map_err(|cause| BalancerError::Registration {
                id: id.as_str().to_owned(),
                cause,
            })
    }
}

fn require_success(response: Response) -> Result<Response, CallFailure> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CallFailure::Status { status })
    }
}

/// Parses the base URL and makes sure relative joins keep its path.
pub(super) fn parse_base_url(raw: &str) -> Result<Url, HttpError> {
    let mut url = Url::parse(raw.trim()).map_err(|err| HttpError::InvalidBalancerUrl {
        url: raw.to_owned(),
        source: err,
    })?;
    if url.cannot_be_a_base() {
        return Err(HttpError::CannotBeBase {
            url: raw.to_owned(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
