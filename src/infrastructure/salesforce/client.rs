//! HTTP client for the Salesforce lead-conversion surface.

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::types::{
    ConvertLeadActionResult, ConvertLeadInput, ConvertLeadRequest, LeadStatusQueryResponse,
    TokenResponse,
};
use crate::domain::errors::CrmError;
use crate::domain::models::SalesforceConfig;
use crate::domain::ports::{ConvertLeadResult, CrmClient};
use crate::infrastructure::credentials::SalesforceCredentials;

/// Label sent when the remote org exposes no status flagged as is-converted.
/// Understood by the remote side as the stock converted status.
pub const DEFAULT_CONVERTED_STATUS: &str = "Closed - Converted";

const STATUS_SOQL: &str = "SELECT MasterLabel FROM LeadStatus WHERE IsConverted = true LIMIT 1";

/// Authenticated Salesforce session.
///
/// `login` performs the OAuth2 username-password flow once; the resulting
/// access token and instance URL are held for the lifetime of the run. Every
/// request carries the configured timeout, and a timeout surfaces as a
/// transport failure like any other connection fault.
#[derive(Debug)]
pub struct SalesforceClient {
    http: ReqwestClient,
    access_token: String,
    instance_url: String,
    api_version: String,
}

impl SalesforceClient {
    /// Authenticate against the configured login host.
    ///
    /// A non-success token response is an auth failure and fatal to the run;
    /// nothing is retried.
    pub async fn login(config: &SalesforceConfig) -> Result<Self, CrmError> {
        let credentials = SalesforceCredentials::from(config);

        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CrmError::Transport(e.to_string()))?;

        let url = format!(
            "{}/services/oauth2/token",
            config.login_url.trim_end_matches('/')
        );
        debug!(%url, username = %credentials.username, "logging in to Salesforce");

        let api_password = credentials.api_password();
        let params = [
            ("grant_type", "password"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("username", credentials.username.as_str()),
            ("password", api_password.as_str()),
        ];

        let response = http.post(&url).form(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(CrmError::Auth(format!("HTTP {status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CrmError::Unexpected(e.to_string()))?;

        info!(instance_url = %token.instance_url, "authenticated with Salesforce");

        Ok(Self {
            http,
            access_token: token.access_token,
            instance_url: token.instance_url,
            api_version: config.api_version.clone(),
        })
    }

    fn data_url(&self, path: &str) -> String {
        format!(
            "{}/services/data/{}/{}",
            self.instance_url.trim_end_matches('/'),
            self.api_version,
            path
        )
    }

    async fn check_status(response: Response) -> Result<Response, CrmError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = read_body(response).await;
        warn!(%status, %body, "Salesforce API error");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CrmError::Auth(format!("HTTP {status}: {body}")));
        }
        Err(CrmError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

async fn read_body(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_string())
}

#[async_trait]
impl CrmClient for SalesforceClient {
    async fn resolve_converted_status(&self) -> Result<String, CrmError> {
        let response = self
            .http
            .get(self.data_url("query"))
            .bearer_auth(&self.access_token)
            .query(&[("q", STATUS_SOQL)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let body: LeadStatusQueryResponse = response
            .json()
            .await
            .map_err(|e| CrmError::Unexpected(e.to_string()))?;

        let label = body
            .records
            .into_iter()
            .next()
            .map_or_else(|| DEFAULT_CONVERTED_STATUS.to_string(), |r| r.master_label);

        debug!(%label, "resolved converted lead status");
        Ok(label)
    }

    async fn convert_lead(
        &self,
        lead_id: &str,
        converted_status: &str,
        create_opportunity: bool,
    ) -> Result<ConvertLeadResult, CrmError> {
        let request = ConvertLeadRequest {
            inputs: vec![ConvertLeadInput {
                lead_id,
                converted_status,
                do_not_create_opportunity: !create_opportunity,
            }],
        };

        let response = self
            .http
            .post(self.data_url("actions/standard/convertLead"))
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let mut results: Vec<ConvertLeadActionResult> = response
            .json()
            .await
            .map_err(|e| CrmError::Unexpected(e.to_string()))?;

        if results.is_empty() {
            return Err(CrmError::Unexpected(
                "empty convertLead action response".to_string(),
            ));
        }
        Ok(results.remove(0).into())
    }
}
