use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use bootstrap_payloads::generate::GenerateResponse;
use bootstrap_payloads::SubmitRequest;

use crate::error::{BootstrapError, RequestError};
use crate::Config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How much of an error body ends up in logs and errors.
const LOGGABLE_BODY: usize = 1024;

const BEARER: &str = "Bearer ";

/// Where to submit, and with which token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub webhook_url: String,
    pub access_token: String,
}

fn loggable(body: &str) -> &str {
    let mut end = body.len().min(LOGGABLE_BODY);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

fn post_json<T: Serialize>(
    client: &Client,
    url: &str,
    payload: &T,
    authorization: Option<&str>,
) -> Result<String, RequestError> {
    let serialized = serde_json::to_string(payload)?;

    let mut req = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(serialized)
        .timeout(REQUEST_TIMEOUT);
    if let Some(auth) = authorization {
        req = req.header(AUTHORIZATION, auth);
    }

    let resp = req.send()?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_else(|e| {
            log::warn!("Error reading body from server: {:?}", e);
            String::from("Unable to print body")
        });
        let body = loggable(&body).to_string();

        log::warn!(
            "Got non-2xx status from {}: {} {}",
            url,
            status.as_u16(),
            body
        );
        return Err(RequestError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(resp.text()?)
}

/// Prefer the webhook handed out by the server unless it is blank.
pub fn resolve_webhook(webhook: Option<&str>, fallback: &str) -> String {
    match webhook {
        Some(w) if !w.trim().is_empty() => w.to_string(),
        _ => fallback.to_string(),
    }
}

/// Value of the `Authorization` header for `token`, never prefixed twice.
pub fn authorization_header(token: &str) -> String {
    if token.starts_with(BEARER) {
        token.to_string()
    } else {
        format!("{}{}", BEARER, token)
    }
}

fn acquire_fallible(
    client: &Client,
    config: &Config,
) -> Result<(Option<String>, String), RequestError> {
    let body = post_json(client, config.generate_url.as_str(), &config.identity, None)?;
    let resp: GenerateResponse = serde_json::from_str(&body)?;
    let token = resp.access_token.ok_or(RequestError::MissingAccessToken)?;
    Ok((resp.webhook, token))
}

/// Exchange the configured identity for a webhook and access token.
pub fn acquire_grant(client: &Client, config: &Config) -> Result<Grant, BootstrapError> {
    let (webhook, access_token) = acquire_fallible(client, config).map_err(|e| {
        log::error!("Webhook generation failed: {}", e);
        BootstrapError::Acquisition(e)
    })?;

    let webhook_url = resolve_webhook(webhook.as_deref(), config.fallback_submit_url.as_str());
    log::info!("Received webhook url: {}", webhook_url);

    Ok(Grant {
        webhook_url,
        access_token,
    })
}

/// Submit the final query and hand back whatever the server said.
pub fn submit(
    client: &Client,
    grant: &Grant,
    final_query: String,
) -> Result<String, BootstrapError> {
    let payload = SubmitRequest { final_query };
    let auth = authorization_header(&grant.access_token);

    post_json(client, &grant.webhook_url, &payload, Some(&auth)).map_err(|source| {
        log::error!("Submission to {} failed: {}", grant.webhook_url, source);
        BootstrapError::Submission {
            url: grant.webhook_url.clone(),
            source,
        }
    })
}
