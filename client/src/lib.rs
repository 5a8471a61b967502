//! One-shot bootstrap: get a webhook and token, store the bundled query, submit it.
mod error;
mod persist;
mod resources;
mod sender;

use std::path::PathBuf;

use reqwest::blocking::Client;

pub use bootstrap_payloads::generate::GenerateRequest;
pub use error::{BootstrapError, RequestError};
pub use persist::persist;
pub use resources::{Resources, FINAL_QUERY};
pub use reqwest::Url;
pub use sender::{acquire_grant, authorization_header, resolve_webhook, submit, Grant};

/// Everything a run needs, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub identity: GenerateRequest,
    pub generate_url: Url,
    /// Used when the generation endpoint hands back a blank webhook.
    pub fallback_submit_url: Url,
    pub out_file: PathBuf,
}

#[derive(Debug)]
pub struct Outcome {
    pub webhook_url: String,
    pub saved_to: PathBuf,
    /// Raw body returned by the webhook.
    pub response: String,
}

pub fn run(config: &Config, resources: &Resources) -> Result<Outcome, BootstrapError> {
    let client = Client::new();
    run_with_client(&client, config, resources)
}

pub fn run_with_client(
    client: &Client,
    config: &Config,
    resources: &Resources,
) -> Result<Outcome, BootstrapError> {
    log::info!("Starting webhook bootstrap for {}", config.identity.reg_no);

    let grant = acquire_grant(client, config)?;
    let final_query = resources.load_final_query()?;
    let saved_to = persist(&config.out_file, &final_query)?;
    let response = submit(client, &grant, final_query)?;

    log::info!("Submission response: {}", response);
    log::info!("Done.");

    Ok(Outcome {
        webhook_url: grant.webhook_url,
        saved_to,
        response,
    })
}
