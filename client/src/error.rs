use std::path::PathBuf;

/// Everything that can go wrong with a single HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("server answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unable to encode or decode JSON")]
    Json(#[from] serde_json::Error),

    #[error("response carried no access token")]
    MissingAccessToken,
}

/// The run is all-or-nothing, so every variant here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("unable to acquire a webhook and access token")]
    Acquisition(#[source] RequestError),

    #[error("bundled resource `{0}` not found")]
    ResourceMissing(String),

    #[error("unable to write final query to {}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("submission to {url} failed")]
    Submission {
        url: String,
        #[source]
        source: RequestError,
    },
}
