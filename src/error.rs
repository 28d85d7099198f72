use thiserror::Error;

/// Failure talking to the post service. Every variant ends up as the same
/// fatal diagnostic for the user; the variant itself is only logged.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A post whose creation time could not be turned into a bucket.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Post {post_id:?} has no creation time")]
    Missing { post_id: String },

    #[error("Post {post_id:?} has an unreadable creation time {raw:?}: {source}")]
    Unreadable {
        post_id: String,
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl ClassifyError {
    /// Id of the offending post, empty if the service sent none.
    pub fn post_id(&self) -> &str {
        match self {
            ClassifyError::Missing { post_id } | ClassifyError::Unreadable { post_id, .. } => {
                post_id
            }
        }
    }
}

/// Terminal failure of one report run.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Fetching posts for {account} failed: {source}")]
    Fetch {
        account: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
