// API client module: a small blocking HTTP client that reads an account's
// timeline from the post service. The rest of the crate only sees the
// `PostSource` trait, which is all the report needs from the service.

use crate::error::FetchError;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// The service will not return more than this many posts in one page.
pub const MAX_POSTS: usize = 200;

const DEFAULT_API_URL: &str = "https://api.twitter.com";

/// One post as returned by the timeline endpoint. Only the id and the
/// creation time are kept; every other field in the payload is ignored.
/// Both may be absent from an entry; a missing timestamp is reported when
/// the post is classified, not while decoding.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    #[serde(rename = "id_str", default)]
    pub id: String,
    /// Raw timestamp, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Anything that can hand back the most recent posts of an account.
pub trait PostSource {
    /// Return up to `MAX_POSTS` of the account's latest posts, in the order
    /// the service gave them.
    fn recent_posts(&self, account: &str) -> Result<Vec<Post>, FetchError>;
}

/// Blocking client for the timeline endpoint. Holds the reqwest client,
/// the base URL of the service and an optional bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client for `base_url`, authenticating with `token` if given.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("twitterfreq/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(ApiClient {
            client,
            base_url,
            token,
        })
    }

    /// Create an ApiClient configured from `TWITTERFREQ_API_URL` (fallback
    /// `https://api.twitter.com`) and `TWITTER_BEARER_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("TWITTERFREQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let token = std::env::var("TWITTER_BEARER_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        Self::new(base_url, token)
    }

    /// Returns whether a bearer token will be sent.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn timeline_url(&self) -> String {
        format!("{}/1.1/statuses/user_timeline.json", self.base_url)
    }
}

impl PostSource for ApiClient {
    fn recent_posts(&self, account: &str) -> Result<Vec<Post>, FetchError> {
        let url = self.timeline_url();
        let count = MAX_POSTS.to_string();
        debug!(%url, account, authenticated = self.has_token(), "requesting timeline");

        let mut req = self.client.get(&url).query(&[
            ("screen_name", account),
            ("count", count.as_str()),
            ("trim_user", "true"),
        ]);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let res = req.send()?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().unwrap_or_default();
            warn!(status, account, "timeline request rejected");
            return Err(FetchError::Status { status, body });
        }

        let posts = decode_timeline(&res.text()?)?;
        info!(account, count = posts.len(), "fetched posts");
        Ok(posts)
    }
}

/// Parse a timeline payload, keeping at most `MAX_POSTS` entries.
pub fn decode_timeline(body: &str) -> Result<Vec<Post>, FetchError> {
    let mut posts: Vec<Post> = serde_json::from_str(body)?;
    posts.truncate(MAX_POSTS);
    Ok(posts)
}
