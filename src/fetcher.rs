use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Settings;
use crate::error::ResolutionFailure;
use crate::models::SolveCounts;

const PROFILE_QUERY: &str = r#"query getUserProfile($username: String!) {
    matchedUser(username: $username) {
        username
        submitStatsGlobal {
            acSubmissionNum {
                difficulty
                count
            }
        }
    }
}"#;

/// Anything that can turn a username into solve counts.
pub trait StatsSource {
    fn fetch(&self, username: &str) -> Result<SolveCounts, ResolutionFailure>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a> {
    operation_name: &'static str,
    query: &'static str,
    variables: ProfileVariables<'a>,
}

#[derive(Serialize)]
struct ProfileVariables<'a> {
    username: &'a str,
}

#[derive(Deserialize)]
struct ProfileResponse {
    data: Option<ProfileData>,
    errors: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileData {
    matched_user: Option<MatchedUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    submit_stats_global: Option<SubmitStats>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    // Entries stay untyped: only the first four are read, and only their `count`.
    ac_submission_num: Option<Vec<Value>>,
}

pub struct LeetCodeClient {
    http: Client,
    endpoint: Url,
}

impl LeetCodeClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&settings.user_agent)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }
}

impl StatsSource for LeetCodeClient {
    fn fetch(&self, username: &str) -> Result<SolveCounts, ResolutionFailure> {
        let request = GraphqlRequest {
            operation_name: "getUserProfile",
            query: PROFILE_QUERY,
            variables: ProfileVariables { username },
        };

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .map_err(|e| ResolutionFailure::Transport(e.to_string()))?;

        let status = resp.status();
        debug!(username, %status, "profile response");
        if !status.is_success() {
            return Err(ResolutionFailure::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .map_err(|e| ResolutionFailure::Transport(e.to_string()))?;
        parse_counts(&body)
    }
}

/// Extracts counts from a `getUserProfile` response body.
///
/// Index 0 is all difficulties, then easy, medium, hard. Labels are ignored.
pub fn parse_counts(body: &str) -> Result<SolveCounts, ResolutionFailure> {
    let response: ProfileResponse =
        serde_json::from_str(body).map_err(|e| ResolutionFailure::Malformed(e.to_string()))?;

    for error in response.errors.iter().filter_map(Value::as_array).flatten() {
        let message = error.get("message").and_then(Value::as_str).unwrap_or("");
        debug!(message, "graphql error");
    }

    let data = response
        .data
        .ok_or_else(|| ResolutionFailure::Malformed("missing data".to_string()))?;
    let user = data.matched_user.ok_or(ResolutionFailure::NotFound)?;
    let stats = user
        .submit_stats_global
        .and_then(|s| s.ac_submission_num)
        .ok_or_else(|| ResolutionFailure::Malformed("missing acSubmissionNum".to_string()))?;

    if stats.len() < 4 {
        return Err(ResolutionFailure::Malformed(format!(
            "expected 4 difficulty entries, got {}",
            stats.len()
        )));
    }

    let count_at = |index: usize| -> Result<u64, ResolutionFailure> {
        stats[index]
            .get("count")
            .and_then(Value::as_u64)
            .ok_or_else(|| ResolutionFailure::Malformed(format!("no count at entry {index}")))
    };

    Ok(SolveCounts {
        total: count_at(0)?,
        easy: count_at(1)?,
        medium: count_at(2)?,
        hard: count_at(3)?,
    })
}
