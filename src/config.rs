use anyhow::{bail, Context};
use reqwest::Url;

pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Runtime settings for one invocation, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: Url,
    pub user_agent: String,
}

impl Settings {
    pub fn new(endpoint: &str, user_agent: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid GraphQL endpoint '{endpoint}'"))?;
        let user_agent = user_agent.trim();
        if user_agent.is_empty() {
            bail!("user agent must not be empty");
        }

        Ok(Self {
            endpoint,
            user_agent: user_agent.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_leetcode() {
        let settings = Settings::new(DEFAULT_ENDPOINT, DEFAULT_USER_AGENT).unwrap();
        assert_eq!(settings.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn rejects_blank_user_agent() {
        assert!(Settings::new(DEFAULT_ENDPOINT, "   ").is_err());
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        assert!(Settings::new("not a url", DEFAULT_USER_AGENT).is_err());
    }
}
