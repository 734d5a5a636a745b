//! OAuth authorization-URL construction
//!
//! Builds the redirect URL for the authorization-code flow. Providers differ
//! only in endpoint, parameter spelling (`client_id` vs `app_id`), and scope;
//! everything past the redirect (code exchange, tokens) is the backend's job.

use crate::error::AuthError;

/// An OAuth provider's authorization-endpoint configuration.
///
/// Values come from the surrounding application's config layer; this type
/// only checks presence and assembles the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OauthProvider {
    authorize_endpoint: String,
    id_param: String,
    client_id: String,
    redirect_uri: String,
    scope: Option<String>,
    extra_params: Vec<(String, String)>,
}

impl OauthProvider {
    /// Provider using the standard `client_id` parameter.
    #[must_use]
    pub fn new(
        authorize_endpoint: impl Into<String>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            authorize_endpoint: authorize_endpoint.into(),
            id_param: "client_id".to_string(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            scope: None,
            extra_params: Vec::new(),
        }
    }

    /// Provider spelling its id parameter `app_id` (Feishu does this).
    #[must_use]
    pub fn with_app_id(
        authorize_endpoint: impl Into<String>,
        app_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        let mut provider = Self::new(authorize_endpoint, app_id, redirect_uri);
        provider.id_param = "app_id".to_string();
        provider
    }

    /// Set the authorization scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Append a provider-specific query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((key.into(), value.into()));
        self
    }

    /// Whether endpoint, client id, and redirect URI are all present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.authorize_endpoint.is_empty()
            && !self.client_id.is_empty()
            && !self.redirect_uri.is_empty()
    }

    /// Build the authorization redirect URL.
    ///
    /// `state` is the caller's CSRF token and appears only when supplied.
    /// Empty parameter values are omitted from the query string.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotConfigured`] when any required field is blank.
    pub fn authorization_url(&self, state: Option<&str>) -> Result<String, AuthError> {
        if !self.is_configured() {
            tracing::warn!("oauth provider incomplete, login unavailable");
            return Err(AuthError::NotConfigured);
        }

        let mut params: Vec<(&str, &str)> = vec![
            (self.id_param.as_str(), self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("response_type", "code"),
        ];
        if let Some(scope) = &self.scope {
            params.push(("scope", scope.as_str()));
        }
        for (key, value) in &self.extra_params {
            params.push((key.as_str(), value.as_str()));
        }
        if let Some(state) = state {
            params.push(("state", state));
        }

        let query = params
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{query}", self.authorize_endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn forum_provider() -> OauthProvider {
        OauthProvider::new(
            "https://connect.example.org/oauth2/authorize",
            "abc123",
            "https://app.example.com/oauth/callback",
        )
    }

    #[test]
    fn builds_standard_authorization_url() {
        let url = forum_provider().authorization_url(Some("xsrf42")).unwrap();
        assert_eq!(
            url,
            "https://connect.example.org/oauth2/authorize?\
             client_id=abc123&\
             redirect_uri=https%3A%2F%2Fapp.example.com%2Foauth%2Fcallback&\
             response_type=code&\
             state=xsrf42"
        );
    }

    #[test]
    fn state_omitted_when_absent() {
        let url = forum_provider().authorization_url(None).unwrap();
        assert!(!url.contains("state="));
    }

    #[test]
    fn app_id_spelling() {
        let url = OauthProvider::with_app_id(
            "https://accounts.example.cn/authen/v1/authorize",
            "cli_999",
            "https://app.example.com/feishu/callback",
        )
        .scope("contact:contact.base:readonly")
        .authorization_url(None)
        .unwrap();

        assert!(url.contains("app_id=cli_999"));
        assert!(!url.contains("client_id="));
        assert!(url.contains("scope=contact%3Acontact.base%3Areadonly"));
    }

    #[test]
    fn extra_params_appended_before_state() {
        let url = forum_provider()
            .param("prompt", "consent")
            .authorization_url(Some("s"))
            .unwrap();
        let prompt_at = url.find("prompt=consent").unwrap();
        let state_at = url.find("state=s").unwrap();
        assert!(prompt_at < state_at);
    }

    #[test]
    fn empty_scope_value_omitted() {
        let url = forum_provider()
            .scope("")
            .authorization_url(None)
            .unwrap();
        assert!(!url.contains("scope="));
    }

    #[test]
    fn unconfigured_provider_errors() {
        let provider = OauthProvider::new("", "abc", "https://cb");
        assert_eq!(provider.authorization_url(None), Err(AuthError::NotConfigured));

        let provider = OauthProvider::new("https://ep", "", "https://cb");
        assert!(!provider.is_configured());
    }
}
