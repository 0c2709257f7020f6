use serde_json::json;
use ureq::config::Config;
use ureq::http::Response;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::{Agent, Body, RequestBuilder};
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::constants::{headers, paths};

use super::client::{ClientError, RemoteClient};

#[derive(Debug)]
struct Session {
    token: String,
    uri: Option<String>,
}

/// Blocking Redfish client over HTTP(S)
pub struct HttpClient {
    agent: Agent,
    base_url: Url,
    session: Option<Session>,
}

fn get_ureq_agent(config: &ClientConfig) -> Agent {
    let tls = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .disable_verification(config.insecure)
        .build();
    let agent_config = Config::builder()
        .timeout_global(Some(config.timeout))
        .tls_config(tls)
        .build();
    Agent::new_with_config(agent_config)
}

fn map_err(uri: &str, err: ureq::Error) -> ClientError {
    match err {
        ureq::Error::StatusCode(status) => ClientError::Status {
            uri: uri.to_string(),
            status,
        },
        e => ClientError::Http(e),
    }
}

fn header_value(resp: &Response<Body>, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

impl HttpClient {
    /// Create an unauthenticated client
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(HttpClient {
            agent: get_ureq_agent(config),
            base_url: Url::parse(&config.endpoint)?,
            session: None,
        })
    }

    /// Create a client and, if credentials are configured, open a session
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut client = Self::new(config)?;
        if let Some(credentials) = &config.credentials {
            client.session = Some(client.login(credentials)?);
        }
        Ok(client)
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        log::debug!(
            "Creating session on {} for user {}",
            self.base_url,
            credentials.username
        );
        let url = self.base_url.join(paths::SESSIONS)?;
        let resp = self
            .agent
            .post(url.as_str())
            .header(headers::ODATA_VERSION, headers::ODATA_VERSION_VALUE)
            .send_json(json!({
                "UserName": credentials.username,
                "Password": credentials.password,
            }))
            .map_err(|e| map_err(paths::SESSIONS, e))?;

        let token = header_value(&resp, headers::AUTH_TOKEN)
            .ok_or(ClientError::MissingHeader(headers::AUTH_TOKEN))?;
        let uri = header_value(&resp, headers::LOCATION);
        if uri.is_none() {
            log::warn!("Session created without a Location header; logout will be a no-op");
        }
        Ok(Session { token, uri })
    }

    /// Close the session, if one was opened
    pub fn logout(self) -> Result<(), ClientError> {
        let Some(Session { uri: Some(uri), .. }) = &self.session else {
            return Ok(());
        };
        log::debug!("Deleting session {uri}");
        let url = self.resolve(uri)?;
        self.authorize(self.agent.delete(url.as_str()))
            .call()
            .map_err(|e| map_err(uri, e))?;
        Ok(())
    }

    /// Absolute URL for `uri`. Fragments address members embedded in a parent
    /// document and are not sent.
    fn resolve(&self, uri: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.join(uri)?;
        url.set_fragment(None);
        Ok(url)
    }

    fn authorize<B>(&self, req: RequestBuilder<B>) -> RequestBuilder<B> {
        let req = req.header(headers::ODATA_VERSION, headers::ODATA_VERSION_VALUE);
        match &self.session {
            Some(session) => req.header(headers::AUTH_TOKEN, session.token.as_str()),
            None => req,
        }
    }
}

impl RemoteClient for HttpClient {
    fn get(&self, uri: &str) -> Result<Vec<u8>, ClientError> {
        let url = self.resolve(uri)?;
        log::debug!("GET {url}");
        let mut resp = self
            .authorize(self.agent.get(url.as_str()))
            .header("Accept", headers::JSON_CONTENT_TYPE)
            .call()
            .map_err(|e| map_err(uri, e))?;
        resp.body_mut().read_to_vec().map_err(Into::into)
    }

    fn patch(&self, uri: &str, payload: &[u8]) -> Result<(), ClientError> {
        let url = self.resolve(uri)?;
        log::debug!("PATCH {url} ({} bytes)", payload.len());
        self.authorize(self.agent.patch(url.as_str()))
            .header("Content-Type", headers::JSON_CONTENT_TYPE)
            .send(payload)
            .map_err(|e| map_err(uri, e))?;
        Ok(())
    }
}
