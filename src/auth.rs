use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

const AUTHORIZE_URL: &str = "https://www.dropbox.com/oauth2/authorize";
const TOKEN_URL: &str = "https://api.dropbox.com/oauth2/token";

pub const SAVE_THIS_KEY: &str = "⚠️ GUARDA ESTO";
pub const SAVE_THIS_NOTICE: &str = "Copia el refresh_token y úsalo en el script final";

#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
struct TokenResponse {
    refresh_token: Option<String>,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct ExchangeResult {
    #[serde(rename = "⚠️ GUARDA ESTO")]
    pub notice: &'static str,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RemoteExchangeError {
    pub body: String,
}

impl fmt::Display for RemoteExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.body)
    }
}

impl Error for RemoteExchangeError {}

pub fn authorize_url(app_key: &str) -> String {
    // token_access_type=offline is what makes Dropbox hand back a refresh token
    format!(
        "{}?client_id={}&response_type=code&token_access_type=offline",
        AUTHORIZE_URL, app_key
    )
}

pub async fn exchange(
    code: &str,
    app_key: &str,
    app_secret: &str,
) -> Result<ExchangeResult, Box<dyn Error>> {
    exchange_at(TOKEN_URL, code, app_key, app_secret).await
}

pub(crate) async fn exchange_at(
    token_url: &str,
    code: &str,
    app_key: &str,
    app_secret: &str,
) -> Result<ExchangeResult, Box<dyn Error>> {
    let mut data = HashMap::new();
    data.insert("code", code);
    data.insert("grant_type", "authorization_code");
    data.insert("client_id", app_key);
    data.insert("client_secret", app_secret);

    debug!("POST {}", token_url);
    let response = reqwest::Client::new()
        .post(token_url)
        .form(&data)
        .send()
        .await?;

    if response.status() != reqwest::StatusCode::OK {
        let body = response.text().await?;
        return Err(RemoteExchangeError { body }.into());
    }

    let token: TokenResponse = response.json().await?;
    debug!(
        "token endpoint answered, refresh_token present: {}",
        token.refresh_token.is_some()
    );

    Ok(ExchangeResult {
        notice: SAVE_THIS_NOTICE,
        refresh_token: token.refresh_token,
    })
}
