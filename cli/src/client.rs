//! Thin HTTP client for the mapkeeper API.

use atlas::{Action, MapState};
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::CliError;

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MapSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Directory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub maps: Vec<MapSummary>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub async fn user(&self) -> Result<User, CliError> {
        self.request(Method::GET, "/api/user", &[], None).await
    }

    pub async fn directories(&self, user_id: &str) -> Result<Vec<Directory>, CliError> {
        self.request(Method::GET, "/api/directories", &[("userId", user_id)], None).await
    }

    pub async fn map(&self, map_id: &str) -> Result<MapState, CliError> {
        self.request(Method::GET, "/api/map", &[("id", map_id)], None).await
    }

    /// Post an action and return the map as the server left it.
    pub async fn dispatch(&self, map_id: &str, action: &Action) -> Result<MapState, CliError> {
        let body = action.to_wire()?;
        self.request(Method::POST, "/api/map/actions", &[("id", map_id)], Some(body)).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T, CliError> {
        let url = format!("{}{path}", self.base_url);
        let request = self.http.request(method, &url).query(query);
        let request = if let Some(json) = body { request.json(&json) } else { request };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(server_error(status.as_u16(), &text));
        }
        Ok(response.json::<T>().await?)
    }
}

fn server_error(status: u16, text: &str) -> CliError {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) => CliError::Server { status, code: body.code, message: body.message },
        Err(_) => CliError::Server { status, code: "E_HTTP".into(), message: text.to_owned() },
    }
}
