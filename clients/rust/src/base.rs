use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    NotFound,
    InternalError,
    UnexpectedStatusCode,
}

#[derive(Debug, Clone)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
        }
    }

    fn get_api_url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }

    async fn handle_api_response<T: DeserializeOwned>(
        &self,
        res: Result<Response, reqwest::Error>,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = res.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;

        let status = res.status();
        if status != expected_status_code {
            let variant = match status {
                StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
                StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
                StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalError,
                _ => APIErrorVariant::UnexpectedStatusCode,
            };
            let message = res.text().await.unwrap_or_default();
            return Err(APIError { variant, message });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.client.get(&self.get_api_url(&path)).send().await;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .post(&self.get_api_url(&path))
            .json(&body)
            .send()
            .await;
        self.handle_api_response(res, expected_status_code).await
    }
}
