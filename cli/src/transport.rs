//! `reqwest` transport for running gateway calls from the command line.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use gateway::query::{Method, RestRequest};
use gateway::{GatewayError, RestResponse, Transport};

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn build(client: &reqwest::Client, request: &RestRequest) -> reqwest::RequestBuilder {
    let mut builder = client
        .request(to_reqwest(request.method), &request.url)
        .query(&request.query);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }
    builder
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, GatewayError> {
        let response = build(&self.client, &request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(RestResponse::new(status, body))
    }
}
