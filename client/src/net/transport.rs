//! Browser transport for the gateway.
//!
//! Sends [`RestRequest`]s with `gloo-net` (the Fetch API) under `csr`.
//! Native builds have no network: every send reports
//! [`GatewayError::Unavailable`], which keeps pages testable on the host.

use gateway::query::RestRequest;
use gateway::{GatewayError, RestResponse, Transport};

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, GatewayError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let method = match request.method {
                gateway::query::Method::Get => Method::GET,
                gateway::query::Method::Post => Method::POST,
                gateway::query::Method::Patch => Method::PATCH,
                gateway::query::Method::Delete => Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url)
                .method(method)
                .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

            let response = built
                .send()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            Ok(RestResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(GatewayError::Unavailable)
        }
    }
}
