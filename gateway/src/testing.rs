//! Scripted transport for gateway tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::query::RestRequest;
use crate::service::Gateway;
use crate::transport::{RestResponse, Transport};

/// Records every request and replies from a queue of scripted responses.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    requests: Rc<RefCell<Vec<RestRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<RestResponse, GatewayError>>>>,
}

impl RecordingTransport {
    pub(crate) fn reply(&self, status: u16, body: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(RestResponse::new(status, body)));
        self
    }

    pub(crate) fn fail(&self, error: GatewayError) -> &Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<RestRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, GatewayError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Transport("no scripted response".into())))
    }
}

pub(crate) fn config() -> GatewayConfig {
    GatewayConfig::new("https://demo.example.co", "anon-key")
}

pub(crate) fn gateway() -> (Gateway<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::default();
    (Gateway::new(config(), transport.clone()), transport)
}
