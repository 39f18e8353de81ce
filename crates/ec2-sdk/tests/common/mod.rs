use async_trait::async_trait;
use ec2_sdk::{Ec2Client, Ec2Config, Ec2Error, Ec2Result, HttpRequest, HttpResponse, Region, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn with_responses(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Ec2Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Ec2Error::Transport("no canned response left".to_string()))
    }
}

pub fn client(transport: &Arc<MockTransport>) -> Ec2Client<Arc<MockTransport>> {
    Ec2Client::new(Ec2Config::new(Region::new("us-east-1")), Arc::clone(transport))
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse::new(200, body)
}
