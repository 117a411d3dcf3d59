// Dobles de prueba para HttpClient y Notifier

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use futures::channel::oneshot;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::services::{HttpClient, HttpRequest, HttpResponse, Notifier};

type Reply = ApiResult<HttpResponse>;

pub fn test_config() -> AppConfig {
    AppConfig {
        login_url: "http://auth.test/login".to_string(),
        ..AppConfig::default()
    }
}

/// Cliente HTTP con respuestas preparadas por URL, en orden FIFO.
/// Una URL sin respuesta preparada falla como error de red.
#[derive(Default)]
pub struct ScriptedHttpClient {
    replies: RefCell<HashMap<String, VecDeque<oneshot::Receiver<Reply>>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, url: &str, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.push(url, rx);
    }

    pub fn reply_json(&self, url: &str, status: u16, body: &str) {
        self.reply(url, Ok(HttpResponse::new(status, body)));
    }

    /// Respuesta retenida: la petición queda pendiente hasta usar el sender
    pub fn hold(&self, url: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(url, rx);
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    fn push(&self, url: &str, rx: oneshot::Receiver<Reply>) {
        self.replies
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(rx);
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for ScriptedHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(req.clone());
        let next = self
            .replies
            .borrow_mut()
            .get_mut(&req.url)
            .and_then(VecDeque::pop_front);
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("reply dropped".into()))),
            None => Err(ApiError::Network(format!("connection refused: {}", req.url))),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
