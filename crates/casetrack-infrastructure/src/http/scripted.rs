//! Scripted transport for tests: canned responses keyed by method and path.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::transport::{HttpRequest, HttpTransport, RawResponse, TransportError};

#[derive(Debug, Clone)]
enum Scripted {
    Respond { response: RawResponse, delay: Option<Duration> },
    Fail,
}

/// Answers requests from a route table instead of the network.
///
/// Routes match on method plus path-and-query (the origin is ignored).
/// When several responses are queued for a route they are served in order
/// and the last one repeats. Unscripted routes fail at the transport level.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Scripted>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, Some(body));
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: Option<Value>) {
        self.push(
            method,
            path,
            Scripted::Respond {
                response: RawResponse::new(status, body),
                delay: None,
            },
        );
    }

    /// Like [`respond`](Self::respond) but completes only after `delay`.
    pub fn respond_after(&self, method: Method, path: &str, delay: Duration, status: u16, body: Value) {
        self.push(
            method,
            path,
            Scripted::Respond {
                response: RawResponse::new(status, Some(body)),
                delay: Some(delay),
            },
        );
    }

    /// The request fails before any response is produced.
    pub fn fail(&self, method: Method, path: &str) {
        self.push(method, path, Scripted::Fail);
    }

    /// Requests seen so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// How many requests hit `method path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && path_of(&r.url) == path)
            .count()
    }

    fn push(&self, method: Method, path: &str, scripted: Scripted) {
        if let Ok(mut routes) = self.routes.lock() {
            routes
                .entry((method, path.to_string()))
                .or_default()
                .push_back(scripted);
        }
    }

    fn next(&self, method: &Method, path: &str) -> Option<Scripted> {
        let mut routes = self.routes.lock().ok()?;
        let queue = routes.get_mut(&(method.clone(), path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let path = path_of(&request.url).to_string();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match self.next(&request.method, &path) {
            Some(Scripted::Respond { response, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                Ok(response)
            }
            Some(Scripted::Fail) => Err(TransportError(format!("scripted failure for {path}"))),
            None => Err(TransportError(format!("no scripted response for {} {path}", request.method))),
        }
    }
}

/// `http://host:port/api/x?q=1` -> `/api/x?q=1`
fn path_of(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| &url[i + 3..]).unwrap_or(url);
    after_scheme
        .find('/')
        .map(|i| &after_scheme[i..])
        .unwrap_or("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_of() {
        assert_eq!(path_of("http://localhost:3000/api/firs/7"), "/api/firs/7");
        assert_eq!(path_of("https://x.pk/api/stations?q=lhr"), "/api/stations?q=lhr");
        assert_eq!(path_of("http://localhost:3000"), "/");
    }

    #[tokio::test]
    async fn test_queue_serves_in_order_then_repeats() {
        let transport = ScriptedTransport::new();
        transport.respond(Method::GET, "/a", 500, json!({}));
        transport.respond(Method::GET, "/a", 200, json!({"data": 1}));

        let req = HttpRequest::new(Method::GET, "http://t/a", None);
        assert_eq!(transport.send(req.clone()).await.unwrap().status, 500);
        assert_eq!(transport.send(req.clone()).await.unwrap().status, 200);
        assert_eq!(transport.send(req).await.unwrap().status, 200);
        assert_eq!(transport.count(Method::GET, "/a"), 3);
    }
}
