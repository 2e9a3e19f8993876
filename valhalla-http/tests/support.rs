//! In-process HTTP server standing in for a Valhalla service.

use std::collections::BTreeMap;
use std::future::IntoFuture;
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, mpsc};
use std::thread::JoinHandle;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::sync::oneshot;

/// A request as seen by the stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lower case.
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|err| panic!("request body is not JSON: {err}"))
    }
}

/// Status, content type and body returned for a request.
pub type Reply = (u16, &'static str, String);

type Responder = dyn Fn(&RecordedRequest) -> Reply + Send + Sync;

struct Shared {
    responder: Box<Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Stub server bound to an ephemeral port on the loopback interface.
///
/// The server runs on its own thread and Tokio runtime so the blocking
/// client under test can call it from plain test threads.
pub struct StubServer {
    addr: SocketAddr,
    shared: Arc<Shared>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Answer every request with `status` and a JSON `body`.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::with_responder(move |_| (status, "application/json", body.clone()))
    }

    /// Answer every request with `status` and a plain-text `body`.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::with_responder(move |_| (status, "text/plain", body.clone()))
    }

    /// Answer each request with the reply computed by `responder`.
    pub fn with_responder(
        responder: impl Fn(&RecordedRequest) -> Reply + Send + Sync + 'static,
    ) -> Self {
        let shared = Arc::new(Shared {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        });
        let state = Arc::clone(&shared);
        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub server runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub server");
                addr_tx
                    .send(listener.local_addr().expect("stub server address"))
                    .expect("publish stub server address");
                let app = Router::new().fallback(handle).with_state(state);
                tokio::select! {
                    result = axum::serve(listener, app).into_future() => {
                        result.expect("stub server failed");
                    }
                    _ = shutdown_rx => {}
                }
            });
        });

        let addr = addr_rx.recv().expect("stub server did not start");
        Self {
            addr,
            shared,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared
            .requests
            .lock()
            .expect("request log poisoned")
            .clone()
    }

    /// The only request received.
    pub fn single_request(&self) -> RecordedRequest {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_owned(),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    value.to_str().unwrap_or_default().to_owned(),
                )
            })
            .collect(),
        body: body.to_vec(),
    };
    let (status, content_type, reply) = (shared.responder)(&recorded);
    shared
        .requests
        .lock()
        .expect("request log poisoned")
        .push(recorded);
    let status = StatusCode::from_u16(status).expect("valid status code");
    (status, [(header::CONTENT_TYPE, content_type)], reply).into_response()
}

/// Endpoint on the loopback interface where nothing is listening.
pub fn closed_endpoint() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("reserved address");
    drop(listener);
    format!("http://{addr}")
}

/// Directory containing the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read a fixture file into a string.
pub fn fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture {path:?}: {err}"))
}
