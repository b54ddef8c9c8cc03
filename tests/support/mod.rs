//! Loopback HTTP server answering with canned responses.
//!
//! The server runs on its own tokio runtime so the blocking clients under test
//! can call it from the test thread. Every request is recorded in arrival
//! order.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: String,
	/// Path including the raw query string.
	pub target: String,
	/// Header names are lowercased.
	pub headers: HashMap<String, String>,
	pub body: String,
}

impl RecordedRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
	}

	pub fn path(&self) -> &str {
		self.target.split('?').next().unwrap_or_default()
	}

	/// Decoded query parameters in order.
	pub fn query_pairs(&self) -> Vec<(String, String)> {
		let url = reqwest::Url::parse(&format!("http://loopback{}", self.target)).unwrap();
		url.query_pairs()
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect()
	}

	pub fn json(&self) -> serde_json::Value {
		serde_json::from_str(&self.body).unwrap()
	}
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
	pub status: u16,
	pub body: String,
}

impl CannedResponse {
	pub fn json(status: u16, body: serde_json::Value) -> Self {
		Self {
			status,
			body: body.to_string(),
		}
	}

	pub fn raw(status: u16, body: &str) -> Self {
		Self {
			status,
			body: body.to_string(),
		}
	}
}

impl IntoResponse for CannedResponse {
	fn into_response(self) -> Response {
		let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		(status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
	}
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> CannedResponse + Send + Sync>;

#[derive(Clone)]
struct ServerState {
	respond: Responder,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct FakeServer {
	base_url: String,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
	shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeServer {
	/// Bind to an ephemeral loopback port and answer every request with
	/// `respond`.
	pub fn start(
		respond: impl Fn(&RecordedRequest) -> CannedResponse + Send + Sync + 'static,
	) -> Self {
		let requests = Arc::new(Mutex::new(Vec::new()));
		let state = ServerState {
			respond: Arc::new(respond),
			requests: Arc::clone(&requests),
		};
		let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
		let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

		thread::spawn(move || {
			let runtime = tokio::runtime::Builder::new_multi_thread()
				.worker_threads(1)
				.enable_all()
				.build()
				.expect("build test server runtime");
			runtime.block_on(async move {
				let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
					.await
					.expect("bind listener");
				addr_tx
					.send(listener.local_addr().expect("listener addr"))
					.expect("report listener addr");

				let app = Router::new().fallback(record).with_state(state);
				axum::serve(listener, app)
					.with_graceful_shutdown(async move {
						let _ = shutdown_rx.await;
					})
					.await
					.expect("serve test server");
			});
		});

		let addr = addr_rx.recv().expect("test server started");
		Self {
			base_url: format!("http://{addr}"),
			requests,
			shutdown_tx: Some(shutdown_tx),
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().unwrap().clone()
	}
}

impl Drop for FakeServer {
	fn drop(&mut self) {
		if let Some(tx) = self.shutdown_tx.take() {
			let _ = tx.send(());
		}
	}
}

async fn record(
	State(state): State<ServerState>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Bytes,
) -> CannedResponse {
	let request = RecordedRequest {
		method: method.to_string(),
		target: uri
			.path_and_query()
			.map_or_else(|| uri.path().to_string(), ToString::to_string),
		headers: headers
			.iter()
			.filter_map(|(name, value)| {
				value
					.to_str()
					.ok()
					.map(|value| (name.as_str().to_string(), value.to_string()))
			})
			.collect(),
		body: String::from_utf8_lossy(&body).into_owned(),
	};
	let response = (state.respond)(&request);
	state.requests.lock().unwrap().push(request);
	response
}
