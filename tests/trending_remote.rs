mod support;

use std::time::Duration;

use marquee::trending::term_document_id;
use marquee::{MovieSnapshot, RemoteStoreConfig, RemoteTrendingStore, TrendingError, TrendingStore};
use serde_json::{Value, json};
use support::{CannedResponse, FakeServer, RecordedRequest};

const DOCUMENTS: &str = "/v1/databases/db/collections/metrics/documents";

fn store(server: &FakeServer, api_key: Option<&str>) -> RemoteTrendingStore {
	RemoteTrendingStore::new(&RemoteStoreConfig {
		endpoint: format!("{}/v1", server.base_url()),
		project: "marquee".to_string(),
		database: "db".to_string(),
		collection: "metrics".to_string(),
		api_key: api_key.map(str::to_string),
		timeout: Duration::from_secs(5),
	})
	.unwrap()
}

fn snapshot(movie_id: u64, title: &str) -> MovieSnapshot {
	MovieSnapshot {
		movie_id,
		title: title.to_string(),
		poster_url: format!("https://image.tmdb.org/t/p/w500/{movie_id}.jpg"),
	}
}

fn document(id: &str, term: &str, count: u64, movie_id: u64) -> Value {
	json!({
		"$id": id,
		"$collectionId": "metrics",
		"searchTerm": term,
		"count": count,
		"movie_id": movie_id,
		"title": format!("Movie {movie_id}"),
		"poster_url": "",
	})
}

fn empty_list() -> CannedResponse {
	CannedResponse::json(200, json!({"total": 0, "documents": []}))
}

fn queries(request: &RecordedRequest) -> Vec<Value> {
	request
		.query_pairs()
		.into_iter()
		.filter(|(key, _)| key == "queries[]")
		.map(|(_, value)| serde_json::from_str(&value).unwrap())
		.collect()
}

#[test]
fn first_search_creates_record_under_deterministic_id() {
	let server = FakeServer::start(|request| match request.method.as_str() {
		"GET" => empty_list(),
		"POST" => {
			let body = request.json();
			CannedResponse::json(
				201,
				document(body["documentId"].as_str().unwrap(), "batman", 1, 268),
			)
		}
		_ => CannedResponse::raw(404, ""),
	});

	let record = store(&server, Some("key-123"))
		.increment("batman", &snapshot(268, "Batman"))
		.unwrap();
	assert_eq!(record.count, 1);
	assert_eq!(record.id, term_document_id("batman"));

	let requests = server.requests();
	assert_eq!(requests.len(), 2);

	let lookup = &requests[0];
	assert_eq!(lookup.path(), DOCUMENTS);
	assert_eq!(
		queries(lookup),
		vec![
			json!({"method": "equal", "attribute": "searchTerm", "values": ["batman"]}),
			json!({"method": "limit", "values": [1]}),
		]
	);
	assert_eq!(lookup.header("x-appwrite-project"), Some("marquee"));
	assert_eq!(lookup.header("x-appwrite-key"), Some("key-123"));

	let create = &requests[1];
	assert_eq!(create.method, "POST");
	assert_eq!(create.path(), DOCUMENTS);
	let body = create.json();
	assert_eq!(body["documentId"], term_document_id("batman"));
	assert_eq!(body["data"]["searchTerm"], "batman");
	assert_eq!(body["data"]["count"], 1);
	assert_eq!(body["data"]["movie_id"], 268);
	assert_eq!(body["data"]["poster_url"], "https://image.tmdb.org/t/p/w500/268.jpg");
}

#[test]
fn repeat_search_increments_and_refreshes_snapshot() {
	let server = FakeServer::start(|request| match (request.method.as_str(), request.path()) {
		("GET", _) => CannedResponse::json(
			200,
			json!({"total": 1, "documents": [document("doc-1", "batman", 1, 268)]}),
		),
		("PATCH", path) if path.ends_with("/count/increment") => {
			CannedResponse::json(200, document("doc-1", "batman", 2, 268))
		}
		("PATCH", _) => CannedResponse::json(200, document("doc-1", "batman", 2, 414906)),
		_ => CannedResponse::raw(404, ""),
	});

	let record = store(&server, None)
		.increment("batman", &snapshot(414906, "The Batman"))
		.unwrap();
	assert_eq!(record.count, 2);
	assert_eq!(record.movie_id, Some(414906));

	let requests = server.requests();
	assert_eq!(requests.len(), 3);
	assert!(requests[0].header("x-appwrite-key").is_none());

	let increment = &requests[1];
	assert_eq!(increment.method, "PATCH");
	assert_eq!(increment.path(), format!("{DOCUMENTS}/doc-1/count/increment"));
	assert_eq!(increment.json(), json!({"value": 1}));

	let update = &requests[2];
	assert_eq!(update.method, "PATCH");
	assert_eq!(update.path(), format!("{DOCUMENTS}/doc-1"));
	assert_eq!(update.json()["data"]["movie_id"], 414906);
	assert_eq!(update.json()["data"]["title"], "The Batman");
}

#[test]
fn creation_race_falls_back_to_increment() {
	let id = term_document_id("dune");
	let server = {
		let id = id.clone();
		FakeServer::start(move |request| match (request.method.as_str(), request.path()) {
			("GET", path) if path == DOCUMENTS => empty_list(),
			("GET", _) => CannedResponse::json(200, document(&id, "dune", 1, 438631)),
			("POST", _) => CannedResponse::json(
				409,
				json!({"message": "Document with the requested ID already exists.", "code": 409}),
			),
			("PATCH", _) => CannedResponse::json(200, document(&id, "dune", 2, 438631)),
			_ => CannedResponse::raw(404, ""),
		})
	};

	let record = store(&server, None)
		.increment("dune", &snapshot(438631, "Dune"))
		.unwrap();
	assert_eq!(record.count, 2);

	let methods: Vec<String> = server
		.requests()
		.iter()
		.map(|request| format!("{} {}", request.method, request.path()))
		.collect();
	assert_eq!(
		methods,
		vec![
			format!("GET {DOCUMENTS}"),
			format!("POST {DOCUMENTS}"),
			format!("GET {DOCUMENTS}/{id}"),
			format!("PATCH {DOCUMENTS}/{id}/count/increment"),
			format!("PATCH {DOCUMENTS}/{id}"),
		]
	);
}

#[test]
fn id_collision_with_other_term_creates_generated_id() {
	let id = term_document_id("heat");
	let server = {
		let id = id.clone();
		FakeServer::start(move |request| match (request.method.as_str(), request.path()) {
			("GET", path) if path == DOCUMENTS => empty_list(),
			("GET", _) => CannedResponse::json(200, document(&id, "something else", 9, 1)),
			("POST", _) if request.json()["documentId"] == "unique()" => {
				CannedResponse::json(201, document("generated-1", "heat", 1, 949))
			}
			("POST", _) => CannedResponse::json(409, json!({"message": "exists"})),
			_ => CannedResponse::raw(404, ""),
		})
	};

	let record = store(&server, None)
		.increment("heat", &snapshot(949, "Heat"))
		.unwrap();
	assert_eq!(record.id, "generated-1");
	assert_eq!(record.search_term, "heat");
	assert_eq!(server.requests().len(), 4);
}

#[test]
fn top_orders_by_count_with_limit() {
	let server = FakeServer::start(|_| {
		CannedResponse::json(
			200,
			json!({"total": 2, "documents": [
				document("a", "dune", 5, 438631),
				document("b", "batman", 3, 268),
			]}),
		)
	});

	let records = store(&server, None).top(5).unwrap();
	let terms: Vec<&str> = records.iter().map(|record| record.search_term.as_str()).collect();
	assert_eq!(terms, vec!["dune", "batman"]);

	let request = &server.requests()[0];
	assert_eq!(request.method, "GET");
	assert_eq!(
		queries(request),
		vec![
			json!({"method": "orderDesc", "attribute": "count", "values": []}),
			json!({"method": "limit", "values": [5]}),
		]
	);
}

#[test]
fn error_responses_carry_store_message() {
	let server = FakeServer::start(|_| {
		CannedResponse::json(
			401,
			json!({"message": "The current user is not authorized to perform the requested action.", "code": 401}),
		)
	});

	let err = store(&server, None).top(5).unwrap_err();
	match err {
		TrendingError::Status { status, message } => {
			assert_eq!(status, 401);
			assert!(message.starts_with("The current user is not authorized"));
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn non_json_error_body_is_kept_verbatim() {
	let server = FakeServer::start(|_| CannedResponse::raw(503, "upstream unavailable"));
	let err = store(&server, None)
		.increment("alien", &snapshot(348, "Alien"))
		.unwrap_err();
	assert_eq!(
		err.to_string(),
		TrendingError::Status {
			status: 503,
			message: "upstream unavailable".to_string(),
		}
		.to_string()
	);
}
