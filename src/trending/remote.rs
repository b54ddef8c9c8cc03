use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{MovieSnapshot, TrendingError, TrendingRecord, TrendingStore};
use crate::config::RemoteStoreConfig;

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";
const COUNT_ATTRIBUTE: &str = "count";
const TERM_ATTRIBUTE: &str = "searchTerm";
/// Asks the store to generate an identifier.
const GENERATED_ID: &str = "unique()";

/// Trending tallies kept in an Appwrite-compatible document collection.
pub struct RemoteTrendingStore {
	client: Client,
	documents_url: String,
	project: String,
	api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
	#[serde(default)]
	documents: Vec<TrendingRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
	#[serde(default)]
	message: String,
}

impl RemoteTrendingStore {
	pub fn new(config: &RemoteStoreConfig) -> Result<Self, TrendingError> {
		let documents_url = format!(
			"{}/databases/{}/collections/{}/documents",
			config.endpoint.trim_end_matches('/'),
			config.database,
			config.collection
		);
		Url::parse(&documents_url).map_err(|err| TrendingError::InvalidUrl {
			url: documents_url.clone(),
			reason: err.to_string(),
		})?;

		let client = Client::builder().timeout(config.timeout).build()?;
		Ok(Self {
			client,
			documents_url,
			project: config.project.clone(),
			api_key: config.api_key.clone(),
		})
	}

	#[must_use]
	pub fn documents_url(&self) -> &str {
		&self.documents_url
	}

	fn find(&self, term: &str) -> Result<Option<TrendingRecord>, TrendingError> {
		let queries = [
			query("equal", TERM_ATTRIBUTE, json!([term])),
			limit_query(1),
		];
		let list: DocumentList = self.list(&queries)?;
		Ok(list.documents.into_iter().next())
	}

	fn get(&self, id: &str) -> Result<TrendingRecord, TrendingError> {
		let url = format!("{}/{id}", self.documents_url);
		read_json(self.request(self.client.get(url)).send()?)
	}

	fn create(
		&self,
		document_id: &str,
		term: &str,
		snapshot: &MovieSnapshot,
	) -> Result<TrendingRecord, TrendingError> {
		let body = json!({
			"documentId": document_id,
			"data": {
				TERM_ATTRIBUTE: term,
				COUNT_ATTRIBUTE: 1,
				"movie_id": snapshot.movie_id,
				"title": snapshot.title,
				"poster_url": snapshot.poster_url,
			},
		});
		let request = self.client.post(&self.documents_url).json(&body);
		read_json(self.request(request).send()?)
	}

	/// Atomically add one to the counter, then overwrite the snapshot.
	fn bump(&self, id: &str, snapshot: &MovieSnapshot) -> Result<TrendingRecord, TrendingError> {
		let increment_url = format!("{}/{id}/{COUNT_ATTRIBUTE}/increment", self.documents_url);
		let request = self.client.patch(increment_url).json(&json!({ "value": 1 }));
		let _: TrendingRecord = read_json(self.request(request).send()?)?;

		let update_url = format!("{}/{id}", self.documents_url);
		let body = json!({
			"data": {
				"movie_id": snapshot.movie_id,
				"title": snapshot.title,
				"poster_url": snapshot.poster_url,
			},
		});
		let request = self.client.patch(update_url).json(&body);
		read_json(self.request(request).send()?)
	}

	fn list(&self, queries: &[Value]) -> Result<DocumentList, TrendingError> {
		let mut url = Url::parse(&self.documents_url).map_err(|err| TrendingError::InvalidUrl {
			url: self.documents_url.clone(),
			reason: err.to_string(),
		})?;
		{
			let mut pairs = url.query_pairs_mut();
			for query in queries {
				pairs.append_pair("queries[]", &query.to_string());
			}
		}
		read_json(self.request(self.client.get(url)).send()?)
	}

	fn request(&self, request: RequestBuilder) -> RequestBuilder {
		let request = request
			.header(ACCEPT, "application/json")
			.header(PROJECT_HEADER, &self.project);
		match &self.api_key {
			Some(key) => request.header(KEY_HEADER, key),
			None => request,
		}
	}
}

impl TrendingStore for RemoteTrendingStore {
	fn increment(
		&self,
		term: &str,
		snapshot: &MovieSnapshot,
	) -> Result<TrendingRecord, TrendingError> {
		if let Some(existing) = self.find(term)? {
			return self.bump(&existing.id, snapshot);
		}

		let document_id = term_document_id(term);
		match self.create(&document_id, term, snapshot) {
			Ok(record) => Ok(record),
			Err(err) if err.is_conflict() => {
				// Another writer created the record first, or a different term
				// hashed to the same id.
				let existing = self.get(&document_id)?;
				if existing.search_term == term {
					log::debug!("lost creation race for '{term}', incrementing instead");
					self.bump(&existing.id, snapshot)
				} else {
					log::warn!(
						"document id {document_id} already holds '{}'; creating '{term}' under a generated id",
						existing.search_term
					);
					self.create(GENERATED_ID, term, snapshot)
				}
			}
			Err(err) => Err(err),
		}
	}

	fn top(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingError> {
		let queries = [
			query("orderDesc", COUNT_ATTRIBUTE, json!([])),
			limit_query(limit),
		];
		Ok(self.list(&queries)?.documents)
	}
}

/// Deterministic document id for `term`, so concurrent first writers collide
/// instead of creating duplicate records.
#[must_use]
pub fn term_document_id(term: &str) -> String {
	const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
	const PRIME: u64 = 0x0000_0100_0000_01b3;
	let hash = term
		.bytes()
		.fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME));
	format!("term-{hash:016x}")
}

fn query(method: &str, attribute: &str, values: Value) -> Value {
	json!({ "method": method, "attribute": attribute, "values": values })
}

fn limit_query(limit: usize) -> Value {
	json!({ "method": "limit", "values": [limit] })
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, TrendingError> {
	let status = response.status();
	let body = response.text()?;
	if !status.is_success() {
		let message = serde_json::from_str::<ErrorBody>(&body)
			.map(|error| error.message)
			.ok()
			.filter(|message| !message.is_empty())
			.unwrap_or(body);
		return Err(TrendingError::Status {
			status: status.as_u16(),
			message,
		});
	}
	Ok(serde_json::from_str(&body)?)
}
