// In-process stand-in for the Elasticsearch REST endpoints the service calls
//
// Bound to 127.0.0.1:0 so tests can run in parallel. Documents live in
// memory as the exact JSON text they were written with; query
// evaluation covers match_all, term, range and bool.

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{head, post},
    Json, Router,
};
use company_search::core::config::Config;
use company_search::core::services::Services;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Default)]
struct MockIndex {
    mappings: Value,
    docs: BTreeMap<String, String>,
}

#[derive(Default)]
struct MockState {
    indices: HashMap<String, MockIndex>,
    next_id: u64,
    rejected_names: HashSet<String>,
    searches: Vec<Value>,
    delay: Option<Duration>,
}

impl MockState {
    fn generate_id(&mut self) -> String {
        self.next_id += 1;
        format!("mock-{:06}", self.next_id)
    }
}

type Shared = Arc<Mutex<MockState>>;

/// Running mock engine; the server stops when this is dropped
#[allow(dead_code)] // Not every test binary uses every helper
pub struct MockElasticsearch {
    pub addr: SocketAddr,
    state: Shared,
    server: JoinHandle<()>,
}

#[allow(dead_code)]
impl MockElasticsearch {
    pub async fn start() -> Self {
        let state = Shared::default();
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock engine");
        let addr = listener.local_addr().expect("Mock engine has no address");
        let app = router(Arc::clone(&state));
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock engine crashed");
        });

        Self {
            addr,
            state,
            server,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Config pointing at this engine with a short timeout
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.elasticsearch.host = self.addr.ip().to_string();
        config.elasticsearch.port = self.addr.port();
        config.elasticsearch.timeout_sec = 5;
        config
    }

    pub fn services(&self) -> Arc<Services> {
        Arc::new(Services::new(self.config()).expect("Failed to build services"))
    }

    /// Bulk items whose `name` equals `name` are rejected with a 400
    pub fn reject_name(&self, name: &str) {
        self.lock().rejected_names.insert(name.to_string());
    }

    /// Hold every response back for `delay`
    pub fn set_delay(&self, delay: Duration) {
        self.lock().delay = Some(delay);
    }

    /// Store a document, bypassing the bulk path
    pub fn insert_raw(&self, index: &str, id: &str, source: Value) {
        self.insert_source(index, id, &source.to_string());
    }

    /// Store `source` verbatim; reads return exactly these bytes
    pub fn insert_source(&self, index: &str, id: &str, source: &str) {
        self.lock()
            .indices
            .entry(index.to_string())
            .or_default()
            .docs
            .insert(id.to_string(), source.to_string());
    }

    pub fn has_index(&self, index: &str) -> bool {
        self.lock().indices.contains_key(index)
    }

    pub fn mappings(&self, index: &str) -> Option<Value> {
        self.lock().indices.get(index).map(|i| i.mappings.clone())
    }

    pub fn ids(&self, index: &str) -> Vec<String> {
        self.lock()
            .indices
            .get(index)
            .map(|i| i.docs.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn document(&self, index: &str, id: &str) -> Option<Value> {
        self.lock()
            .indices
            .get(index)
            .and_then(|i| i.docs.get(id))
            .map(|raw| parse(raw))
    }

    pub fn document_count(&self, index: &str) -> usize {
        self.lock()
            .indices
            .get(index)
            .map(|i| i.docs.len())
            .unwrap_or(0)
    }

    /// Most recent `_search` request body
    pub fn last_search(&self) -> Option<Value> {
        self.lock().searches.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("Mock state poisoned")
    }
}

impl Drop for MockElasticsearch {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/_bulk", post(bulk))
        .route("/:index", head(index_exists).put(create_index))
        .route("/:index/_update/:id", post(update))
        .route("/:index/_doc/:id", axum::routing::get(get_doc).delete(delete_doc))
        .route("/:index/_search", post(search))
        .layer(middleware::from_fn_with_state(Arc::clone(&state), delay))
        .with_state(state)
}

async fn delay(State(state): State<Shared>, request: Request, next: Next) -> Response {
    let delay = state.lock().unwrap().delay;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    next.run(request).await
}

fn parse(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

fn error(status: StatusCode, kind: &str, reason: String) -> Response {
    (
        status,
        Json(json!({
            "error": { "type": kind, "reason": reason },
            "status": status.as_u16(),
        })),
    )
        .into_response()
}

fn index_missing(index: &str) -> Response {
    error(
        StatusCode::NOT_FOUND,
        "index_not_found_exception",
        format!("no such index [{index}]"),
    )
}

async fn index_exists(State(state): State<Shared>, Path(index): Path<String>) -> StatusCode {
    if state.lock().unwrap().indices.contains_key(&index) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn create_index(
    State(state): State<Shared>,
    Path(index): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if state.indices.contains_key(&index) {
        return error(
            StatusCode::BAD_REQUEST,
            "resource_already_exists_exception",
            format!("index [{index}] already exists"),
        );
    }

    state.indices.insert(
        index.clone(),
        MockIndex {
            mappings: body.get("mappings").cloned().unwrap_or(Value::Null),
            docs: BTreeMap::new(),
        },
    );

    Json(json!({
        "acknowledged": true,
        "shards_acknowledged": true,
        "index": index,
    }))
    .into_response()
}

async fn bulk(State(state): State<Shared>, body: String) -> Response {
    let mut state = state.lock().unwrap();
    let lines: Vec<&str> = body.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut items = Vec::new();
    let mut errors = false;

    for pair in lines.chunks(2) {
        let [action, source] = pair else {
            return error(
                StatusCode::BAD_REQUEST,
                "illegal_argument_exception",
                "The bulk request must be terminated by a newline".to_string(),
            );
        };
        let raw_source = source.trim();
        let (Ok(action), Ok(source)) = (
            serde_json::from_str::<Value>(action),
            serde_json::from_str::<Value>(raw_source),
        ) else {
            return error(
                StatusCode::BAD_REQUEST,
                "x_content_parse_exception",
                "malformed bulk line".to_string(),
            );
        };

        let index = action["index"]["_index"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        let id = match action["index"]["_id"].as_str() {
            Some(id) => id.to_string(),
            None => state.generate_id(),
        };

        let rejected = source["name"]
            .as_str()
            .is_some_and(|name| state.rejected_names.contains(name));
        if rejected {
            errors = true;
            items.push(json!({ "index": {
                "_index": index,
                "_id": id,
                "status": 400,
                "error": {
                    "type": "mapper_parsing_exception",
                    "reason": "failed to parse field [name]",
                },
            }}));
            continue;
        }

        let created = state
            .indices
            .entry(index.clone())
            .or_default()
            .docs
            .insert(id.clone(), raw_source.to_string())
            .is_none();
        items.push(json!({ "index": {
            "_index": index,
            "_id": id,
            "result": if created { "created" } else { "updated" },
            "status": if created { 201 } else { 200 },
        }}));
    }

    Json(json!({ "took": 1, "errors": errors, "items": items })).into_response()
}

async fn update(
    State(state): State<Shared>,
    Path((index, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    let Some(stored) = state.indices.get_mut(&index) else {
        return index_missing(&index);
    };
    let Some(raw) = stored.docs.get_mut(&id) else {
        return error(
            StatusCode::NOT_FOUND,
            "document_missing_exception",
            format!("[{id}]: document missing"),
        );
    };

    let before = parse(raw);
    let mut document = before.clone();
    if let (Some(target), Some(fields)) = (document.as_object_mut(), body["doc"].as_object()) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
    let result = if document == before {
        "noop"
    } else {
        *raw = document.to_string();
        "updated"
    };

    Json(json!({ "_index": index, "_id": id, "result": result })).into_response()
}

async fn get_doc(
    State(state): State<Shared>,
    Path((index, id)): Path<(String, String)>,
) -> Response {
    let state = state.lock().unwrap();
    let Some(stored) = state.indices.get(&index) else {
        return index_missing(&index);
    };

    match stored.docs.get(&id) {
        // Spliced in as text so the stored bytes reach the client untouched
        Some(source) => Response::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!(
                r#"{{"_index":{},"_id":{},"found":true,"_source":{}}}"#,
                Value::from(index),
                Value::from(id),
                source
            )))
            .unwrap(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "_index": index, "_id": id, "found": false })),
        )
            .into_response(),
    }
}

async fn delete_doc(
    State(state): State<Shared>,
    Path((index, id)): Path<(String, String)>,
) -> Response {
    let mut state = state.lock().unwrap();
    let Some(stored) = state.indices.get_mut(&index) else {
        return index_missing(&index);
    };

    match stored.docs.remove(&id) {
        Some(_) => Json(json!({ "_index": index, "_id": id, "result": "deleted" })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "_index": index, "_id": id, "result": "not_found" })),
        )
            .into_response(),
    }
}

async fn search(
    State(state): State<Shared>,
    Path(index): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.searches.push(body.clone());
    let Some(stored) = state.indices.get(&index) else {
        return index_missing(&index);
    };

    let from = body["from"].as_u64().unwrap_or(0) as usize;
    let size = body["size"].as_u64().unwrap_or(10) as usize;
    let query = body.get("query").cloned().unwrap_or(json!({ "match_all": {} }));

    let hits: Vec<Value> = stored
        .docs
        .iter()
        .map(|(id, raw)| (id, parse(raw)))
        .filter(|(_, source)| matches(&query, source, &stored.mappings))
        .skip(from)
        .take(size)
        .map(|(id, source)| json!({ "_index": index, "_id": id, "_score": 1.0, "_source": source }))
        .collect();

    Json(json!({
        "took": 1,
        "timed_out": false,
        "hits": { "total": { "value": hits.len(), "relation": "eq" }, "hits": hits },
    }))
    .into_response()
}

fn matches(query: &Value, source: &Value, mappings: &Value) -> bool {
    let Some((kind, clause)) = query.as_object().and_then(|q| q.iter().next()) else {
        return false;
    };

    match kind.as_str() {
        "match_all" => true,
        "term" => clause
            .as_object()
            .is_some_and(|terms| terms.iter().all(|(field, value)| term_matches(field, value, source, mappings))),
        "range" => clause
            .as_object()
            .is_some_and(|ranges| ranges.iter().all(|(field, bounds)| range_matches(field, bounds, source))),
        "bool" => ["must", "filter"].iter().all(|occur| match clause.get(*occur) {
            None => true,
            Some(Value::Array(clauses)) => clauses.iter().all(|c| matches(c, source, mappings)),
            Some(single) => matches(single, source, mappings),
        }),
        _ => false,
    }
}

/// Text fields only hold lowercased tokens, so a term rarely matches them
fn term_matches(field: &str, value: &Value, source: &Value, mappings: &Value) -> bool {
    if let Some(parent) = field.strip_suffix(".keyword") {
        return source.get(parent) == Some(value);
    }

    let Some(stored) = source.get(field) else {
        return false;
    };

    if mappings["properties"][field]["type"] == "text" {
        let (Some(text), Some(wanted)) = (stored.as_str(), value.as_str()) else {
            return false;
        };
        return text
            .split(|c: char| !c.is_alphanumeric())
            .map(str::to_lowercase)
            .any(|token| token == wanted);
    }

    match (stored.as_f64(), value.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => stored == value,
    }
}

fn range_matches(field: &str, bounds: &Value, source: &Value) -> bool {
    let Some(actual) = source.get(field).and_then(Value::as_f64) else {
        return false;
    };
    let bounds = bounds.as_object().cloned().unwrap_or_else(Map::new);
    let bound = |key: &str| bounds.get(key).and_then(Value::as_f64);

    bound("gte").map_or(true, |b| actual >= b)
        && bound("gt").map_or(true, |b| actual > b)
        && bound("lte").map_or(true, |b| actual <= b)
        && bound("lt").map_or(true, |b| actual < b)
}
