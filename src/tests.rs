//! Integration tests for the retreat client against an in-process mock backend.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::broadcast::error::TryRecvError;

use crate::api::{ActionKind, Phase};
use crate::config::ClientConfig;
use crate::errors::codes;
use crate::models::{
    AccordionContent, AccordionItem, Block, BlockContent, EntityKind, NewAttendee, NewBlock,
    NewUser, Page, PastItinerary, Retreat, RetreatUpdate, User, UserUpdate,
};
use crate::store::Lookup;
use crate::{ClientError, Dashboard, HookState};

const COLLECTIONS: &[&str] = &[
    "retreats",
    "attendees",
    "trips",
    "websites",
    "pages",
    "blocks",
    "users",
    "rfps",
    "email-templates",
    "past-itineraries",
    "past-itinerary-locations",
];

/// Child collection -> (parent collection, parent key on the child, list field on the parent).
const PARENT_LINKS: &[(&str, &str, &str, &str)] = &[
    ("users", "retreats", "retreat_id", "users"),
    ("attendees", "retreats", "retreat_id", "attendees"),
    ("pages", "websites", "website_id", "page_ids"),
    ("blocks", "pages", "page_id", "block_ids"),
    ("trips", "attendees", "attendee_id", "travel"),
];

#[derive(Default)]
struct MockBackend {
    records: HashMap<String, BTreeMap<i64, Value>>,
    next_id: i64,
    hits: HashMap<String, usize>,
    fail_with: Option<StatusCode>,
    last_authorization: Option<String>,
}

type Shared = Arc<Mutex<MockBackend>>;

fn collection_of(uri: &Uri) -> String {
    uri.path()
        .trim_start_matches('/')
        .split('/')
        .nth(1)
        .unwrap_or_default()
        .to_string()
}

/// Count the request and return the forced failure, if one is configured.
fn enter(state: &Shared, method: &Method, uri: &Uri, headers: &HeaderMap) -> Option<Response> {
    let mut backend = state.lock().unwrap();
    *backend
        .hits
        .entry(format!("{} {}", method, uri.path()))
        .or_default() += 1;
    backend.last_authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    backend.fail_with.map(|status| {
        (status, Json(json!({ "error": "forced failure" }))).into_response()
    })
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

async fn list_items(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(failure) = enter(&state, &method, &uri, &headers) {
        return failure;
    }
    let backend = state.lock().unwrap();
    let retreat_filter = params.get("retreat_id").and_then(|v| v.parse::<i64>().ok());
    let items: Vec<Value> = backend
        .records
        .get(&collection_of(&uri))
        .map(|records| {
            records
                .values()
                .filter(|record| match retreat_filter {
                    Some(retreat_id) => record["retreat_id"].as_i64() == Some(retreat_id),
                    None => true,
                })
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Json(Value::Array(items)).into_response()
}

async fn get_item(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if let Some(failure) = enter(&state, &method, &uri, &headers) {
        return failure;
    }
    let backend = state.lock().unwrap();
    match backend
        .records
        .get(&collection_of(&uri))
        .and_then(|records| records.get(&id))
    {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_item(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if let Some(failure) = enter(&state, &method, &uri, &headers) {
        return failure;
    }
    let collection = collection_of(&uri);
    let mut backend = state.lock().unwrap();
    backend.next_id += 1;
    let id = backend.next_id;
    body["id"] = json!(id);

    for (child, parent, key, field) in PARENT_LINKS {
        if *child != collection {
            continue;
        }
        if let Some(parent_id) = body[*key].as_i64() {
            if let Some(parent_record) = backend
                .records
                .get_mut(*parent)
                .and_then(|records| records.get_mut(&parent_id))
            {
                match parent_record[*field].as_array_mut() {
                    Some(list) => list.push(json!(id)),
                    None => parent_record[*field] = json!([id]),
                }
            }
        }
    }

    backend
        .records
        .entry(collection)
        .or_default()
        .insert(id, body.clone());
    Json(body).into_response()
}

async fn patch_item(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(changes): Json<Value>,
) -> Response {
    if let Some(failure) = enter(&state, &method, &uri, &headers) {
        return failure;
    }
    let mut backend = state.lock().unwrap();
    let Some(record) = backend
        .records
        .get_mut(&collection_of(&uri))
        .and_then(|records| records.get_mut(&id))
    else {
        return not_found();
    };
    if let (Some(target), Some(changes)) = (record.as_object_mut(), changes.as_object()) {
        for (key, value) in changes {
            target.insert(key.clone(), value.clone());
        }
    }
    Json(record.clone()).into_response()
}

async fn delete_item(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if let Some(failure) = enter(&state, &method, &uri, &headers) {
        return failure;
    }
    let mut backend = state.lock().unwrap();
    match backend
        .records
        .get_mut(&collection_of(&uri))
        .and_then(|records| records.remove(&id))
    {
        Some(_) => Json(json!({ "deleted": id })).into_response(),
        None => not_found(),
    }
}

async fn list_retreat_attendees(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(retreat_id): Path<i64>,
) -> Response {
    if let Some(failure) = enter(&state, &method, &uri, &headers) {
        return failure;
    }
    let backend = state.lock().unwrap();
    let attendees: Vec<Value> = backend
        .records
        .get("attendees")
        .map(|records| {
            records
                .values()
                .filter(|a| a["retreat_id"].as_i64() == Some(retreat_id))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Json(Value::Array(attendees)).into_response()
}

async fn upload_file(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Some(failure) = enter(&state, &method, &uri, &headers) {
        return failure;
    }

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or("unnamed").to_string();
            let bytes = field.bytes().await.unwrap();
            upload = Some((name, bytes.len()));
        }
    }
    let Some((name, size)) = upload else {
        return (StatusCode::BAD_REQUEST, "missing file part").into_response();
    };

    let mut backend = state.lock().unwrap();
    backend.next_id += 1;
    let id = backend.next_id;
    Json(json!({
        "id": id,
        "file_url": format!("https://files.test/{}", name),
        "name": name,
        "size": size,
    }))
    .into_response()
}

fn mock_router(state: Shared) -> Router {
    let mut router = Router::new();
    for collection in COLLECTIONS {
        router = router
            .route(
                &format!("/v1.0/{}", collection),
                get(list_items).post(create_item),
            )
            .route(
                &format!("/v1.0/{}/{{id}}", collection),
                get(get_item).patch(patch_item).delete(delete_item),
            );
    }
    router
        .route("/v1.0/retreats/{id}/attendees", get(list_retreat_attendees))
        .route("/v1.0/files", post(upload_file))
        .with_state(state)
}

/// Test fixture: a mock backend on a random port and a dashboard pointed at it.
struct TestFixture {
    dashboard: Dashboard,
    backend: Shared,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_token(None).await
    }

    async fn with_token(token: Option<&str>) -> Self {
        let backend: Shared = Arc::new(Mutex::new(MockBackend {
            next_id: 100,
            ..Default::default()
        }));
        let app = mock_router(backend.clone());

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut config =
            ClientConfig::for_base_url(&format!("http://{}", addr)).expect("Invalid base URL");
        config.api_token = token.map(|t| t.to_string());
        let dashboard = Dashboard::new(config).expect("Failed to build dashboard");

        TestFixture { dashboard, backend }
    }

    fn seed(&self, collection: &str, record: Value) {
        let id = record["id"].as_i64().expect("seeded record needs an id");
        self.backend
            .lock()
            .unwrap()
            .records
            .entry(collection.to_string())
            .or_default()
            .insert(id, record);
    }

    fn remove(&self, collection: &str, id: i64) {
        if let Some(records) = self.backend.lock().unwrap().records.get_mut(collection) {
            records.remove(&id);
        }
    }

    fn hits(&self, method: &str, path: &str) -> usize {
        self.backend
            .lock()
            .unwrap()
            .hits
            .get(&format!("{} {}", method, path))
            .copied()
            .unwrap_or(0)
    }

    fn fail_with(&self, status: Option<StatusCode>) {
        self.backend.lock().unwrap().fail_with = status;
    }
}

fn new_user(retreat_id: i64) -> NewUser {
    NewUser {
        first_name: "A".to_string(),
        last_name: "Planner".to_string(),
        email: "a@example.com".to_string(),
        retreat_id,
    }
}

#[tokio::test]
async fn test_fetch_retreat_then_create_user() {
    let fixture = TestFixture::new().await;
    fixture.seed(
        "retreats",
        json!({ "id": 5, "company_name": "Acme", "users": [1, 2] }),
    );

    // Not cached yet
    assert_eq!(
        fixture.dashboard.store().read().await.lookup::<Retreat>(5),
        Lookup::Missing
    );

    let retreat = fixture.dashboard.fetch_retreat(5).await.unwrap();
    assert_eq!(retreat.users, vec![1, 2]);
    assert_eq!(
        fixture.dashboard.store().read().await.retreats.get(5),
        Some(&retreat)
    );

    let mut events = fixture.dashboard.subscribe();
    let user = fixture.dashboard.create_user(&new_user(5)).await.unwrap();
    assert_eq!(user.first_name, "A");
    let _request = events.recv().await.unwrap();
    assert_eq!(events.recv().await.unwrap().parent_skipped, None);

    let store = fixture.dashboard.store().read().await;
    assert_eq!(store.users.get(user.id), Some(&user));
    assert_eq!(store.retreats.get(5).unwrap().users, vec![1, 2, user.id]);
    assert_eq!(store.retreat_users(5).len(), 1);
}

#[tokio::test]
async fn test_fetch_twice_is_idempotent() {
    let fixture = TestFixture::new().await;
    fixture.seed(
        "retreats",
        json!({ "id": 5, "company_name": "Acme", "users": [1, 2] }),
    );

    fixture.dashboard.fetch_retreat(5).await.unwrap();
    let first = fixture.dashboard.store().read().await.retreats.get(5).cloned();
    fixture.dashboard.fetch_retreat(5).await.unwrap();
    let second = fixture.dashboard.store().read().await.retreats.get(5).cloned();

    assert_eq!(first, second);
    assert_eq!(fixture.hits("GET", "/v1.0/retreats/5"), 2);
}

#[tokio::test]
async fn test_create_user_with_uncached_retreat() {
    let fixture = TestFixture::new().await;
    fixture.seed("retreats", json!({ "id": 5, "company_name": "Acme", "users": [] }));
    let mut events = fixture.dashboard.subscribe();

    let user = fixture.dashboard.create_user(&new_user(5)).await.unwrap();

    assert_eq!(events.recv().await.unwrap().phase, Phase::Request);
    let success = events.recv().await.unwrap();
    assert_eq!(success.phase, Phase::Success);
    assert_eq!(success.id, Some(user.id));
    assert_eq!(success.parent_skipped, Some(5));

    {
        let store = fixture.dashboard.store().read().await;
        assert!(store.users.contains(user.id));
        assert!(store.retreats.get(5).is_none());
    }

    // The server linked it; fetching the parent brings the list up to date.
    let retreat = fixture.dashboard.fetch_retreat(5).await.unwrap();
    assert_eq!(retreat.users, vec![user.id]);
}

#[tokio::test]
async fn test_not_found_is_not_refetched() {
    let fixture = TestFixture::new().await;
    let path = "/v1.0/retreats/42";

    let hook = fixture.dashboard.use_entity::<Retreat>(42);
    assert_eq!(hook.resolve(&fixture.dashboard).await, HookState::NotFound);
    assert_eq!(fixture.hits("GET", path), 1);
    assert!(fixture.dashboard.store().read().await.retreats.is_not_found(42));

    // Neither this hook nor a fresh one goes back to the network.
    assert_eq!(hook.read(&fixture.dashboard).await, HookState::NotFound);
    let other = fixture.dashboard.use_entity::<Retreat>(42);
    assert_eq!(other.read(&fixture.dashboard).await, HookState::NotFound);
    other.settle().await;
    assert_eq!(fixture.hits("GET", path), 1);

    // An explicit refetch clears the marker.
    fixture.seed("retreats", json!({ "id": 42, "company_name": "Late Co" }));
    let retreat = fixture.dashboard.refetch::<Retreat>(42).await.unwrap();
    assert_eq!(retreat.company_name, "Late Co");
    assert_eq!(fixture.hits("GET", path), 2);
    assert_eq!(
        hook.read(&fixture.dashboard).await.loaded().map(|r| r.id),
        Some(42)
    );
}

#[tokio::test]
async fn test_hook_fetches_once() {
    let fixture = TestFixture::new().await;
    fixture.seed(
        "users",
        json!({ "id": 7, "first_name": "Grace", "last_name": "Hopper", "email": "g@example.com" }),
    );

    let hook = fixture.dashboard.use_entity::<User>(7);
    let first = hook.read(&fixture.dashboard).await;
    assert!(first.is_loading());
    let _ = hook.read(&fixture.dashboard).await;
    hook.settle().await;

    assert_eq!(fixture.hits("GET", "/v1.0/users/7"), 1);
    let user = hook.read(&fixture.dashboard).await.loaded().unwrap();
    assert_eq!(user.first_name, "Grace");
    assert_eq!(fixture.hits("GET", "/v1.0/users/7"), 1);
}

#[tokio::test]
async fn test_hook_after_server_error_can_retry() {
    let fixture = TestFixture::new().await;
    fixture.seed("users", json!({ "id": 7, "first_name": "Grace" }));
    fixture.fail_with(Some(StatusCode::INTERNAL_SERVER_ERROR));

    let hook = fixture.dashboard.use_entity::<User>(7);
    assert_eq!(hook.resolve(&fixture.dashboard).await, HookState::Loading);
    assert!(!fixture.dashboard.store().read().await.users.is_not_found(7));

    fixture.fail_with(None);
    assert!(matches!(
        hook.resolve(&fixture.dashboard).await,
        HookState::Loaded(user) if user.id == 7
    ));
    assert_eq!(fixture.hits("GET", "/v1.0/users/7"), 2);
}

#[tokio::test]
async fn test_past_itineraries_index_locations() {
    let fixture = TestFixture::new().await;
    fixture.seed(
        "past-itineraries",
        json!({ "id": 1, "nights": 4, "start_date": "2024-03-01", "location_ids": [7, 9] }),
    );
    fixture.seed(
        "past-itineraries",
        json!({ "id": 2, "nights": 2, "location_ids": [9] }),
    );
    fixture.seed(
        "past-itinerary-locations",
        json!({ "id": 7, "name": "Lisbon", "country": "Portugal" }),
    );

    let itineraries = fixture.dashboard.list_past_itineraries().await.unwrap();
    assert_eq!(itineraries.len(), 2);
    fixture.dashboard.list_itinerary_locations().await.unwrap();

    let store = fixture.dashboard.store().read().await;
    assert!(store.itinerary_to_location[&7].contains(&1));
    assert!(store.itinerary_to_location[&9].contains(&1));
    assert!(store.itinerary_to_location[&9].contains(&2));
    assert_eq!(store.itinerary_locations(1).len(), 1);
    let at_nine: Vec<i64> = store.itineraries_at(9).into_iter().map(|i| i.id).collect();
    assert_eq!(at_nine, vec![1, 2]);
    assert_eq!(
        store.get::<PastItinerary>(1).unwrap().start_date.map(|d| d.to_string()),
        Some("2024-03-01".to_string())
    );
}

#[tokio::test]
async fn test_delete_page_prunes_website() {
    let fixture = TestFixture::new().await;
    fixture.seed(
        "websites",
        json!({ "id": 1, "name": "Offsite", "retreat_id": 5, "page_ids": [2, 3] }),
    );
    fixture.seed("pages", json!({ "id": 2, "name": "Home", "website_id": 1 }));
    fixture.seed("pages", json!({ "id": 3, "name": "FAQ", "website_id": 1 }));

    fixture.dashboard.fetch_website(1).await.unwrap();
    fixture.dashboard.fetch_page(2).await.unwrap();
    fixture.dashboard.fetch_page(3).await.unwrap();

    fixture.dashboard.delete_page(2).await.unwrap();

    let store = fixture.dashboard.store().read().await;
    assert!(store.pages.get(2).is_none());
    assert_eq!(store.websites.get(1).unwrap().page_ids, vec![3]);
    let names: Vec<&str> = store
        .website_pages(1)
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["FAQ"]);
}

#[tokio::test]
async fn test_create_block_and_reorder() {
    let fixture = TestFixture::new().await;
    fixture.seed(
        "pages",
        json!({ "id": 2, "name": "Home", "website_id": 1, "block_ids": [10] }),
    );
    fixture.seed(
        "blocks",
        json!({ "id": 10, "page_id": 2, "type": "WYSIWYG", "content": {"text": "Welcome"} }),
    );
    fixture.dashboard.fetch_page(2).await.unwrap();

    let block = fixture
        .dashboard
        .create_block(&NewBlock {
            page_id: 2,
            content: BlockContent::Accordion(AccordionContent {
                title: "FAQ".to_string(),
                items: vec![AccordionItem {
                    header: "Where?".to_string(),
                    body: json!("Lisbon"),
                }],
            }),
        })
        .await
        .unwrap();
    assert_eq!(block.content.type_name(), "ACCORDION");
    assert_eq!(
        fixture.dashboard.store().read().await.pages.get(2).unwrap().block_ids,
        vec![10, block.id]
    );

    // Not a permutation of the cached list
    let err = fixture
        .dashboard
        .reorder_blocks(2, vec![block.id])
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), codes::VALIDATION_ERROR);
    assert_eq!(fixture.hits("PATCH", "/v1.0/pages/2"), 0);

    let page: Page = fixture
        .dashboard
        .reorder_blocks(2, vec![block.id, 10])
        .await
        .unwrap();
    assert_eq!(page.block_ids, vec![block.id, 10]);

    fixture.dashboard.fetch_block(10).await.unwrap();
    let store = fixture.dashboard.store().read().await;
    let types: Vec<&str> = store
        .page_blocks(2)
        .into_iter()
        .map(|b: &Block| b.content.type_name())
        .collect();
    assert_eq!(types, vec!["ACCORDION", "WYSIWYG"]);
}

#[tokio::test]
async fn test_mutation_failure_leaves_store_unchanged() {
    let fixture = TestFixture::new().await;
    fixture.seed("retreats", json!({ "id": 5, "company_name": "Acme" }));
    let before = fixture.dashboard.fetch_retreat(5).await.unwrap();

    let mut events = fixture.dashboard.subscribe();
    fixture.fail_with(Some(StatusCode::INTERNAL_SERVER_ERROR));

    let err = fixture
        .dashboard
        .update_retreat(
            5,
            &RetreatUpdate {
                company_name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(
        fixture.dashboard.store().read().await.retreats.get(5),
        Some(&before)
    );

    let request = events.recv().await.unwrap();
    assert_eq!(request.action, ActionKind::Update);
    assert_eq!(request.phase, Phase::Request);
    let failure = events.recv().await.unwrap();
    assert_eq!(failure.request_id, request.request_id);
    assert!(matches!(failure.phase, Phase::Failure { code, .. } if code == codes::HTTP_ERROR));
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let fixture = TestFixture::new().await;

    let mut request = new_user(5);
    request.email = "not-an-email".to_string();
    let err = fixture.dashboard.create_user(&request).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(fixture.hits("POST", "/v1.0/users"), 0);
}

#[tokio::test]
async fn test_lifecycle_events_on_success() {
    let fixture = TestFixture::new().await;
    fixture.seed("retreats", json!({ "id": 5, "company_name": "Acme" }));
    let mut events = fixture.dashboard.subscribe();

    fixture.dashboard.fetch_retreat(5).await.unwrap();

    let request = events.recv().await.unwrap();
    let success = events.recv().await.unwrap();
    assert_eq!(request.kind, EntityKind::Retreat);
    assert_eq!(request.id, Some(5));
    assert_eq!(success.phase, Phase::Success);
    assert_eq!(success.request_id, request.request_id);
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let fixture = TestFixture::with_token(Some("secret-token")).await;
    fixture.seed("retreats", json!({ "id": 5, "company_name": "Acme" }));

    fixture.dashboard.fetch_retreat(5).await.unwrap();

    let auth = fixture.backend.lock().unwrap().last_authorization.clone();
    assert_eq!(auth.as_deref(), Some("Bearer secret-token"));
}

#[tokio::test]
async fn test_transport_failure_is_not_a_not_found() {
    // Grab a free port and close it again so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::for_base_url(&format!("http://{}", addr)).unwrap();
    let dashboard = Dashboard::new(config).unwrap();

    let err = dashboard.fetch_retreat(5).await.unwrap_err();
    assert_eq!(err.error_code(), codes::TRANSPORT_ERROR);
    assert_eq!(
        dashboard.store().read().await.lookup::<Retreat>(5),
        Lookup::Missing
    );
}

#[tokio::test]
async fn test_roster_and_upload() {
    let fixture = TestFixture::new().await;
    fixture.seed("retreats", json!({ "id": 5, "company_name": "Acme", "attendees": [] }));
    fixture.dashboard.fetch_retreat(5).await.unwrap();

    let attendee = fixture
        .dashboard
        .create_attendee(&NewAttendee {
            retreat_id: 5,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email_address: "ada@example.com".to_string(),
            dietary_prefs: Some("vegetarian".to_string()),
            notes: None,
        })
        .await
        .unwrap();

    let roster = fixture.dashboard.list_retreat_attendees(5).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(fixture.hits("GET", "/v1.0/retreats/5/attendees"), 1);

    let file = fixture
        .dashboard
        .upload_file("logo.png", vec![0x89, 0x50, 0x4e, 0x47], "image/png")
        .await
        .unwrap();
    assert_eq!(file.file_url, "https://files.test/logo.png");

    let store = fixture.dashboard.store().read().await;
    assert_eq!(store.retreats.get(5).unwrap().attendees, vec![attendee.id]);
    assert_eq!(store.retreat_attendees(5)[0].full_name(), "Ada Lovelace");
    assert!(store.files.contains(file.id));
}

#[tokio::test]
async fn test_delete_missing_record_reports_not_found() {
    let fixture = TestFixture::new().await;

    let err = fixture.dashboard.delete_user(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "user 99 not found");
}

#[tokio::test]
async fn test_mutation_404_keeps_cached_record() {
    let fixture = TestFixture::new().await;
    fixture.seed(
        "users",
        json!({ "id": 9, "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com" }),
    );
    let cached = fixture.dashboard.fetch_user(9).await.unwrap();

    // Gone on the server, still cached locally.
    fixture.remove("users", 9);

    let err = fixture.dashboard.delete_user(9).await.unwrap_err();
    assert!(err.is_not_found());

    let err = fixture
        .dashboard
        .update_user(
            9,
            &UserUpdate {
                first_name: Some("Augusta".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let store = fixture.dashboard.store().read().await;
    assert!(store.users.contains(9));
    assert!(!store.users.is_not_found(9));
    assert_eq!(store.users.get(9), Some(&cached));
}

#[tokio::test]
async fn test_upload_rejects_bad_mime() {
    let fixture = TestFixture::new().await;
    let mut events = fixture.dashboard.subscribe();

    let err = fixture
        .dashboard
        .upload_file("logo.png", vec![1, 2, 3], "not a mime")
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), codes::VALIDATION_ERROR);
    assert_eq!(fixture.hits("POST", "/v1.0/files"), 0);
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    assert!(fixture.dashboard.store().read().await.files.is_empty());
}
