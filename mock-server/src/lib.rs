use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const API_PREFIX: &str = "/api/1.0";
pub const WORKSPACE_GID: &str = "1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub gid: String,
    pub resource_type: String,
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Story {
    pub gid: String,
    pub resource_type: String,
    pub text: String,
    pub target: String,
}

#[derive(Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Deserialize)]
pub struct CreateTask {
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    pub due_on: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
    pub due_on: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateStory {
    pub text: String,
}

#[derive(Deserialize)]
pub struct FieldsQuery {
    pub opt_fields: Option<String>,
}

#[derive(Clone, Default)]
pub struct Db {
    tasks: Arc<RwLock<BTreeMap<String, Task>>>,
    stories: Arc<RwLock<BTreeMap<String, Story>>>,
    next_gid: Arc<AtomicU64>,
}

impl Db {
    fn allocate_gid(&self) -> String {
        (1000 + self.next_gid.fetch_add(1, Ordering::Relaxed)).to_string()
    }
}

type Failure = (StatusCode, Json<Value>);

fn failure(status: StatusCode, message: impl Into<String>) -> Failure {
    (status, Json(json!({ "errors": [{ "message": message.into() }] })))
}

fn unknown_object(kind: &str, gid: &str) -> Failure {
    failure(StatusCode::NOT_FOUND, format!("{kind}: Unknown object: {gid}"))
}

/// The mock API, mounted under `/api/1.0` and guarded by a bearer token check.
pub fn app() -> Router {
    let api = Router::new()
        .route("/workspaces", get(list_workspaces))
        .route("/tasks", post(create_task))
        .route(
            "/tasks/{task_gid}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/{task_gid}/stories", post(create_story))
        .route("/stories/{story_gid}", delete(delete_story))
        .route("/workspaces/{workspace_gid}/tasks/search", get(search_tasks))
        .route_layer(middleware::from_fn(require_bearer))
        .with_state(Db::default());
    Router::new().nest(API_PREFIX, api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_bearer(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());
    if !authorized {
        return failure(StatusCode::UNAUTHORIZED, "Not Authorized").into_response();
    }
    next.run(request).await
}

async fn list_workspaces() -> Json<Value> {
    Json(json!({
        "data": [{ "gid": WORKSPACE_GID, "resource_type": "workspace", "name": "Mock Workspace" }]
    }))
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<Envelope<CreateTask>>,
) -> (StatusCode, Json<Value>) {
    let input = input.data;
    let task = Task {
        gid: db.allocate_gid(),
        resource_type: "task".to_string(),
        name: input.name,
        notes: input.notes,
        completed: input.completed,
        due_on: input.due_on,
    };
    db.tasks.write().await.insert(task.gid.clone(), task.clone());
    (StatusCode::CREATED, Json(json!({ "data": task })))
}

async fn get_task(
    State(db): State<Db>,
    Path(task_gid): Path<String>,
    Query(query): Query<FieldsQuery>,
) -> Result<Json<Value>, Failure> {
    let tasks = db.tasks.read().await;
    let task = tasks.get(&task_gid).ok_or_else(|| unknown_object("task", &task_gid))?;
    Ok(Json(json!({ "data": select_fields(task, query.opt_fields.as_deref()) })))
}

async fn update_task(
    State(db): State<Db>,
    Path(task_gid): Path<String>,
    Json(input): Json<Envelope<UpdateTask>>,
) -> Result<Json<Value>, Failure> {
    let input = input.data;
    let mut tasks = db.tasks.write().await;
    let task = tasks
        .get_mut(&task_gid)
        .ok_or_else(|| unknown_object("task", &task_gid))?;
    if let Some(name) = input.name {
        task.name = name;
    }
    if let Some(notes) = input.notes {
        task.notes = notes;
    }
    if let Some(completed) = input.completed {
        task.completed = completed;
    }
    if input.due_on.is_some() {
        task.due_on = input.due_on;
    }
    Ok(Json(json!({ "data": task })))
}

async fn delete_task(
    State(db): State<Db>,
    Path(task_gid): Path<String>,
) -> Result<Json<Value>, Failure> {
    db.tasks
        .write()
        .await
        .remove(&task_gid)
        .map(|_| Json(json!({ "data": {} })))
        .ok_or_else(|| unknown_object("task", &task_gid))
}

async fn create_story(
    State(db): State<Db>,
    Path(task_gid): Path<String>,
    Json(input): Json<Envelope<CreateStory>>,
) -> Result<(StatusCode, Json<Value>), Failure> {
    if !db.tasks.read().await.contains_key(&task_gid) {
        return Err(unknown_object("task", &task_gid));
    }
    let story = Story {
        gid: db.allocate_gid(),
        resource_type: "story".to_string(),
        text: input.data.text,
        target: task_gid,
    };
    db.stories.write().await.insert(story.gid.clone(), story.clone());
    Ok((StatusCode::CREATED, Json(json!({ "data": story }))))
}

/// Answers 204 with no body, as some proxies in front of the API do.
async fn delete_story(
    State(db): State<Db>,
    Path(story_gid): Path<String>,
) -> Result<StatusCode, Failure> {
    db.stories
        .write()
        .await
        .remove(&story_gid)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| unknown_object("story", &story_gid))
}

/// Supports `text`, `completed`, `due_on.before` and `due_on.after`; other
/// filters are ignored the way the real API ignores unknown parameters.
/// The received query pairs are echoed under `query`, in arrival order.
async fn search_tasks(
    State(db): State<Db>,
    Path(workspace_gid): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, Failure> {
    if workspace_gid != WORKSPACE_GID {
        return Err(unknown_object("workspace", &workspace_gid));
    }
    let param = |name: &str| {
        query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };
    let text = param("text").map(str::to_lowercase);
    let completed = match param("completed") {
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(other) => {
            return Err(failure(
                StatusCode::BAD_REQUEST,
                format!("completed: Not a boolean: {other}"),
            ))
        }
        None => None,
    };
    let before = param("due_on.before");
    let after = param("due_on.after");

    let tasks = db.tasks.read().await;
    let matches: Vec<Value> = tasks
        .values()
        .filter(|task| {
            text.as_deref()
                .is_none_or(|text| task.name.to_lowercase().contains(text))
        })
        .filter(|task| completed.is_none_or(|completed| task.completed == completed))
        .filter(|task| {
            before.is_none_or(|before| task.due_on.as_deref().is_some_and(|due| due < before))
        })
        .filter(|task| {
            after.is_none_or(|after| task.due_on.as_deref().is_some_and(|due| due > after))
        })
        .map(|task| json!({ "gid": task.gid, "resource_type": task.resource_type, "name": task.name }))
        .collect();
    let received: Vec<[&str; 2]> = query
        .iter()
        .map(|(key, value)| [key.as_str(), value.as_str()])
        .collect();
    Ok(Json(json!({ "data": matches, "query": received })))
}

/// Compact representation plus the comma-separated `opt_fields`.
fn select_fields(task: &Task, opt_fields: Option<&str>) -> Value {
    let full = json!(task);
    let Some(fields) = opt_fields else {
        return full;
    };
    let wanted: Vec<&str> = fields.split(',').map(str::trim).collect();
    let mut selected = serde_json::Map::new();
    if let Value::Object(object) = full {
        for (key, value) in object {
            if key == "gid" || key == "resource_type" || wanted.contains(&key.as_str()) {
                selected.insert(key, value);
            }
        }
    }
    Value::Object(selected)
}
