// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use timetable::Registry;
use timetable_api::{
    AddFacultyRequest, AddFacultyResponse, AddRoomRequest, AddRoomResponse, AddSubjectRequest,
    AddSubjectResponse, ApiError, ApiResult, CurrentTimetable, GenerateTimetableRequest,
    GeneratedTimetable,
    ListFacultiesResponse, ListRoomsResponse, ListStudentsResponse, ListSubjectsResponse,
    LoginRequest, LoginResponse, TemplateResponse, TimetableResponse, add_faculty, add_room,
    add_subject, generate_timetable, get_template, get_timetable, list_faculties, list_rooms,
    list_students, list_subjects, login, timetable_for_viewer, view_timetable,
};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Timetable Server - HTTP server for the weekly timetable generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Pre-populate the registry with sample faculty, rooms, and subjects
    #[arg(long)]
    seed_demo: bool,
}

/// The in-memory registry and the last generated schedule.
#[derive(Debug, Default)]
struct TimetableStore {
    /// Registered faculty, rooms, and subjects.
    registry: Registry,
    /// The most recently generated timetable, if any.
    timetable: Option<CurrentTimetable>,
}

/// Application state shared across handlers.
#[derive(Clone, Default)]
struct AppState {
    /// The store wrapped in a Mutex to allow safe concurrent access.
    store: Arc<Mutex<TimetableStore>>,
}

/// Query parameters for the faculty view.
#[derive(Debug, Deserialize)]
struct ViewQuery {
    /// The faculty member to project onto.
    faculty_id: Option<String>,
}

/// Query parameters for a viewer's timetable.
#[derive(Debug, Deserialize)]
struct ViewerQuery {
    /// The viewer role.
    role: String,
    /// The faculty or cohort identifier.
    id: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } | ApiError::NotGenerated => StatusCode::NOT_FOUND,
            ApiError::PreconditionFailed { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/faculties` endpoint.
///
/// Registers a new faculty member.
async fn handle_add_faculty(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddFacultyRequest>,
) -> Result<Json<AddFacultyResponse>, HttpError> {
    info!(name = %req.name, "Handling add_faculty request");

    let mut store = app_state.store.lock().await;
    let result: ApiResult<AddFacultyResponse> = add_faculty(&store.registry, &req)?;
    store.registry = result.new_registry;
    drop(store);

    Ok(Json(result.response))
}

/// Handler for GET `/faculties` endpoint.
async fn handle_list_faculties(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListFacultiesResponse> {
    let store = app_state.store.lock().await;
    Json(list_faculties(&store.registry))
}

/// Handler for POST `/rooms` endpoint.
///
/// Registers a new room.
async fn handle_add_room(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddRoomRequest>,
) -> Result<Json<AddRoomResponse>, HttpError> {
    info!(name = %req.name, "Handling add_room request");

    let mut store = app_state.store.lock().await;
    let result: ApiResult<AddRoomResponse> = add_room(&store.registry, &req)?;
    store.registry = result.new_registry;
    drop(store);

    Ok(Json(result.response))
}

/// Handler for GET `/rooms` endpoint.
async fn handle_list_rooms(AxumState(app_state): AxumState<AppState>) -> Json<ListRoomsResponse> {
    let store = app_state.store.lock().await;
    Json(list_rooms(&store.registry))
}

/// Handler for POST `/subjects` endpoint.
///
/// Registers a new subject taught by an existing faculty member.
async fn handle_add_subject(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddSubjectRequest>,
) -> Result<Json<AddSubjectResponse>, HttpError> {
    info!(
        name = %req.name,
        faculty_id = %req.faculty_id,
        "Handling add_subject request"
    );

    let mut store = app_state.store.lock().await;
    let result: ApiResult<AddSubjectResponse> = add_subject(&store.registry, &req)?;
    store.registry = result.new_registry;
    drop(store);

    Ok(Json(result.response))
}

/// Handler for GET `/subjects` endpoint.
async fn handle_list_subjects(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListSubjectsResponse> {
    let store = app_state.store.lock().await;
    Json(list_subjects(&store.registry))
}

/// Handler for GET `/students` endpoint.
///
/// Lists the student cohorts derived from the registered subjects.
async fn handle_list_students(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListStudentsResponse> {
    let store = app_state.store.lock().await;
    Json(list_students(&store.registry))
}

/// Handler for POST `/timetable/generate` endpoint.
///
/// An empty body generates from the stored registry; a JSON body supplies the
/// entity lists. The new timetable replaces any previous one.
async fn handle_generate(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> Result<Json<TimetableResponse>, HttpError> {
    let req: Option<GenerateTimetableRequest> = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice(&body).map(Some).map_err(|e| {
            warn!(error = %e, "Malformed generate request");
            HttpError {
                status: StatusCode::BAD_REQUEST,
                message: format!("Invalid request body: {e}"),
            }
        })?
    };

    info!(
        from_registry = req.is_none(),
        "Handling generate_timetable request"
    );

    let mut store = app_state.store.lock().await;
    let generated: GeneratedTimetable = generate_timetable(&store.registry, req.as_ref())?;
    store.timetable = Some(generated.timetable);
    drop(store);

    Ok(Json(generated.response))
}

/// Handler for GET `/timetable` endpoint.
async fn handle_get_timetable(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<TimetableResponse>, HttpError> {
    let store = app_state.store.lock().await;
    let response: TimetableResponse = get_timetable(store.timetable.as_ref())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/timetable/view` endpoint.
///
/// Projects the current timetable onto one faculty member.
async fn handle_view_timetable(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<TimetableResponse>, HttpError> {
    info!(faculty_id = ?query.faculty_id, "Handling view_timetable request");

    let store = app_state.store.lock().await;
    let response: TimetableResponse =
        view_timetable(store.timetable.as_ref(), query.faculty_id.as_deref())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/login` endpoint.
///
/// Resolves a viewer; no credentials are checked.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(role = %req.role, id = ?req.id, "Handling login request");

    let store = app_state.store.lock().await;
    let response: LoginResponse = login(&store.registry, &req)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/timetable/for` endpoint.
///
/// Returns the timetable as seen by the given viewer.
async fn handle_timetable_for(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ViewerQuery>,
) -> Result<Json<TimetableResponse>, HttpError> {
    let req: LoginRequest = LoginRequest {
        role: query.role,
        id: query.id,
    };

    let store = app_state.store.lock().await;
    let response: TimetableResponse = timetable_for_viewer(store.timetable.as_ref(), &req)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/template` endpoint.
async fn handle_get_template() -> Json<TemplateResponse> {
    Json(get_template())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/faculties", post(handle_add_faculty))
        .route("/faculties", get(handle_list_faculties))
        .route("/rooms", post(handle_add_room))
        .route("/rooms", get(handle_list_rooms))
        .route("/subjects", post(handle_add_subject))
        .route("/subjects", get(handle_list_subjects))
        .route("/students", get(handle_list_students))
        .route("/timetable/generate", post(handle_generate))
        .route("/timetable", get(handle_get_timetable))
        .route("/timetable/view", get(handle_view_timetable))
        .route("/timetable/for", get(handle_timetable_for))
        .route("/login", post(handle_login))
        .route("/template", get(handle_get_template))
        .with_state(app_state)
}

/// Builds a small sample registry through the regular registration path.
fn seed_demo_registry() -> Result<Registry, ApiError> {
    let mut registry: Registry = Registry::new();

    let mut faculty_ids: Vec<String> = Vec::new();
    for name in ["Dr. Rao", "Prof. Iyer", "Ms. Menon"] {
        let result: ApiResult<AddFacultyResponse> = add_faculty(
            &registry,
            &AddFacultyRequest {
                name: name.to_string(),
            },
        )?;
        faculty_ids.push(result.response.faculty.id);
        registry = result.new_registry;
    }

    for name in ["Room 101", "Room 102", "Lab A"] {
        registry = add_room(
            &registry,
            &AddRoomRequest {
                name: name.to_string(),
            },
        )?
        .new_registry;
    }

    let subjects: [(&str, usize); 5] = [
        ("Mathematics", 0),
        ("Physics", 1),
        ("Chemistry", 2),
        ("Statistics", 0),
        ("Electronics", 1),
    ];
    for (name, faculty_index) in subjects {
        let Some(faculty_id) = faculty_ids.get(faculty_index) else {
            continue;
        };
        registry = add_subject(
            &registry,
            &AddSubjectRequest {
                name: name.to_string(),
                faculty_id: faculty_id.clone(),
            },
        )?
        .new_registry;
    }

    Ok(registry)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Timetable Server");

    let mut store: TimetableStore = TimetableStore::default();
    if args.seed_demo {
        store.registry = seed_demo_registry()?;
        info!(
            faculties = store.registry.faculties.len(),
            rooms = store.registry.rooms.len(),
            subjects = store.registry.subjects.len(),
            "Seeded demo registry"
        );
    }

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
