// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, decode the response
// ============================================================================

use std::rc::Rc;
use crate::config::CONFIG;
use crate::error::{AppError, AppResult};
use crate::models::{
    Credentials, ErrorBody, LoginRequest, Profile, ProfileResponse, Room, RoomDraft,
    RoomEnvelope, RoomId, RoomUpdate, RoomsResponse, Session,
};
use crate::services::http::{FetchClient, HttpClient, HttpRequest, HttpResponse};

#[derive(Clone)]
pub struct ApiClient {
    http: Rc<dyn HttpClient>,
    auth_base_url: String,
    api_base_url: String,
}

impl ApiClient {
    /// Client against the configured backend using browser fetch
    pub fn new() -> Self {
        Self::with_http(
            Rc::new(FetchClient::new()),
            &CONFIG.auth_base_url,
            &CONFIG.api_base_url,
        )
    }

    pub fn with_http(http: Rc<dyn HttpClient>, auth_base_url: &str, api_base_url: &str) -> Self {
        Self {
            http,
            auth_base_url: auth_base_url.trim_end_matches('/').to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST /users/login
    pub async fn login(&self, credentials: &Credentials) -> AppResult<Session> {
        let url = format!("{}/users/login", self.auth_base_url);
        log::info!("🔐 [API] Login for user: {}", credentials.username);

        let request = HttpRequest::post(url).json(&LoginRequest::from(credentials))?;
        let response = self.execute(request).await?;
        response.json::<Session>()
    }

    /// GET /users/me with the session's bearer token
    pub async fn fetch_profile(&self, session: &Session) -> AppResult<Profile> {
        let url = format!("{}/users/me", self.auth_base_url);
        let request = HttpRequest::get(url).header("Authorization", &session.bearer());
        let response = self.execute(request).await?;
        Ok(response.json::<ProfileResponse>()?.user)
    }

    /// GET /room/
    pub async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        let url = format!("{}/room/", self.api_base_url);
        let response = self.execute(HttpRequest::get(url)).await?;
        let rooms = response.json::<RoomsResponse>()?.data;
        log::info!("✅ [API] {} rooms received", rooms.len());
        Ok(rooms)
    }

    /// POST /room/
    ///
    /// Returns the stored room when the server echoes one back.
    pub async fn create_room(&self, draft: &RoomDraft) -> AppResult<Option<Room>> {
        let url = format!("{}/room/", self.api_base_url);
        log::info!("➕ [API] Creating room: {}", draft.name);

        let request = HttpRequest::post(url).json(draft)?;
        let response = self.execute(request).await?;
        // The create succeeded; an unexpected body shape only loses the echo
        let stored = serde_json::from_str::<RoomEnvelope>(&response.body)
            .ok()
            .and_then(|envelope| envelope.data)
            .filter(|room| room.id.is_some());
        Ok(stored)
    }

    /// PUT /room/{id}
    pub async fn update_room(&self, id: &RoomId, room: &Room) -> AppResult<()> {
        let url = format!("{}/room/{}", self.api_base_url, id);
        log::info!("📝 [API] Updating room: {}", id);

        let request = HttpRequest::put(url).json(&RoomUpdate::from(room))?;
        self.execute(request).await?;
        Ok(())
    }

    /// Send and turn non-2xx statuses into `AppError::Server`
    async fn execute(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let response = self.http.send(request).await?;
        if response.ok() {
            Ok(response)
        } else {
            Err(server_error(&response))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn server_error(response: &HttpResponse) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.text())
        .unwrap_or_else(|| format!("Request failed with status code {}", response.status));
    AppError::Server {
        status: response.status,
        message,
    }
}
