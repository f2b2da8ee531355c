pub mod http;
pub mod api_client;
pub mod storage;
pub mod session_service;
pub mod navigation;

pub use http::{FetchClient, HttpClient, HttpRequest, HttpResponse, Method};
pub use api_client::ApiClient;
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
pub use session_service::{SessionService, PROFILE_STORAGE_KEY, TOKEN_STORAGE_KEY};
pub use navigation::{BrowserNavigator, Navigator};
