pub mod auth;
pub mod room;

pub use auth::{Credentials, ErrorBody, LoginRequest, Profile, ProfileResponse, Session};
pub use room::{Room, RoomDraft, RoomEnvelope, RoomId, RoomUpdate, RoomsResponse};
