use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned room identifier, opaque to the client
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        RoomId(s.to_string())
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Room {
    /// `None` only for rows appended locally from a draft the server did not echo back
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RoomId>,
    pub name: String,
    #[serde(rename = "isUsed", default)]
    pub is_used: bool,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_used: bool) -> Self {
        Self {
            id: Some(RoomId(id.into())),
            name: name.into(),
            is_used,
        }
    }

    pub fn from_draft(draft: &RoomDraft) -> Self {
        Self {
            id: None,
            name: draft.name.clone(),
            is_used: draft.is_used,
        }
    }

    pub fn usage_label(&self) -> &'static str {
        usage_label(self.is_used)
    }
}

/// Display labels of the usage lookup column
pub fn usage_label(is_used: bool) -> &'static str {
    if is_used {
        "ใช้งาน"
    } else {
        "ปิดใช้งาน"
    }
}

/// `POST /room/` body
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct RoomDraft {
    pub name: String,
    #[serde(rename = "isUsed")]
    pub is_used: bool,
}

impl RoomDraft {
    pub fn new(name: impl Into<String>, is_used: bool) -> Self {
        Self {
            name: name.into(),
            is_used,
        }
    }
}

/// `PUT /room/{id}` body
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct RoomUpdate {
    #[serde(rename = "isUsed")]
    pub is_used: bool,
    pub name: String,
    pub status: bool,
}

impl From<&Room> for RoomUpdate {
    fn from(room: &Room) -> Self {
        Self {
            is_used: room.is_used,
            name: room.name.clone(),
            status: true,
        }
    }
}

/// `GET /room/` response
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RoomsResponse {
    pub data: Vec<Room>,
}

/// Create response; the server may or may not echo the stored room
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RoomEnvelope {
    #[serde(default)]
    pub data: Option<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn room_reads_mongo_style_id() {
        let room: Room = serde_json::from_value(json!({"_id": "r1", "name": "A", "isUsed": true})).unwrap();
        assert_eq!(room, Room::new("r1", "A", true));
    }

    #[test]
    fn list_tolerates_rooms_carrying_both_id_keys() {
        let rooms: RoomsResponse = serde_json::from_value(json!({
            "data": [{"_id": "r1", "id": "r1", "name": "A", "isUsed": true}]
        }))
        .unwrap();
        assert_eq!(rooms.data, vec![Room::new("r1", "A", true)]);
    }

    #[test]
    fn draft_room_serializes_without_id() {
        let room = Room::from_draft(&RoomDraft::new("B", false));
        assert_eq!(serde_json::to_value(&room).unwrap(), json!({"name": "B", "isUsed": false}));
    }

    #[test]
    fn update_body_always_carries_status_true() {
        let body = RoomUpdate::from(&Room::new("r1", "Board", false));
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"isUsed": false, "name": "Board", "status": true}));
    }

    #[test]
    fn create_envelope_tolerates_missing_data() {
        let env: RoomEnvelope = serde_json::from_value(json!({"message": "created"})).unwrap();
        assert_eq!(env.data, None);
    }

    #[test]
    fn usage_labels() {
        assert_eq!(Room::new("r", "n", true).usage_label(), "ใช้งาน");
        assert_eq!(usage_label(false), "ปิดใช้งาน");
    }
}
