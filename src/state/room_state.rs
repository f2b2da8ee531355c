// ============================================================================
// ROOM STATE - Room page view state
// ============================================================================

use crate::models::{Room, RoomId};

/// Loading -> Ready | Error. Error is terminal for the page visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomListState {
    Loading,
    Error(String),
    Ready(Vec<Room>),
}

impl Default for RoomListState {
    fn default() -> Self {
        RoomListState::Loading
    }
}

impl RoomListState {
    pub fn rooms(&self) -> Option<&[Room]> {
        match self {
            RoomListState::Ready(rooms) => Some(rooms),
            _ => None,
        }
    }

    /// Append at the end; ignored outside `Ready`
    pub fn append(&mut self, room: Room) -> bool {
        match self {
            RoomListState::Ready(rooms) => {
                rooms.push(room);
                true
            }
            _ => false,
        }
    }

    /// Replace the row holding `id`, wherever it sits now
    pub fn replace(&mut self, id: &RoomId, room: Room) -> bool {
        let RoomListState::Ready(rooms) = self else {
            return false;
        };
        match rooms.iter().position(|r| r.id.as_ref() == Some(id)) {
            Some(index) => {
                rooms[index] = room;
                true
            }
            None => false,
        }
    }
}

/// Which row, if any, is open for input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    Idle,
    Adding,
    Editing(RoomId),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UsageFilter {
    #[default]
    Any,
    Used,
    Unused,
}

impl UsageFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "true" => UsageFilter::Used,
            "false" => UsageFilter::Unused,
            _ => UsageFilter::Any,
        }
    }
}

/// Per-column table filter; view-only
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub name: String,
    pub usage: UsageFilter,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        let needle = self.name.trim().to_lowercase();
        let name_ok = needle.is_empty() || room.name.to_lowercase().contains(&needle);
        let usage_ok = match self.usage {
            UsageFilter::Any => true,
            UsageFilter::Used => room.is_used,
            UsageFilter::Unused => !room.is_used,
        };
        name_ok && usage_ok
    }

    /// Matching rows in collection order
    pub fn apply<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        rooms.iter().filter(|room| self.matches(room)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomPageState {
    pub list: RoomListState,
    /// Last failed create/update; shown inline, the table stays usable
    pub mutation_error: Option<String>,
    pub row_mode: RowMode,
    /// A create or update is in flight
    pub saving: bool,
    pub filter: RoomFilter,
}
