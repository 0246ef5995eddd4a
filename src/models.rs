use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Rotina";

/// Identity of a goal within a session.
///
/// `Local` keys are handed out by the session for goals the remote store has
/// not acknowledged yet; `Remote` keys carry the server id. The two spaces
/// never overlap, so a provisional goal can't shadow a persisted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum GoalKey {
    Local(u64),
    Remote(i64),
}

impl GoalKey {
    pub fn remote_id(self) -> Option<i64> {
        match self {
            GoalKey::Remote(id) => Some(id),
            GoalKey::Local(_) => None,
        }
    }
}

/// Whether the last local mutation of a goal was confirmed by the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncState {
    #[default]
    Synced,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub key: GoalKey,
    pub title: String,
    pub category: String,
    pub completed: bool,
    pub sync: SyncState,
}

impl Goal {
    /// Optimistic entry inserted before the create call resolves.
    pub fn provisional(key: GoalKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            category: DEFAULT_CATEGORY.to_string(),
            completed: false,
            sync: SyncState::Pending,
        }
    }
}

impl From<RemoteMeta> for Goal {
    fn from(meta: RemoteMeta) -> Self {
        Self {
            key: GoalKey::Remote(meta.id),
            title: meta.title,
            category: meta.category,
            completed: meta.completed,
            sync: SyncState::Synced,
        }
    }
}

/// Goal as the remote store encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMeta {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "concluida")]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMetaRequest {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "data")]
    pub date: NaiveDate,
}

impl CreateMetaRequest {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            category: DEFAULT_CATEGORY.to_string(),
            date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleMetaRequest {
    #[serde(rename = "concluida")]
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddGoalRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ShiftDayRequest {
    pub delta: i64,
}

#[derive(Debug, Deserialize)]
pub struct ToggleGoalRequest {
    pub key: GoalKey,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct DeleteGoalRequest {
    pub key: GoalKey,
    #[serde(default)]
    pub confirmed: bool,
}
