use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// A status row. Statuses are data: new ones can be inserted without code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderStatusModel {
    pub id: Uuid,
    pub name: String,
}

impl OrderStatusModel {
    pub fn known(&self) -> Option<KnownOrderStatus> {
        KnownOrderStatus::from_name(&self.name)
    }
}

/// Statuses the code refers to by name.
///
/// Stored names are matched exactly (case-sensitive). Rows whose name is not
/// listed here are still valid statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownOrderStatus {
    Created,
    InProgress,
    Completed,
}

impl KnownOrderStatus {
    pub const ALL: [KnownOrderStatus; 3] = [
        KnownOrderStatus::Created,
        KnownOrderStatus::InProgress,
        KnownOrderStatus::Completed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KnownOrderStatus::Created => "Created",
            KnownOrderStatus::InProgress => "In Progress",
            KnownOrderStatus::Completed => "Completed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.name() == name)
    }
}

impl std::fmt::Display for KnownOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
