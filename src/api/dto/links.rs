//! DTOs for link listing and deletion.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// JSON representation of an owned link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    pub id: i64,
    pub short_code: String,
    #[serde(rename = "targetURL")]
    pub target_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_code: link.code,
            target_url: link.target_url,
            visits: link.visits,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Response reporting whether a deletion occurred.
///
/// `deleted: false` covers both an unknown id and someone else's link;
/// the shape is identical so ownership cannot be probed.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
