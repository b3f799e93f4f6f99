use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity_id::{EntityId, EntityMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type MediaTypeId = EntityId<MediaType>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MediaType {
    #[serde(rename = "_id")]
    pub id: MediaTypeId,
    pub name: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub modified_at: DateTime<Utc>,
}

impl EntityMarker for MediaType {
    fn prefix() -> &'static str {
        "MDT"
    }
}
