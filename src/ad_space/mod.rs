use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity_id::{EntityId, EntityMarker};
use crate::media_type::MediaTypeId;

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type AdSpaceId = EntityId<AdSpace>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdSpace {
    #[serde(rename = "_id")]
    pub id: AdSpaceId,
    pub campaign_name: String,
    pub duration: String,
    pub impressions: i64,
    pub clicks: i64,
    pub media_type_id: MediaTypeId,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub modified_at: DateTime<Utc>,
}

impl EntityMarker for AdSpace {
    fn prefix() -> &'static str {
        "ADS"
    }
}
