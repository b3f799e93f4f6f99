use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ad_space::AdSpaceId;
use crate::entity_id::{EntityId, EntityMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type AdMetricId = EntityId<AdMetric>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdMetric {
    #[serde(rename = "_id")]
    pub id: AdMetricId,
    pub ad_space_id: AdSpaceId,
    pub name: String,
    pub value: f64,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub modified_at: DateTime<Utc>,
}

impl EntityMarker for AdMetric {
    fn prefix() -> &'static str {
        "MTR"
    }
}
