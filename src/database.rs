use async_trait::async_trait;
use mongodb::Collection;

use crate::ad_metric;
use crate::ad_metric::db::AdMetricStore;
use crate::ad_metric::AdMetric;
use crate::ad_space;
use crate::ad_space::db::AdSpaceStore;
use crate::ad_space::AdSpace;
use crate::error::Error;
use crate::media_type;
use crate::media_type::db::MediaTypeStore;
use crate::media_type::MediaType;

pub type MongoAdSpaceStore = Collection<AdSpace>;
pub type MongoMediaTypeStore = Collection<MediaType>;
pub type MongoAdMetricStore = Collection<AdMetric>;

#[async_trait]
pub trait Database: Send + Sync {
    fn ad_spaces(&self) -> &dyn AdSpaceStore;
    fn media_types(&self) -> &dyn MediaTypeStore;
    fn ad_metrics(&self) -> &dyn AdMetricStore;
    async fn drop(&self) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
pub struct MongoDatabase {
    ad_spaces: MongoAdSpaceStore,
    media_types: MongoMediaTypeStore,
    ad_metrics: MongoAdMetricStore,
    db: mongodb::Database,
}

impl MongoDatabase {
    pub async fn initialize(db: mongodb::Database) -> Result<MongoDatabase, Error> {
        ad_space::db::initialize(&db).await?;
        media_type::db::initialize(&db).await?;
        ad_metric::db::initialize(&db).await?;

        Ok(MongoDatabase {
            ad_spaces: db.collection("ad_spaces"),
            media_types: db.collection("media_types"),
            ad_metrics: db.collection("ad_metrics"),
            db,
        })
    }
}

#[async_trait]
impl Database for MongoDatabase {
    fn ad_spaces(&self) -> &dyn AdSpaceStore {
        &self.ad_spaces
    }

    fn media_types(&self) -> &dyn MediaTypeStore {
        &self.media_types
    }

    fn ad_metrics(&self) -> &dyn AdMetricStore {
        &self.ad_metrics
    }

    async fn drop(&self) -> Result<(), Error> {
        self.db.drop(None).await?;
        Ok(())
    }
}
