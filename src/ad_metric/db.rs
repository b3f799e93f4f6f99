use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{bson, Database};

use crate::ad_space::AdSpaceId;
use crate::database::MongoAdMetricStore;
use crate::error::Error;

use super::{AdMetric, AdMetricId};

const AD_METRICS: &str = "ad_metrics";

pub async fn initialize(db: &Database) -> Result<(), Error> {
    db.run_command(
        bson::doc! {
            "createIndexes": AD_METRICS,
            "indexes": [
                { "key": { "ad_space_id": 1 }, "name": "by_ad_space_id" },
            ]
        },
        None,
    )
    .await?;

    Ok(())
}

#[async_trait]
pub trait AdMetricStore {
    async fn insert_ad_metric(&self, ad_metric: &AdMetric) -> Result<(), Error>;

    async fn fetch_ad_metrics(&self) -> Result<Vec<AdMetric>, Error>;

    async fn fetch_ad_metrics_by_ad_space(
        &self,
        ad_space_id: AdSpaceId,
    ) -> Result<Vec<AdMetric>, Error>;

    async fn fetch_ad_metric_by_id(
        &self,
        ad_metric_id: AdMetricId,
    ) -> Result<Option<AdMetric>, Error>;

    async fn update_ad_metric(&self, ad_metric: AdMetric) -> Result<AdMetric, Error>;

    async fn delete_ad_metric(&self, ad_metric_id: AdMetricId) -> Result<(), Error>;
}

#[async_trait]
impl AdMetricStore for MongoAdMetricStore {
    #[tracing::instrument(skip(self))]
    async fn insert_ad_metric(&self, ad_metric: &AdMetric) -> Result<(), Error> {
        self.insert_one(ad_metric, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_ad_metrics(&self) -> Result<Vec<AdMetric>, Error> {
        let ad_metrics: Vec<AdMetric> =
            self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(ad_metrics)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_ad_metrics_by_ad_space(
        &self,
        ad_space_id: AdSpaceId,
    ) -> Result<Vec<AdMetric>, Error> {
        // newest readings first
        let options = FindOptions::builder()
            .sort(bson::doc! { "created_at": -1 })
            .build();

        let ad_metrics: Vec<AdMetric> = self
            .find(bson::doc! { "ad_space_id": ad_space_id }, options)
            .await?
            .try_collect()
            .await?;

        Ok(ad_metrics)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_ad_metric_by_id(
        &self,
        ad_metric_id: AdMetricId,
    ) -> Result<Option<AdMetric>, Error> {
        let ad_metric: Option<AdMetric> = self
            .find_one(bson::doc! { "_id": ad_metric_id }, None)
            .await?;

        Ok(ad_metric)
    }

    #[tracing::instrument(skip(self))]
    async fn update_ad_metric(&self, mut ad_metric: AdMetric) -> Result<AdMetric, Error> {
        let now = Utc::now();
        let new_modified_at = bson::DateTime::from_chrono(now);

        let result = self
            .update_one(
                bson::doc! { "_id": ad_metric.id },
                bson::doc! { "$set": {
                    "ad_space_id": ad_metric.ad_space_id,
                    "name": ad_metric.name.as_str(),
                    "value": ad_metric.value,
                    "modified_at": new_modified_at,
                } },
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(Error::AdMetricNotFound {
                ad_metric_id: ad_metric.id,
            });
        }

        ad_metric.modified_at = now;

        Ok(ad_metric)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_ad_metric(&self, ad_metric_id: AdMetricId) -> Result<(), Error> {
        let result = self
            .delete_one(bson::doc! { "_id": ad_metric_id }, None)
            .await?;

        if result.deleted_count == 0 {
            return Err(Error::AdMetricNotFound { ad_metric_id });
        }

        Ok(())
    }
}
