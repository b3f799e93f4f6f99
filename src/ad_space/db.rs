use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson, Database};

use crate::database::MongoAdSpaceStore;
use crate::error::Error;

use super::{AdSpace, AdSpaceId};

const AD_SPACES: &str = "ad_spaces";

pub async fn initialize(db: &Database) -> Result<(), Error> {
    db.run_command(
        bson::doc! {
            "createIndexes": AD_SPACES,
            "indexes": [
                { "key": { "media_type_id": 1 }, "name": "by_media_type_id" },
            ]
        },
        None,
    )
    .await?;

    Ok(())
}

#[async_trait]
pub trait AdSpaceStore {
    async fn insert_ad_space(&self, ad_space: &AdSpace) -> Result<(), Error>;

    async fn fetch_ad_spaces(&self) -> Result<Vec<AdSpace>, Error>;

    async fn fetch_ad_space_by_id(&self, ad_space_id: AdSpaceId)
        -> Result<Option<AdSpace>, Error>;

    async fn update_ad_space(&self, ad_space: AdSpace) -> Result<AdSpace, Error>;

    async fn delete_ad_space(&self, ad_space_id: AdSpaceId) -> Result<(), Error>;
}

#[async_trait]
impl AdSpaceStore for MongoAdSpaceStore {
    #[tracing::instrument(skip(self))]
    async fn insert_ad_space(&self, ad_space: &AdSpace) -> Result<(), Error> {
        self.insert_one(ad_space, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_ad_spaces(&self) -> Result<Vec<AdSpace>, Error> {
        let ad_spaces: Vec<AdSpace> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(ad_spaces)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_ad_space_by_id(
        &self,
        ad_space_id: AdSpaceId,
    ) -> Result<Option<AdSpace>, Error> {
        let ad_space: Option<AdSpace> =
            self.find_one(bson::doc! { "_id": ad_space_id }, None).await?;

        Ok(ad_space)
    }

    #[tracing::instrument(skip(self))]
    async fn update_ad_space(&self, mut ad_space: AdSpace) -> Result<AdSpace, Error> {
        let now = Utc::now();
        let new_modified_at = bson::DateTime::from_chrono(now);

        let result = self
            .update_one(
                bson::doc! { "_id": ad_space.id },
                bson::doc! { "$set": {
                    "campaign_name": ad_space.campaign_name.as_str(),
                    "duration": ad_space.duration.as_str(),
                    "impressions": ad_space.impressions,
                    "clicks": ad_space.clicks,
                    "media_type_id": ad_space.media_type_id,
                    "modified_at": new_modified_at,
                } },
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(Error::AdSpaceNotFound {
                ad_space_id: ad_space.id,
            });
        }

        ad_space.modified_at = now;

        Ok(ad_space)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_ad_space(&self, ad_space_id: AdSpaceId) -> Result<(), Error> {
        let result = self.delete_one(bson::doc! { "_id": ad_space_id }, None).await?;

        if result.deleted_count == 0 {
            return Err(Error::AdSpaceNotFound { ad_space_id });
        }

        Ok(())
    }
}
