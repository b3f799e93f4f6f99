use chrono::Utc;

use crate::database::Database;
use crate::error::Error;
use crate::media_type::MediaTypeId;
use crate::violations;

use super::{AdSpace, AdSpaceId};

#[tracing::instrument(skip(db))]
pub async fn create_ad_space(
    db: &dyn Database,
    campaign_name: String,
    duration: String,
    impressions: i64,
    clicks: i64,
    media_type_id: MediaTypeId,
) -> Result<AdSpace, Error> {
    let violations = violations::check_ad_space_counts(impressions, clicks);
    if !violations.is_empty() {
        return Err(Error::AdSpaceViolatesRules { violations });
    }

    let now = Utc::now();
    let ad_space = AdSpace {
        id: AdSpaceId::new(),
        campaign_name,
        duration,
        impressions,
        clicks,
        media_type_id,
        created_at: now,
        modified_at: now,
    };

    db.ad_spaces().insert_ad_space(&ad_space).await?;

    Ok(ad_space)
}

#[tracing::instrument(skip(db))]
pub async fn get_ad_spaces(db: &dyn Database) -> Result<Vec<AdSpace>, Error> {
    let ad_spaces = db.ad_spaces().fetch_ad_spaces().await?;

    Ok(ad_spaces)
}

#[tracing::instrument(skip(db))]
pub async fn get_ad_space_by_id(
    db: &dyn Database,
    ad_space_id: AdSpaceId,
) -> Result<Option<AdSpace>, Error> {
    let ad_space = db.ad_spaces().fetch_ad_space_by_id(ad_space_id).await?;

    Ok(ad_space)
}

#[tracing::instrument(skip(db))]
pub async fn expect_ad_space_by_id(
    db: &dyn Database,
    ad_space_id: AdSpaceId,
) -> Result<AdSpace, Error> {
    let ad_space = db
        .ad_spaces()
        .fetch_ad_space_by_id(ad_space_id)
        .await?
        .ok_or(Error::AdSpaceNotFound { ad_space_id })?;

    Ok(ad_space)
}

#[tracing::instrument(skip(db))]
pub async fn update_ad_space(
    db: &dyn Database,
    ad_space_id: AdSpaceId,
    campaign_name: Option<String>,
    duration: Option<String>,
    impressions: Option<i64>,
    clicks: Option<i64>,
    media_type_id: Option<MediaTypeId>,
) -> Result<AdSpace, Error> {
    let mut ad_space = expect_ad_space_by_id(db, ad_space_id).await?;

    if let Some(campaign_name) = campaign_name {
        ad_space.campaign_name = campaign_name;
    }
    if let Some(duration) = duration {
        ad_space.duration = duration;
    }
    if let Some(impressions) = impressions {
        ad_space.impressions = impressions;
    }
    if let Some(clicks) = clicks {
        ad_space.clicks = clicks;
    }
    if let Some(media_type_id) = media_type_id {
        ad_space.media_type_id = media_type_id;
    }

    let violations = violations::check_ad_space_counts(ad_space.impressions, ad_space.clicks);
    if !violations.is_empty() {
        return Err(Error::AdSpaceViolatesRules { violations });
    }

    let ad_space = db.ad_spaces().update_ad_space(ad_space).await?;

    Ok(ad_space)
}

#[tracing::instrument(skip(db))]
pub async fn delete_ad_space(db: &dyn Database, ad_space_id: AdSpaceId) -> Result<(), Error> {
    db.ad_spaces().delete_ad_space(ad_space_id).await?;

    Ok(())
}
