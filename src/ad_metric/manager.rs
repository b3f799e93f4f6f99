use chrono::Utc;

use crate::ad_space::{AdSpace, AdSpaceId};
use crate::database::Database;
use crate::error::Error;

use super::{AdMetric, AdMetricId};

#[tracing::instrument(skip(db))]
pub async fn create_ad_metric(
    db: &dyn Database,
    ad_space_id: AdSpaceId,
    name: String,
    value: f64,
) -> Result<AdMetric, Error> {
    let now = Utc::now();
    let ad_metric = AdMetric {
        id: AdMetricId::new(),
        ad_space_id,
        name,
        value,
        created_at: now,
        modified_at: now,
    };

    db.ad_metrics().insert_ad_metric(&ad_metric).await?;

    Ok(ad_metric)
}

#[tracing::instrument(skip(db))]
pub async fn get_ad_metrics(db: &dyn Database) -> Result<Vec<AdMetric>, Error> {
    let ad_metrics = db.ad_metrics().fetch_ad_metrics().await?;

    Ok(ad_metrics)
}

#[tracing::instrument(skip(db, ad_space))]
pub async fn get_ad_metrics_by_ad_space(
    db: &dyn Database,
    ad_space: &AdSpace,
) -> Result<Vec<AdMetric>, Error> {
    let ad_metrics = db
        .ad_metrics()
        .fetch_ad_metrics_by_ad_space(ad_space.id)
        .await?;

    Ok(ad_metrics)
}

#[tracing::instrument(skip(db))]
pub async fn get_ad_metric_by_id(
    db: &dyn Database,
    ad_metric_id: AdMetricId,
) -> Result<Option<AdMetric>, Error> {
    let ad_metric = db.ad_metrics().fetch_ad_metric_by_id(ad_metric_id).await?;

    Ok(ad_metric)
}

#[tracing::instrument(skip(db))]
pub async fn expect_ad_metric_by_id(
    db: &dyn Database,
    ad_metric_id: AdMetricId,
) -> Result<AdMetric, Error> {
    let ad_metric = db
        .ad_metrics()
        .fetch_ad_metric_by_id(ad_metric_id)
        .await?
        .ok_or(Error::AdMetricNotFound { ad_metric_id })?;

    Ok(ad_metric)
}

#[tracing::instrument(skip(db))]
pub async fn update_ad_metric(
    db: &dyn Database,
    ad_metric_id: AdMetricId,
    ad_space_id: Option<AdSpaceId>,
    name: Option<String>,
    value: Option<f64>,
) -> Result<AdMetric, Error> {
    let mut ad_metric = expect_ad_metric_by_id(db, ad_metric_id).await?;

    if let Some(ad_space_id) = ad_space_id {
        ad_metric.ad_space_id = ad_space_id;
    }
    if let Some(name) = name {
        ad_metric.name = name;
    }
    if let Some(value) = value {
        ad_metric.value = value;
    }

    let ad_metric = db.ad_metrics().update_ad_metric(ad_metric).await?;

    Ok(ad_metric)
}

#[tracing::instrument(skip(db))]
pub async fn delete_ad_metric(db: &dyn Database, ad_metric_id: AdMetricId) -> Result<(), Error> {
    db.ad_metrics().delete_ad_metric(ad_metric_id).await?;

    Ok(())
}
