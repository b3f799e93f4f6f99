use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, route, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ad_space::{self, AdSpaceId};
use crate::database::Database;
use crate::error::Error;

use super::{manager, AdMetric, AdMetricId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAdMetricBody {
    pub ad_space_id: AdSpaceId,
    pub name: String,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateAdMetricBody {
    pub ad_space_id: Option<AdSpaceId>,
    pub name: Option<String>,
    pub value: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdMetricBody {
    pub id: AdMetricId,
    pub ad_space_id: AdSpaceId,
    pub name: String,
    pub value: f64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl AdMetricBody {
    pub fn render(ad_metric: AdMetric) -> AdMetricBody {
        AdMetricBody {
            id: ad_metric.id,
            ad_space_id: ad_metric.ad_space_id,
            name: ad_metric.name,
            value: ad_metric.value,
            created_at: ad_metric.created_at,
            modified_at: ad_metric.modified_at,
        }
    }
}

#[post("/admetrics")]
#[tracing::instrument(skip(db))]
pub async fn create_ad_metric(
    db: Data<Box<dyn Database>>,
    body: Json<CreateAdMetricBody>,
) -> Result<HttpResponse, Error> {
    let body = body.into_inner();

    let ad_metric =
        manager::create_ad_metric(&***db, body.ad_space_id, body.name, body.value).await?;

    Ok(HttpResponse::Created().json(AdMetricBody::render(ad_metric)))
}

#[get("/admetrics")]
#[tracing::instrument(skip(db))]
pub async fn get_ad_metrics(db: Data<Box<dyn Database>>) -> Result<Json<Vec<AdMetricBody>>, Error> {
    let ad_metrics = manager::get_ad_metrics(&***db).await?;

    let body = ad_metrics.into_iter().map(AdMetricBody::render).collect();

    Ok(Json(body))
}

#[get("/adspaces/{ad_space_id}/admetrics")]
#[tracing::instrument(skip(db))]
pub async fn get_ad_metrics_in_ad_space(
    db: Data<Box<dyn Database>>,
    params: Path<AdSpaceId>,
) -> Result<Json<Vec<AdMetricBody>>, Error> {
    let ad_space_id = params.into_inner();
    let ad_space = ad_space::manager::expect_ad_space_by_id(&***db, ad_space_id).await?;

    let ad_metrics = manager::get_ad_metrics_by_ad_space(&***db, &ad_space).await?;

    let body = ad_metrics.into_iter().map(AdMetricBody::render).collect();

    Ok(Json(body))
}

#[get("/admetrics/{ad_metric_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_ad_metric_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<AdMetricId>,
) -> Result<Json<AdMetricBody>, Error> {
    let ad_metric_id = params.into_inner();

    let ad_metric = manager::get_ad_metric_by_id(&***db, ad_metric_id)
        .await?
        .ok_or(Error::AdMetricNotFound { ad_metric_id })?;

    Ok(Json(AdMetricBody::render(ad_metric)))
}

#[route("/admetrics/{ad_metric_id}", method = "PUT", method = "PATCH")]
#[tracing::instrument(skip(db))]
pub async fn update_ad_metric_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<AdMetricId>,
    body: Json<UpdateAdMetricBody>,
) -> Result<Json<AdMetricBody>, Error> {
    let ad_metric_id = params.into_inner();
    let body = body.into_inner();

    let ad_metric =
        manager::update_ad_metric(&***db, ad_metric_id, body.ad_space_id, body.name, body.value)
            .await?;

    Ok(Json(AdMetricBody::render(ad_metric)))
}

#[delete("/admetrics/{ad_metric_id}")]
#[tracing::instrument(skip(db))]
pub async fn delete_ad_metric_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<AdMetricId>,
) -> Result<HttpResponse, Error> {
    let ad_metric_id = params.into_inner();

    manager::delete_ad_metric(&***db, ad_metric_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
