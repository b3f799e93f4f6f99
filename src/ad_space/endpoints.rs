use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, route, HttpResponse};
use chrono::{DateTime, Utc};
use futures::{stream, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;
use crate::media_type::{MediaTypeBody, MediaTypeId};

use super::{manager, AdSpace, AdSpaceId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAdSpaceBody {
    pub campaign_name: String,
    pub duration: String,
    pub impressions: i64,
    pub clicks: i64,
    pub media_type_id: MediaTypeId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateAdSpaceBody {
    pub campaign_name: Option<String>,
    pub duration: Option<String>,
    pub impressions: Option<i64>,
    pub clicks: Option<i64>,
    pub media_type_id: Option<MediaTypeId>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdSpaceBody {
    pub id: AdSpaceId,
    pub campaign_name: String,
    pub duration: String,
    pub impressions: i64,
    pub clicks: i64,
    pub media_type_id: MediaTypeId,
    pub media_type: Option<MediaTypeBody>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl AdSpaceBody {
    pub async fn render(db: &dyn Database, ad_space: AdSpace) -> Result<AdSpaceBody, Error> {
        let media_type = db
            .media_types()
            .fetch_media_type_by_id(ad_space.media_type_id)
            .await?
            .map(MediaTypeBody::render);

        Ok(AdSpaceBody {
            id: ad_space.id,
            campaign_name: ad_space.campaign_name,
            duration: ad_space.duration,
            impressions: ad_space.impressions,
            clicks: ad_space.clicks,
            media_type_id: ad_space.media_type_id,
            media_type,
            created_at: ad_space.created_at,
            modified_at: ad_space.modified_at,
        })
    }
}

#[post("/adspaces")]
#[tracing::instrument(skip(db))]
pub async fn create_ad_space(
    db: Data<Box<dyn Database>>,
    body: Json<CreateAdSpaceBody>,
) -> Result<HttpResponse, Error> {
    let body = body.into_inner();

    let ad_space = manager::create_ad_space(
        &***db,
        body.campaign_name,
        body.duration,
        body.impressions,
        body.clicks,
        body.media_type_id,
    )
    .await?;

    let body = AdSpaceBody::render(&***db, ad_space).await?;

    Ok(HttpResponse::Created().json(body))
}

#[get("/adspaces")]
#[tracing::instrument(skip(db))]
pub async fn get_ad_spaces(db: Data<Box<dyn Database>>) -> Result<Json<Vec<AdSpaceBody>>, Error> {
    let ad_spaces = manager::get_ad_spaces(&***db).await?;

    let body = stream::iter(ad_spaces)
        .then(|ad_space| AdSpaceBody::render(&***db, ad_space))
        .try_collect()
        .await?;

    Ok(Json(body))
}

#[get("/adspaces/{ad_space_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_ad_space_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<AdSpaceId>,
) -> Result<Json<AdSpaceBody>, Error> {
    let ad_space_id = params.into_inner();

    let ad_space = manager::get_ad_space_by_id(&***db, ad_space_id)
        .await?
        .ok_or(Error::AdSpaceNotFound { ad_space_id })?;

    Ok(Json(AdSpaceBody::render(&***db, ad_space).await?))
}

#[route("/adspaces/{ad_space_id}", method = "PUT", method = "PATCH")]
#[tracing::instrument(skip(db))]
pub async fn update_ad_space_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<AdSpaceId>,
    body: Json<UpdateAdSpaceBody>,
) -> Result<Json<AdSpaceBody>, Error> {
    let ad_space_id = params.into_inner();
    let body = body.into_inner();

    let ad_space = manager::update_ad_space(
        &***db,
        ad_space_id,
        body.campaign_name,
        body.duration,
        body.impressions,
        body.clicks,
        body.media_type_id,
    )
    .await?;

    Ok(Json(AdSpaceBody::render(&***db, ad_space).await?))
}

#[delete("/adspaces/{ad_space_id}")]
#[tracing::instrument(skip(db))]
pub async fn delete_ad_space_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<AdSpaceId>,
) -> Result<HttpResponse, Error> {
    let ad_space_id = params.into_inner();

    manager::delete_ad_space(&***db, ad_space_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use actix_web::App;

    use crate::database::test::MockDatabase;
    use crate::media_type::MediaType;

    use super::*;

    #[actix_rt::test]
    async fn post_returns_created_record_with_an_id() {
        let mut db = MockDatabase::new();
        db.ad_spaces.on_insert_ad_space = Box::new(|_| Ok(()));
        db.media_types.on_fetch_media_type_by_id = Box::new(|media_type_id| {
            let now = Utc::now();
            Ok(Some(MediaType {
                id: media_type_id,
                name: "Banner".to_string(),
                created_at: now,
                modified_at: now,
            }))
        });
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(create_ad_space),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/adspaces")
            .set_json(&CreateAdSpaceBody {
                campaign_name: "Spring Sale".to_string(),
                duration: "30d".to_string(),
                impressions: 1000,
                clicks: 50,
                media_type_id: MediaTypeId::new(),
            })
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: AdSpaceBody = test::read_body_json(response).await;
        assert_eq!(body.campaign_name, "Spring Sale".to_string());
        assert_eq!(body.duration, "30d".to_string());
        assert_eq!(body.impressions, 1000);
        assert_eq!(body.clicks, 50);
        assert_eq!(body.media_type.unwrap().name, "Banner".to_string());
    }

    #[actix_rt::test]
    async fn post_with_negative_impressions_returns_400() {
        let db = MockDatabase::new();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(create_ad_space),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/adspaces")
            .set_json(&CreateAdSpaceBody {
                campaign_name: "Spring Sale".to_string(),
                duration: "30d".to_string(),
                impressions: -5,
                clicks: 50,
                media_type_id: MediaTypeId::new(),
            })
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error_code"], "E4001002");
        assert_eq!(
            body["error_meta"]["violations"][0]["type"],
            "NEGATIVE-IMPRESSIONS"
        );
    }

    #[actix_rt::test]
    async fn get_of_an_unknown_id_returns_404() {
        let mut db = MockDatabase::new();
        db.ad_spaces.on_fetch_ad_space_by_id = Box::new(|_| Ok(None));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(get_ad_space_by_id),
        )
        .await;

        let request = test::TestRequest::get()
            .uri(&format!("/adspaces/{}", AdSpaceId::new()))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error_code"], "E4041001");
    }

    #[actix_rt::test]
    async fn put_merges_partial_fields_into_the_record() {
        let mut db = MockDatabase::new();
        db.ad_spaces.on_fetch_ad_space_by_id = Box::new(|ad_space_id| {
            let now = Utc::now();
            Ok(Some(AdSpace {
                id: ad_space_id,
                campaign_name: "Spring Sale".to_string(),
                duration: "30d".to_string(),
                impressions: 1000,
                clicks: 50,
                media_type_id: MediaTypeId::new(),
                created_at: now,
                modified_at: now,
            }))
        });
        db.ad_spaces.on_update_ad_space = Box::new(|ad_space| Ok(ad_space));
        db.media_types.on_fetch_media_type_by_id = Box::new(|_| Ok(None));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(update_ad_space_by_id),
        )
        .await;

        let request = test::TestRequest::put()
            .uri(&format!("/adspaces/{}", AdSpaceId::new()))
            .set_json(&serde_json::json!({ "impressions": 2500 }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: AdSpaceBody = test::read_body_json(response).await;
        assert_eq!(body.impressions, 2500);
        assert_eq!(body.clicks, 50);
        assert_eq!(body.campaign_name, "Spring Sale".to_string());
        assert!(body.media_type.is_none());
    }

    #[actix_rt::test]
    async fn delete_returns_204_when_the_record_existed() {
        let mut db = MockDatabase::new();
        db.ad_spaces.on_delete_ad_space = Box::new(|_| Ok(()));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(delete_ad_space_by_id),
        )
        .await;

        let request = test::TestRequest::delete()
            .uri(&format!("/adspaces/{}", AdSpaceId::new()))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[actix_rt::test]
    async fn delete_of_an_unknown_id_returns_404() {
        let mut db = MockDatabase::new();
        db.ad_spaces.on_delete_ad_space =
            Box::new(|ad_space_id| Err(Error::AdSpaceNotFound { ad_space_id }));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(delete_ad_space_by_id),
        )
        .await;

        let request = test::TestRequest::delete()
            .uri(&format!("/adspaces/{}", AdSpaceId::new()))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
