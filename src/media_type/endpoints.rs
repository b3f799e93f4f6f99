use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, route, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, MediaType, MediaTypeId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateMediaTypeBody {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateMediaTypeBody {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MediaTypeBody {
    pub id: MediaTypeId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl MediaTypeBody {
    pub fn render(media_type: MediaType) -> MediaTypeBody {
        MediaTypeBody {
            id: media_type.id,
            name: media_type.name,
            created_at: media_type.created_at,
            modified_at: media_type.modified_at,
        }
    }
}

#[post("/mediatypes")]
#[tracing::instrument(skip(db))]
pub async fn create_media_type(
    db: Data<Box<dyn Database>>,
    body: Json<CreateMediaTypeBody>,
) -> Result<HttpResponse, Error> {
    let body = body.into_inner();

    let media_type = manager::create_media_type(&***db, body.name).await?;

    Ok(HttpResponse::Created().json(MediaTypeBody::render(media_type)))
}

#[get("/mediatypes")]
#[tracing::instrument(skip(db))]
pub async fn get_media_types(
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<MediaTypeBody>>, Error> {
    let media_types = manager::get_media_types(&***db).await?;

    let body = media_types.into_iter().map(MediaTypeBody::render).collect();

    Ok(Json(body))
}

#[get("/mediatypes/{media_type_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_media_type_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<MediaTypeId>,
) -> Result<Json<MediaTypeBody>, Error> {
    let media_type_id = params.into_inner();

    let media_type = manager::get_media_type_by_id(&***db, media_type_id)
        .await?
        .ok_or(Error::MediaTypeNotFound { media_type_id })?;

    Ok(Json(MediaTypeBody::render(media_type)))
}

#[route("/mediatypes/{media_type_id}", method = "PUT", method = "PATCH")]
#[tracing::instrument(skip(db))]
pub async fn update_media_type_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<MediaTypeId>,
    body: Json<UpdateMediaTypeBody>,
) -> Result<Json<MediaTypeBody>, Error> {
    let media_type_id = params.into_inner();
    let body = body.into_inner();

    let media_type = manager::update_media_type(&***db, media_type_id, body.name).await?;

    Ok(Json(MediaTypeBody::render(media_type)))
}

#[delete("/mediatypes/{media_type_id}")]
#[tracing::instrument(skip(db))]
pub async fn delete_media_type_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<MediaTypeId>,
) -> Result<HttpResponse, Error> {
    let media_type_id = params.into_inner();

    manager::delete_media_type(&***db, media_type_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use actix_web::App;

    use crate::database::test::MockDatabase;

    use super::*;

    #[actix_rt::test]
    async fn post_returns_created_record_with_an_id() {
        let mut db = MockDatabase::new();
        db.media_types.on_insert_media_type = Box::new(|_| Ok(()));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(create_media_type),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/mediatypes")
            .set_json(&CreateMediaTypeBody {
                name: "Banner".to_string(),
            })
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: MediaTypeBody = test::read_body_json(response).await;
        assert_eq!(body.name, "Banner".to_string());
    }

    #[actix_rt::test]
    async fn get_of_an_unknown_id_returns_404() {
        let mut db = MockDatabase::new();
        db.media_types.on_fetch_media_type_by_id = Box::new(|_| Ok(None));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(get_media_type_by_id),
        )
        .await;

        let request = test::TestRequest::get()
            .uri(&format!("/mediatypes/{}", MediaTypeId::new()))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error_code"], "E4041002");
    }

    #[actix_rt::test]
    async fn put_replaces_the_name() {
        let mut db = MockDatabase::new();
        db.media_types.on_fetch_media_type_by_id = Box::new(|media_type_id| {
            let now = Utc::now();
            Ok(Some(MediaType {
                id: media_type_id,
                name: "Banner".to_string(),
                created_at: now,
                modified_at: now,
            }))
        });
        db.media_types.on_update_media_type = Box::new(|media_type| Ok(media_type));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Box::new(db) as Box<dyn Database>))
                .service(update_media_type_by_id),
        )
        .await;

        let request = test::TestRequest::put()
            .uri(&format!("/mediatypes/{}", MediaTypeId::new()))
            .set_json(&UpdateMediaTypeBody {
                name: Some("Interstitial".to_string()),
            })
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: MediaTypeBody = test::read_body_json(response).await;
        assert_eq!(body.name, "Interstitial".to_string());
    }
}
