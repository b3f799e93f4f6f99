use chrono::Utc;

use crate::database::Database;
use crate::error::Error;

use super::{MediaType, MediaTypeId};

#[tracing::instrument(skip(db))]
pub async fn create_media_type(db: &dyn Database, name: String) -> Result<MediaType, Error> {
    let now = Utc::now();
    let media_type = MediaType {
        id: MediaTypeId::new(),
        name,
        created_at: now,
        modified_at: now,
    };

    db.media_types().insert_media_type(&media_type).await?;

    Ok(media_type)
}

#[tracing::instrument(skip(db))]
pub async fn get_media_types(db: &dyn Database) -> Result<Vec<MediaType>, Error> {
    let media_types = db.media_types().fetch_media_types().await?;

    Ok(media_types)
}

#[tracing::instrument(skip(db))]
pub async fn get_media_type_by_id(
    db: &dyn Database,
    media_type_id: MediaTypeId,
) -> Result<Option<MediaType>, Error> {
    let media_type = db.media_types().fetch_media_type_by_id(media_type_id).await?;

    Ok(media_type)
}

#[tracing::instrument(skip(db))]
pub async fn expect_media_type_by_id(
    db: &dyn Database,
    media_type_id: MediaTypeId,
) -> Result<MediaType, Error> {
    let media_type = db
        .media_types()
        .fetch_media_type_by_id(media_type_id)
        .await?
        .ok_or(Error::MediaTypeNotFound { media_type_id })?;

    Ok(media_type)
}

#[tracing::instrument(skip(db))]
pub async fn update_media_type(
    db: &dyn Database,
    media_type_id: MediaTypeId,
    name: Option<String>,
) -> Result<MediaType, Error> {
    let mut media_type = expect_media_type_by_id(db, media_type_id).await?;

    if let Some(name) = name {
        media_type.name = name;
    }

    let media_type = db.media_types().update_media_type(media_type).await?;

    Ok(media_type)
}

#[tracing::instrument(skip(db))]
pub async fn delete_media_type(
    db: &dyn Database,
    media_type_id: MediaTypeId,
) -> Result<(), Error> {
    db.media_types().delete_media_type(media_type_id).await?;

    Ok(())
}
