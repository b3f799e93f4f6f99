use actix_web::web::{self, Data, JsonConfig, PathConfig};
use actix_web::{App, HttpServer, ResponseError};
use mongodb::Client;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod ad_metric;
pub mod ad_space;
pub mod config;
pub mod database;
pub mod entity_id;
pub mod error;
pub mod media_type;
pub mod seed;
pub mod violations;

pub use ad_metric::{AdMetricBody, CreateAdMetricBody};
pub use ad_space::{AdSpaceBody, CreateAdSpaceBody};
pub use config::Config;
pub use error::Error;
pub use media_type::{CreateMediaTypeBody, MediaTypeBody};

use crate::database::{Database, MongoDatabase};

pub async fn run(config: Config) -> Result<(), Error> {
    info!("connecting to db: {}", config.mongodb_uri);
    let db = Client::with_uri_str(&config.mongodb_uri)
        .await?
        .database(&config.database_name);
    let db = MongoDatabase::initialize(db).await?;

    if config.seed {
        seed::seed(&db).await?;
    }

    info!("listening on {}", config.bind_address);
    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .wrap(TracingLogger::default())
            .service(ad_space::endpoints::create_ad_space)
            .service(ad_space::endpoints::get_ad_spaces)
            .service(ad_space::endpoints::get_ad_space_by_id)
            .service(ad_space::endpoints::update_ad_space_by_id)
            .service(ad_space::endpoints::delete_ad_space_by_id)
            .service(media_type::endpoints::create_media_type)
            .service(media_type::endpoints::get_media_types)
            .service(media_type::endpoints::get_media_type_by_id)
            .service(media_type::endpoints::update_media_type_by_id)
            .service(media_type::endpoints::delete_media_type_by_id)
            .service(ad_metric::endpoints::create_ad_metric)
            .service(ad_metric::endpoints::get_ad_metrics)
            .service(ad_metric::endpoints::get_ad_metrics_in_ad_space)
            .service(ad_metric::endpoints::get_ad_metric_by_id)
            .service(ad_metric::endpoints::update_ad_metric_by_id)
            .service(ad_metric::endpoints::delete_ad_metric_by_id)
            .default_service(web::to(|| async { Error::PathNotFound.error_response() }))
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await?;

    Ok(())
}
