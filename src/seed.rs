use chrono::Utc;

use crate::ad_metric::{AdMetric, AdMetricId};
use crate::ad_space::AdSpace;
use crate::database::Database;
use crate::error::Error;
use crate::media_type::{MediaType, MediaTypeId};

pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    db.drop().await?;

    let banner_id = "MDT-52DE1C0E-5C38-4A0D-9A5B-0E3D0A8C41B7".parse().unwrap();
    let video_id = "MDT-B56A14E2-9C0A-4A5F-8D15-4B7E2F0C6D93".parse().unwrap();
    let ad_space1_id = "ADS-16E0B172-3D4B-45D1-B0A9-6C2E8F5D7A04".parse().unwrap();
    let ad_space2_id = "ADS-D9C07A88-1FE5-4E2C-A4D3-58B10C9E6F27".parse().unwrap();

    let now = Utc::now();
    let media_types = vec![
        MediaType {
            id: banner_id,
            name: "Banner".to_string(),
            created_at: now,
            modified_at: now,
        },
        MediaType {
            id: video_id,
            name: "Video".to_string(),
            created_at: now,
            modified_at: now,
        },
        MediaType {
            id: MediaTypeId::new(),
            name: "Native".to_string(),
            created_at: now,
            modified_at: now,
        },
    ];

    let ad_spaces = vec![
        AdSpace {
            id: ad_space1_id,
            campaign_name: "Spring Sale".to_string(),
            duration: "30d".to_string(),
            impressions: 1000,
            clicks: 50,
            media_type_id: banner_id,
            created_at: now,
            modified_at: now,
        },
        AdSpace {
            id: ad_space2_id,
            campaign_name: "Summer Clearance".to_string(),
            duration: "14d".to_string(),
            impressions: 48000,
            clicks: 1200,
            media_type_id: video_id,
            created_at: now,
            modified_at: now,
        },
    ];

    let ad_metrics = vec![
        AdMetric {
            id: AdMetricId::new(),
            ad_space_id: ad_space1_id,
            name: "reach".to_string(),
            value: 35000.0,
            created_at: now,
            modified_at: now,
        },
        AdMetric {
            id: AdMetricId::new(),
            ad_space_id: ad_space1_id,
            name: "engagement".to_string(),
            value: 0.042,
            created_at: now,
            modified_at: now,
        },
        AdMetric {
            id: AdMetricId::new(),
            ad_space_id: ad_space2_id,
            name: "reach".to_string(),
            value: 120000.0,
            created_at: now,
            modified_at: now,
        },
    ];

    for media_type in &media_types {
        db.media_types().insert_media_type(media_type).await?;
    }
    for ad_space in &ad_spaces {
        db.ad_spaces().insert_ad_space(ad_space).await?;
    }
    for ad_metric in &ad_metrics {
        db.ad_metrics().insert_ad_metric(ad_metric).await?;
    }

    Ok(())
}
