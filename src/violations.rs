use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Violation {
    NegativeImpressions { impressions: i64 },
    NegativeClicks { clicks: i64 },
}

pub fn check_ad_space_counts(impressions: i64, clicks: i64) -> Vec<Violation> {
    let mut violations = vec![];

    if impressions < 0 {
        violations.push(Violation::NegativeImpressions { impressions });
    }
    if clicks < 0 {
        violations.push(Violation::NegativeClicks { clicks });
    }

    violations
}
