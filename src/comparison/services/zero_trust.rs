use crate::comparison::domain::{MaturityLevel, VendorRecord, ZeroTrustAssessment};
use crate::comparison::policies::CalculationConstants;

use super::risk_scorer::clamp_score;

/// Feature category blended into the maturity score
const ZERO_TRUST_CATEGORY: &str = "zero_trust";

/// ZeroTrustClassifier - maturity level from the vendor's zero-trust score
/// and its zero-trust feature coverage
pub struct ZeroTrustClassifier;

impl ZeroTrustClassifier {
    pub fn assess(
        vendor: &VendorRecord,
        constants: &CalculationConstants,
    ) -> ZeroTrustAssessment {
        let vendor_score = vendor.security.zero_trust_score;
        let score = match vendor.category_coverage(ZERO_TRUST_CATEGORY) {
            Some(coverage) => {
                let weight = constants.zero_trust_vendor_weight;
                weight * vendor_score + (1.0 - weight) * coverage
            }
            None => vendor_score,
        };
        let score = clamp_score(score);

        let category_coverage = vendor
            .features
            .keys()
            .filter_map(|category| {
                vendor
                    .category_coverage(category)
                    .map(|coverage| (category.clone(), coverage))
            })
            .collect();

        ZeroTrustAssessment {
            score,
            level: Self::classify(score, &constants.maturity_thresholds),
            category_coverage,
        }
    }

    pub fn classify(score: f64, thresholds: &[f64; 4]) -> MaturityLevel {
        let [developing, defined, managed, optimized] = *thresholds;
        if score >= optimized {
            MaturityLevel::Optimized
        } else if score >= managed {
            MaturityLevel::Managed
        } else if score >= defined {
            MaturityLevel::Defined
        } else if score >= developing {
            MaturityLevel::Developing
        } else {
            MaturityLevel::Initial
        }
    }
}
