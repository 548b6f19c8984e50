use crate::comparison::domain::{
    AnalysisConfiguration, ComplianceMetrics, CoverageLevel, FrameworkScore, VendorRecord,
};
use crate::comparison::policies::IndustryProfiles;
use std::collections::BTreeMap;

use super::risk_scorer::clamp_score;

/// ComplianceScorer - coverage of the frameworks the industry must meet
///
/// Coverage levels map to 100/75/50/25/0. Scores are weighted by the
/// industry's framework weights; a framework the vendor does not list
/// counts as no coverage and no automation.
pub struct ComplianceScorer;

impl ComplianceScorer {
    pub fn compute(
        vendor: &VendorRecord,
        config: &AnalysisConfiguration,
        industries: &IndustryProfiles,
    ) -> ComplianceMetrics {
        let profile = industries.profile(config.industry());

        let mut frameworks = BTreeMap::new();
        let mut gaps = Vec::new();
        let mut coverage_sum = 0.0;
        let mut automation_sum = 0.0;
        let mut total_weight = 0.0;

        for (framework, weight) in &profile.frameworks {
            let (coverage, automation) = match vendor.compliance.get(framework) {
                Some(support) => (support.coverage, support.automation),
                None => (CoverageLevel::None, 0.0),
            };
            if coverage != CoverageLevel::Full {
                gaps.push(*framework);
            }

            frameworks.insert(
                *framework,
                FrameworkScore {
                    weight: *weight,
                    coverage: coverage.score(),
                    automation,
                },
            );
            coverage_sum += coverage.score() * weight;
            automation_sum += automation * weight;
            total_weight += weight;
        }

        let (score, automation_score) = if total_weight > 0.0 {
            (coverage_sum / total_weight, automation_sum / total_weight)
        } else {
            (0.0, 0.0)
        };

        ComplianceMetrics {
            score: clamp_score(score),
            automation_score: clamp_score(automation_score),
            frameworks,
            gaps,
        }
    }
}
