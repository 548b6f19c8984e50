use super::business_value::BusinessValueCalculator;
use super::compliance_scorer::ComplianceScorer;
use super::financial_analysis::FinancialAnalyzer;
use super::operational::OperationalEstimator;
use super::recommendation::{RecommendationEngine, MIN_VENDORS_FOR_COMPARISON};
use super::risk_scorer::RiskScorer;
use super::roi_calculator::RoiCalculator;
use super::tco_calculator::TcoCalculator;
use super::zero_trust::ZeroTrustClassifier;
use crate::comparison::domain::{
    AggregationOutcome, AnalysisConfiguration, BusinessValue, CalculationResult, Comparison,
    ComparisonReport, ConfigurationInput, ConfigurationIssue, Metric, Tco, VendorDataset,
    VendorRecord,
};
use crate::comparison::policies::CalculationTables;

/// Cost a vendor's savings are measured against
#[derive(Debug, Clone)]
struct Baseline {
    cost: f64,
    /// Cost per year of the horizon
    yearly: Vec<f64>,
}

/// MetricsAggregator - one `CalculationResult` per selected vendor
///
/// Holds the dataset and calculation tables by reference; every call is a
/// pure function of its input, so repeated calls give identical reports.
pub struct MetricsAggregator<'a> {
    dataset: &'a VendorDataset,
    tables: &'a CalculationTables,
}

impl<'a> MetricsAggregator<'a> {
    pub fn new(dataset: &'a VendorDataset, tables: &'a CalculationTables) -> Self {
        Self { dataset, tables }
    }

    /// Validates raw input, then evaluates it.
    pub fn aggregate(&self, input: &ConfigurationInput) -> AggregationOutcome {
        match input.validate() {
            Ok(config) => self.evaluate(&config),
            Err(issues) => {
                tracing::info!(count = issues.len(), "configuration rejected");
                AggregationOutcome::InsufficientConfiguration { issues }
            }
        }
    }

    /// Computes results for the selected vendors in selection order.
    ///
    /// Vendors missing from the dataset are skipped with a warning. Savings,
    /// ROI and the recommendation need at least two known vendors and are
    /// reported as insufficient data otherwise.
    pub fn evaluate(&self, config: &AnalysisConfiguration) -> AggregationOutcome {
        let mut selected: Vec<&VendorRecord> = Vec::new();
        let mut skipped = Vec::new();
        for id in config.vendors() {
            match self.dataset.get(id) {
                Some(vendor) => selected.push(vendor),
                None => {
                    tracing::warn!(
                        vendor = %id,
                        dataset = self.dataset.version(),
                        "unknown vendor id, skipping"
                    );
                    skipped.push(id.clone());
                }
            }
        }

        let mut issues = Vec::new();
        if selected.is_empty() {
            issues.push(ConfigurationIssue::NoKnownVendors {
                dataset_version: self.dataset.version().to_string(),
            });
        }
        if let Some(baseline) = config.baseline_vendor() {
            if skipped.contains(baseline) {
                issues.push(ConfigurationIssue::UnknownBaselineVendor {
                    vendor: baseline.to_string(),
                });
            }
        }
        if !issues.is_empty() {
            return AggregationOutcome::InsufficientConfiguration { issues };
        }

        let mut results: Vec<CalculationResult> = selected
            .iter()
            .map(|vendor| self.compute_base(vendor, config))
            .collect();

        let constants = &self.tables.constants;
        let tcos: Vec<Tco> = results.iter().map(|r| r.tco.clone()).collect();
        for (index, result) in results.iter_mut().enumerate() {
            let baseline = self.baseline(index, &tcos, config);
            let vendor_cost = result.tco.total;
            result.roi = baseline
                .clone()
                .map(|b| RoiCalculator::compute(vendor_cost, config, b.cost));
            result.financials = baseline
                .map(|b| FinancialAnalyzer::analyze(&result.tco, &b.yearly, config, constants));
            result.business_value = BusinessValueCalculator::compute(result, config, self.tables);
        }

        let recommendation = RecommendationEngine::recommend(
            &results,
            &self.tables.constants.recommendation_weights,
        );

        AggregationOutcome::Computed(ComparisonReport {
            dataset_version: self.dataset.version().to_string(),
            configuration: config.clone(),
            results,
            skipped_vendors: skipped,
            recommendation,
        })
    }

    fn compute_base(
        &self,
        vendor: &VendorRecord,
        config: &AnalysisConfiguration,
    ) -> CalculationResult {
        let constants = &self.tables.constants;
        let industries = &self.tables.industries;

        let tco = TcoCalculator::compute(vendor, config, constants);
        let risk = RiskScorer::compute(vendor, config, industries);

        CalculationResult {
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            per_device_per_month: TcoCalculator::per_device_per_month(&tco, config),
            roi: Comparison::insufficient("not yet compared"),
            financials: Comparison::insufficient("not yet compared"),
            cost_per_security_point: Metric::ratio(tco.total, risk.security_score),
            compliance: ComplianceScorer::compute(vendor, config, industries),
            operational: OperationalEstimator::operational(vendor, constants),
            timeline: OperationalEstimator::timeline(vendor),
            zero_trust: ZeroTrustClassifier::assess(vendor, constants),
            business_value: BusinessValue::default(),
            tco,
            risk,
        }
    }

    /// The configured baseline vendor's costs, or the mean costs of the
    /// other compared vendors when none is configured.
    fn baseline(
        &self,
        index: usize,
        tcos: &[Tco],
        config: &AnalysisConfiguration,
    ) -> Comparison<Baseline> {
        if tcos.len() < MIN_VENDORS_FOR_COMPARISON {
            tracing::info!(
                vendors = tcos.len(),
                "fewer than {} vendors, savings not compared",
                MIN_VENDORS_FOR_COMPARISON
            );
            return Comparison::insufficient(format!(
                "savings comparisons need at least {} vendors (got {})",
                MIN_VENDORS_FOR_COMPARISON,
                tcos.len()
            ));
        }

        match config.baseline_vendor() {
            Some(baseline) => {
                let position = config
                    .vendors()
                    .iter()
                    .filter(|id| self.dataset.get(id).is_some())
                    .position(|id| id == baseline);
                match position.and_then(|p| tcos.get(p)) {
                    Some(tco) => Comparison::Available(Baseline {
                        cost: tco.total,
                        yearly: tco.yearly.iter().map(|y| y.total).collect(),
                    }),
                    None => Comparison::insufficient(format!(
                        "baseline vendor '{}' is unavailable",
                        baseline
                    )),
                }
            }
            None => {
                let others: Vec<&Tco> = tcos
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .map(|(_, tco)| tco)
                    .collect();
                let count = others.len() as f64;
                let yearly = (0..config.years() as usize)
                    .map(|year| {
                        others
                            .iter()
                            .filter_map(|tco| tco.yearly.get(year))
                            .map(|y| y.total)
                            .sum::<f64>()
                            / count
                    })
                    .collect();
                Comparison::Available(Baseline {
                    cost: others.iter().map(|tco| tco.total).sum::<f64>() / count,
                    yearly,
                })
            }
        }
    }
}
