use crate::application::read_models::{
    ComparisonReadModel, ConfigurationView, FinancialsView, RecommendationView, ReportStatus,
    VendorView,
};
use crate::comparison::domain::{Metric, Payback};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Placeholder for values that cannot be computed
const NOT_APPLICABLE: &str = "N/A";

/// Markdown table header for the cost summary
const COST_TABLE_HEADER: &str =
    "| Vendor | Total Cost | Per Device / Month | Savings | ROI | Payback |\n";

/// Markdown table separator line for the cost summary
const COST_TABLE_SEPARATOR: &str =
    "|--------|------------|--------------------|---------|-----|---------|\n";

/// MarkdownFormatter adapter for human-readable comparison reports
///
/// One table per metric family, vendors in selection order.
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Dollar amount with thousands separators, e.g. `$1,234,567.89`
    fn format_currency(amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        format!("{}${}.{}", sign, grouped, cents)
    }

    fn format_optional<T>(value: Option<T>, render: impl Fn(T) -> String) -> String {
        value.map(render).unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }

    fn format_percentage(value: Metric) -> String {
        Self::format_optional(value.value(), |p| format!("{:.1}%", p))
    }

    fn format_payback(payback: Payback) -> String {
        match payback {
            Payback::Months(months) => format!("{:.1} months", months),
            Payback::NoPayback => "No payback".to_string(),
        }
    }

    fn vendor_label(vendor: &VendorView) -> String {
        Self::escape_markdown_table_cell(&vendor.name)
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ComparisonReadModel) {
        let meta = &model.metadata;
        output.push_str("# NAC Vendor Comparison\n\n");
        output.push_str(&format!(
            "- **Generated**: {} by {} {}\n",
            meta.timestamp, meta.tool_name, meta.tool_version
        ));
        output.push_str(&format!("- **Report ID**: {}\n", meta.report_id));
        if let Some(version) = &meta.dataset_version {
            output.push_str(&format!("- **Dataset version**: {}\n", version));
        }
        output.push('\n');
    }

    fn render_issues(&self, output: &mut String, issues: &[String]) {
        output.push_str("## Configuration Issues\n\n");
        output.push_str("The comparison could not be computed. Fix the following and run again:\n\n");
        for issue in issues {
            output.push_str(&format!("- {}\n", issue));
        }
        output.push('\n');
    }

    fn render_configuration(&self, output: &mut String, config: &ConfigurationView) {
        output.push_str("## Analysis Configuration\n\n");
        output.push_str("| Parameter | Value |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| Devices | {} |\n", config.devices));
        output.push_str(&format!("| Users | {} |\n", config.users));
        output.push_str(&format!("| Organization size | {} |\n", config.org_size));
        output.push_str(&format!("| Industry | {} |\n", config.industry));
        output.push_str(&format!("| Region | {} |\n", config.region));
        output.push_str(&format!("| Analysis period | {} year(s) |\n", config.years));
        output.push_str(&format!(
            "| Baseline | {} |\n",
            config
                .baseline_vendor
                .as_deref()
                .unwrap_or("average of compared vendors")
        ));
        output.push('\n');
    }

    fn render_cost_summary(&self, output: &mut String, vendors: &[VendorView]) {
        output.push_str("## Total Cost of Ownership\n\n");
        output.push_str(COST_TABLE_HEADER);
        output.push_str(COST_TABLE_SEPARATOR);

        for vendor in vendors {
            let (savings, roi, payback) = match &vendor.roi {
                Some(roi) => (
                    Self::format_currency(roi.total_savings),
                    Self::format_percentage(roi.percentage),
                    Self::format_payback(roi.payback),
                ),
                None => (
                    NOT_APPLICABLE.to_string(),
                    NOT_APPLICABLE.to_string(),
                    NOT_APPLICABLE.to_string(),
                ),
            };

            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::vendor_label(vendor),
                Self::format_currency(vendor.total_cost),
                Self::format_currency(vendor.per_device_per_month),
                savings,
                roi,
                payback
            ));
        }
        output.push('\n');

        if let Some(note) = vendors.iter().find_map(|v| v.roi_note.as_deref()) {
            output.push_str(&format!("*Savings not compared: {}*\n\n", note));
        }
    }

    fn render_cost_breakdown(&self, output: &mut String, vendors: &[VendorView]) {
        let Some(first) = vendors.first() else {
            return;
        };

        output.push_str("## Cost Breakdown\n\n");
        output.push_str("| Vendor |");
        for line in &first.cost_breakdown {
            output.push_str(&format!(" {} |", capitalize(&line.category)));
        }
        output.push_str("\n|--------|");
        for _ in &first.cost_breakdown {
            output.push_str("------|");
        }
        output.push('\n');

        for vendor in vendors {
            output.push_str(&format!("| {} |", Self::vendor_label(vendor)));
            for line in &vendor.cost_breakdown {
                output.push_str(&format!(" {} |", Self::format_currency(line.amount)));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_financials(&self, output: &mut String, vendors: &[VendorView]) {
        let Some(first) = vendors.first() else {
            return;
        };

        output.push_str("## Multi-Year Financials\n\n");
        output.push_str("### Yearly Cost\n\n| Vendor |");
        for line in &first.yearly_costs {
            output.push_str(&format!(" Year {} |", line.year));
        }
        output.push_str("\n|--------|");
        for _ in &first.yearly_costs {
            output.push_str("--------|");
        }
        output.push('\n');
        for vendor in vendors {
            output.push_str(&format!("| {} |", Self::vendor_label(vendor)));
            for line in &vendor.yearly_costs {
                output.push_str(&format!(" {} |", Self::format_currency(line.total)));
            }
            output.push('\n');
        }
        output.push('\n');

        let analysed: Vec<(&VendorView, &FinancialsView)> = vendors
            .iter()
            .filter_map(|v| v.financials.as_ref().map(|f| (v, f)))
            .collect();
        let Some((_, sample)) = analysed.first() else {
            return;
        };

        output.push_str(&format!(
            "### Discounted Cash Flow ({:.1}% discount rate)\n\n",
            sample.discount_rate
        ));
        output.push_str("| Vendor | NPV | IRR | Profitability Index |\n");
        output.push_str("|--------|-----|-----|---------------------|\n");
        for (vendor, financials) in &analysed {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::vendor_label(vendor),
                Self::format_currency(financials.npv),
                Self::format_percentage(financials.irr),
                Self::format_optional(financials.profitability_index.value(), |v| {
                    format!("{:.2}", v)
                })
            ));
        }
        output.push('\n');

        output.push_str("### Sensitivity\n\n");
        output.push_str("| Vendor | Scenario | Benefit Factor | Savings | ROI | Payback | NPV |\n");
        output.push_str("|--------|----------|----------------|---------|-----|---------|-----|\n");
        for (vendor, financials) in &analysed {
            for scenario in &financials.scenarios {
                output.push_str(&format!(
                    "| {} | {} | {:.2} | {} | {} | {} | {} |\n",
                    Self::vendor_label(vendor),
                    capitalize(&scenario.scenario),
                    scenario.benefit_factor,
                    Self::format_currency(scenario.total_savings),
                    Self::format_percentage(scenario.percentage),
                    Self::format_payback(scenario.payback),
                    Self::format_currency(scenario.npv)
                ));
            }
        }
        output.push('\n');

        output.push_str("### Savings Projection\n\n");
        output.push_str("Cumulative net savings, risk-adjusted in parentheses.\n\n");
        output.push_str("| Vendor |");
        for projection in &sample.projections {
            output.push_str(&format!(" Year {} |", projection.year));
        }
        output.push_str("\n|--------|");
        for _ in &sample.projections {
            output.push_str("--------|");
        }
        output.push('\n');
        for (vendor, financials) in &analysed {
            output.push_str(&format!("| {} |", Self::vendor_label(vendor)));
            for projection in &financials.projections {
                output.push_str(&format!(
                    " {} ({}) |",
                    Self::format_currency(projection.cumulative_net_savings),
                    Self::format_currency(projection.risk_adjusted)
                ));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_security(&self, output: &mut String, vendors: &[VendorView]) {
        output.push_str("## Security & Risk\n\n");
        output.push_str(
            "| Vendor | Risk Score | Security Score | Breach Risk Reduction | CVEs | Vendor Risk | Cost / Security Point |\n",
        );
        output.push_str(
            "|--------|------------|----------------|-----------------------|------|-------------|-----------------------|\n",
        );

        for vendor in vendors {
            let risk = &vendor.risk;
            output.push_str(&format!(
                "| {} | {:.1} | {:.1} | {:.1}% | {} | {:.1} | {} |\n",
                Self::vendor_label(vendor),
                risk.risk_score,
                risk.security_score,
                risk.breach_risk_reduction,
                risk.cve_count,
                risk.vendor_risk,
                Self::format_optional(vendor.cost_per_security_point, Self::format_currency)
            ));
        }
        output.push('\n');
    }

    fn render_compliance(&self, output: &mut String, vendors: &[VendorView]) {
        output.push_str("## Compliance\n\n");
        output.push_str("| Vendor | Coverage Score | Automation Score | Gaps |\n");
        output.push_str("|--------|----------------|------------------|------|\n");

        for vendor in vendors {
            let compliance = &vendor.compliance;
            let gaps = if compliance.gaps.is_empty() {
                "None".to_string()
            } else {
                compliance.gaps.join(", ")
            };
            output.push_str(&format!(
                "| {} | {:.1} | {:.1} | {} |\n",
                Self::vendor_label(vendor),
                compliance.score,
                compliance.automation_score,
                Self::escape_markdown_table_cell(&gaps)
            ));
        }
        output.push('\n');

        for vendor in vendors {
            if vendor.compliance.frameworks.is_empty() {
                continue;
            }
            output.push_str(&format!("### Framework detail: {}\n\n", vendor.name));
            output.push_str("| Framework | Weight | Coverage | Automation |\n");
            output.push_str("|-----------|--------|----------|------------|\n");
            for row in &vendor.compliance.frameworks {
                output.push_str(&format!(
                    "| {} | {:.2} | {:.1} | {:.1} |\n",
                    row.framework, row.weight, row.coverage, row.automation
                ));
            }
            output.push('\n');
        }
    }

    fn render_operations(&self, output: &mut String, vendors: &[VendorView]) {
        output.push_str("## Operations & Timeline\n\n");
        output.push_str(
            "| Vendor | Complexity | Time to Value | Implementation | Training | Automation | FTE Required | FTE Saved | Maintenance Windows | MTTR |\n",
        );
        output.push_str(
            "|--------|------------|---------------|----------------|----------|------------|--------------|-----------|---------------------|------|\n",
        );

        for vendor in vendors {
            let ops = &vendor.operational;
            let timeline = &vendor.timeline;
            output.push_str(&format!(
                "| {} | {} | {} days | {} weeks | {} days | {:.1}% | {:.1} | {:.1} | {} / year | {:.1} h |\n",
                Self::vendor_label(vendor),
                timeline.complexity,
                timeline.time_to_value_days,
                timeline.implementation_weeks,
                timeline.training_days,
                ops.automation_level,
                ops.fte_required,
                ops.fte_saved,
                ops.maintenance_windows,
                ops.mttr_hours
            ));
        }
        output.push('\n');
    }

    fn render_zero_trust(&self, output: &mut String, vendors: &[VendorView]) {
        output.push_str("## Zero Trust Maturity\n\n");
        output.push_str("| Vendor | Score | Maturity Level |\n");
        output.push_str("|--------|-------|----------------|\n");
        for vendor in vendors {
            output.push_str(&format!(
                "| {} | {:.1} | {} |\n",
                Self::vendor_label(vendor),
                vendor.zero_trust.score,
                capitalize(&vendor.zero_trust.level)
            ));
        }
        output.push('\n');
    }

    fn render_business_value(&self, output: &mut String, vendors: &[VendorView], years: u32) {
        output.push_str("## Business Value\n\n");
        output.push_str(&format!(
            "| Vendor | Productivity | Compliance | Downtime Avoided | Security Savings | Annual Total | {}-Year Total |\n",
            years
        ));
        output.push_str(
            "|--------|--------------|------------|------------------|------------------|--------------|--------------|\n",
        );
        for vendor in vendors {
            let value = &vendor.business_value;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::vendor_label(vendor),
                Self::format_currency(value.productivity_gain),
                Self::format_currency(value.compliance_value),
                Self::format_currency(value.downtime_avoidance),
                Self::format_currency(value.security_savings),
                Self::format_currency(value.annual_total),
                Self::format_currency(value.horizon_total)
            ));
        }
        output.push('\n');
    }

    fn render_recommendation(
        &self,
        output: &mut String,
        recommendation: Option<&RecommendationView>,
        note: Option<&str>,
    ) {
        output.push_str("## Recommendation\n\n");

        let Some(rec) = recommendation else {
            output.push_str(&format!(
                "*No recommendation: {}*\n\n",
                note.unwrap_or("not enough vendors to compare")
            ));
            return;
        };

        output.push_str(&format!(
            "**Recommended vendor: {}**\n\n",
            Self::escape_markdown_table_cell(&rec.vendor_name)
        ));
        output.push_str("| Rank | Vendor | Total | Cost | ROI | Security | Deployment |\n");
        output.push_str("|------|--------|-------|------|-----|----------|------------|\n");
        for row in &rec.ranking {
            output.push_str(&format!(
                "| {} | {} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} |\n",
                row.rank, row.vendor_id, row.total, row.cost, row.roi, row.security, row.deployment
            ));
        }
        output.push('\n');
    }

    fn render_skipped(&self, output: &mut String, skipped: &[String]) {
        if skipped.is_empty() {
            return;
        }
        output.push_str("## Skipped Vendors\n\n");
        output.push_str("The following vendor ids are not in the dataset and were left out:\n\n");
        for id in skipped {
            output.push_str(&format!("- `{}`\n", id));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ComparisonReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, model);

        if model.status == ReportStatus::InsufficientConfiguration {
            self.render_issues(&mut output, &model.issues);
            return Ok(output);
        }

        if let Some(config) = &model.configuration {
            self.render_configuration(&mut output, config);
        }

        let vendors = &model.vendors;
        self.render_cost_summary(&mut output, vendors);
        self.render_cost_breakdown(&mut output, vendors);
        self.render_financials(&mut output, vendors);
        self.render_security(&mut output, vendors);
        self.render_compliance(&mut output, vendors);
        self.render_operations(&mut output, vendors);
        self.render_zero_trust(&mut output, vendors);
        let years = model.configuration.as_ref().map_or(1, |c| c.years);
        self.render_business_value(&mut output, vendors, years);
        self.render_recommendation(
            &mut output,
            model.recommendation.as_ref(),
            model.recommendation_note.as_deref(),
        );
        self.render_skipped(&mut output, &model.skipped_vendors);

        Ok(output)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::fixtures;

    #[test]
    fn test_format_currency() {
        assert_eq!(MarkdownFormatter::format_currency(0.0), "$0.00");
        assert_eq!(MarkdownFormatter::format_currency(999.5), "$999.50");
        assert_eq!(MarkdownFormatter::format_currency(1000.0), "$1,000.00");
        assert_eq!(
            MarkdownFormatter::format_currency(1234567.891),
            "$1,234,567.89"
        );
        assert_eq!(MarkdownFormatter::format_currency(-750000.0), "-$750,000.00");
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("A|B\nC"),
            "A\\|B C"
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("licensing"), "Licensing");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_markdown_computed_report_sections() {
        let output = MarkdownFormatter::new()
            .format(&fixtures::computed_model())
            .unwrap();

        assert!(output.starts_with("# NAC Vendor Comparison\n"));
        assert!(output.contains("- **Dataset version**: fixture-1"));
        assert!(output.contains("## Analysis Configuration"));
        assert!(output.contains("| Devices | 1000 |"));
        assert!(output.contains("| Baseline | average of compared vendors |"));
        assert!(output.contains("## Total Cost of Ownership"));
        assert!(output.contains("## Cost Breakdown"));
        assert!(output.contains("| Vendor | Licensing | Hardware |"));
        assert!(output.contains("## Multi-Year Financials"));
        assert!(output.contains("| Vendor | Year 1 | Year 2 | Year 3 |"));
        assert!(output.contains("### Discounted Cash Flow (8.0% discount rate)"));
        assert!(output.contains("| alpha NAC | Pessimistic | 0.80 |"));
        assert!(output.contains("| beta NAC | Optimistic | 1.20 |"));
        assert!(output.contains("### Savings Projection"));
        assert!(output.contains("## Security & Risk"));
        assert!(output.contains("## Compliance"));
        assert!(output.contains("## Operations & Timeline"));
        assert!(output.contains("## Zero Trust Maturity"));
        assert!(output.contains("## Business Value"));
        assert!(output.contains("| 3-Year Total |"));
        assert!(output.contains("**Recommended vendor:"));
        assert!(output.contains("## Skipped Vendors"));
        assert!(output.contains("- `ghost`"));
    }

    #[test]
    fn test_markdown_zero_cost_vendor_shows_na_roi() {
        let output = MarkdownFormatter::new()
            .format(&fixtures::computed_model())
            .unwrap();

        let beta_row = output
            .lines()
            .find(|line| line.starts_with("| beta NAC | $0.00 | $0.00 |"))
            .unwrap();
        assert!(beta_row.contains(NOT_APPLICABLE));
        assert!(!beta_row.contains("No payback"));
    }

    #[test]
    fn test_markdown_free_vendor_has_no_profitability_index() {
        let output = MarkdownFormatter::new()
            .format(&fixtures::computed_model())
            .unwrap();

        let dcf = output
            .split("### Discounted Cash Flow")
            .nth(1)
            .and_then(|rest| rest.split("### Sensitivity").next())
            .unwrap();
        let beta_row = dcf.lines().find(|line| line.starts_with("| beta NAC |")).unwrap();
        assert!(beta_row.ends_with("| N/A |"));
    }

    #[test]
    fn test_format_payback() {
        assert_eq!(MarkdownFormatter::format_payback(Payback::Months(12.04)), "12.0 months");
        assert_eq!(MarkdownFormatter::format_payback(Payback::NoPayback), "No payback");
    }

    #[test]
    fn test_markdown_single_vendor_notes() {
        let output = MarkdownFormatter::new()
            .format(&fixtures::single_vendor_model())
            .unwrap();

        assert!(output.contains("*Savings not compared:"));
        assert!(output.contains("*No recommendation:"));
        assert!(output.contains("### Yearly Cost"));
        assert!(!output.contains("### Discounted Cash Flow"));
        assert!(!output.contains("## Skipped Vendors"));
    }

    #[test]
    fn test_markdown_insufficient_configuration() {
        let output = MarkdownFormatter::new()
            .format(&fixtures::insufficient_model())
            .unwrap();

        assert!(output.contains("## Configuration Issues"));
        assert!(output.contains("- device count is required"));
        assert!(output.contains("- no vendors selected"));
        assert!(!output.contains("## Total Cost of Ownership"));
    }
}
