use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::comparison::domain::ConfigurationInput;
use crate::comparison::policies::CalculationConstants;
use crate::config::ConfigFile;
use crate::shared::Result;

/// Compare Network Access Control vendors on cost, ROI, risk and compliance
#[derive(Parser, Debug, Default)]
#[command(name = "nac-compare")]
#[command(version)]
#[command(
    about = "Compare Network Access Control vendors on cost, ROI, risk and compliance",
    long_about = None
)]
pub struct Args {
    /// Number of managed devices
    #[arg(short, long)]
    pub devices: Option<u64>,

    /// Number of users (defaults to the device count)
    #[arg(short, long)]
    pub users: Option<u64>,

    /// Analysis period in years (1-5, default 3)
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Industry: healthcare, financial, retail, manufacturing, education,
    /// government, technology or default
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Organization size: small, medium, large or enterprise
    /// (derived from the device count when omitted)
    #[arg(long)]
    pub org_size: Option<String>,

    /// Region: north_america, europe, asia_pacific, latin_america or middle_east
    #[arg(short, long)]
    pub region: Option<String>,

    /// Vendor ids to compare, comma-separated or repeated
    #[arg(short, long, value_name = "ID", value_delimiter = ',')]
    pub vendors: Vec<String>,

    /// Vendor whose cost is the savings baseline
    /// (defaults to the average of the other compared vendors)
    #[arg(short, long, value_name = "ID")]
    pub baseline: Option<String>,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path (defaults to ./nac-compare.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Vendor dataset file (.yml, .yaml, .json or .toml) instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// List the vendors in the active dataset and exit
    #[arg(long)]
    pub list_vendors: bool,

    /// Only print errors and warnings to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Command-line values merged over the config file
#[derive(Debug)]
pub struct Settings {
    pub input: ConfigurationInput,
    pub format: OutputFormat,
    pub output: Option<String>,
    pub dataset: Option<PathBuf>,
    pub constants: CalculationConstants,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges the arguments over an optional config file.
    ///
    /// A flag that is given always wins; an empty `--vendors` list falls
    /// back to the file's list.
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<Settings> {
        let config = config.unwrap_or_default();

        let format = match (self.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => OutputFormat::from_str(raw).map_err(|e| anyhow::anyhow!(e))?,
            (None, None) => OutputFormat::default(),
        };

        let vendors = if self.vendors.is_empty() {
            config.vendors.unwrap_or_default()
        } else {
            self.vendors
        };

        let input = ConfigurationInput {
            devices: self.devices.or(config.devices),
            users: self.users.or(config.users),
            years: self.years.or(config.years),
            industry: self.industry.or(config.industry),
            org_size: self.org_size.or(config.org_size),
            region: self.region.or(config.region),
            vendors,
            baseline_vendor: self.baseline.or(config.baseline_vendor),
        };

        Ok(Settings {
            input,
            format,
            output: self.output.or(config.output),
            dataset: self.dataset.or(config.dataset.map(PathBuf::from)),
            constants: config.constants.unwrap_or_default(),
        })
    }
}
