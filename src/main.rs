use nac_compare::adapters::outbound::console::StderrProgressReporter;
use nac_compare::adapters::outbound::dataset::{EmbeddedDatasetRepository, FileDatasetRepository};
use nac_compare::application::dto::{AnalysisRequest, OutputFormat};
use nac_compare::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nac_compare::application::read_models::ComparisonReadModelBuilder;
use nac_compare::application::use_cases::CompareVendorsUseCase;
use nac_compare::cli::Args;
use nac_compare::comparison::policies::CalculationTables;
use nac_compare::config::{discover_config, load_config_from_path};
use nac_compare::logging;
use nac_compare::ports::outbound::{ProgressReporter, VendorDatasetRepository};
use nac_compare::shared::error::ExitCode;
use nac_compare::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    logging::init();
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };

    let list_vendors = args.list_vendors;
    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let settings = args.resolve(config)?;

    // Create adapters (Dependency Injection)
    let repository: Box<dyn VendorDatasetRepository> = match &settings.dataset {
        Some(path) => Box::new(FileDatasetRepository::new(path.clone())),
        None => Box::new(EmbeddedDatasetRepository::new()),
    };
    let tables = CalculationTables::standard().with_constants(settings.constants);
    let use_case = CompareVendorsUseCase::new(repository, reporter, tables);
    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.as_deref()));

    if list_vendors {
        let listing = use_case.list_vendors()?;
        let output = match settings.format {
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&listing)?),
            OutputFormat::Markdown => listing.render(),
        };
        presenter.present(&output)?;
        return Ok(ExitCode::Success);
    }

    let response = use_case.execute(AnalysisRequest::new(settings.input))?;

    reporter.report(FormatterFactory::progress_message(settings.format));
    let model = ComparisonReadModelBuilder::build(&response.outcome, &response.metadata);
    let output = FormatterFactory::create(settings.format).format(&model)?;
    presenter.present(&output)?;

    if response.is_computed() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::InsufficientConfiguration)
    }
}
