use anyhow::{Context, Result};
use cloudbuild_gen::cli::commands::{GenerateCommand, ValidateCommand};
use cloudbuild_gen::cli::output::*;
use cloudbuild_gen::cli::{Cli, Command};
use cloudbuild_gen::core::{build_pipeline, writer, Parameters, Pipeline};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stderr keeps `--stdout` output clean
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    let result = match &cli.command {
        Command::Generate(cmd) => generate(cmd),
        Command::Validate(cmd) => validate(cmd),
    };

    if let Err(e) = result {
        println!("{} {}", CROSS, style(format!("{:#}", e)).red());
        error!("{:?}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn generate(cmd: &GenerateCommand) -> Result<()> {
    let params = Parameters::from_env_with_overrides(&cmd.overrides());
    info!(
        "Generating steps for workspaces {:?} with terraform {}",
        params.workspaces, params.tf_version
    );

    let pipeline = build_pipeline(&params);

    if cmd.stdout {
        let yaml = writer::to_yaml(&pipeline).context("Failed to render pipeline")?;
        print!("{}", yaml);
        return Ok(());
    }

    writer::write_pipeline(&cmd.output, &pipeline).context("Failed to write pipeline")?;
    writer::verify_written(&cmd.output, &pipeline)
        .context("Failed to verify generated pipeline")?;

    println!(
        "{} {} file generated successfully.",
        CHECK,
        style(&cmd.output).bold()
    );
    Ok(())
}

fn validate(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating pipeline...", INFO);

    let pipeline = Pipeline::from_file(&cmd.file).context("Failed to load pipeline")?;
    pipeline.validate()?;

    println!("{} Pipeline is valid!", CHECK);
    println!("{}", format_pipeline_summary(&pipeline));

    if cmd.json {
        let json = serde_json::to_string_pretty(&pipeline)?;
        println!("\n{}", json);
    }
    Ok(())
}
