//! sbom-normalizer: spec-aware CycloneDX normalization
//!
//! Inspect per-version capabilities, manage export configuration and render
//! a sample BOM against any CycloneDX version.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use sbom_normalizer::config::{self, ExportConfig, Validatable};
use sbom_normalizer::model::{
    Bom, Component, ComponentType, ExternalReference, ExternalReferenceType, HashAlgorithm,
    HashDictionary, License, LicenseRepository, Metadata, Property, Tool,
};
use sbom_normalizer::spec::{Format, Spec, SpecVersion};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with version support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported CycloneDX versions:",
        "\n  XML:  1.1, 1.2, 1.3, 1.4, 1.5, 1.6",
        "\n  JSON: 1.2, 1.3, 1.4, 1.5, 1.6"
    )
}

#[derive(Parser)]
#[command(name = "sbom-normalizer")]
#[command(author = "Binarly.io")]
#[command(version, long_version = build_long_version())]
#[command(about = "Spec-aware CycloneDX normalization engine", long_about = None)]
#[command(after_help = "EXAMPLES:
    # What does CycloneDX 1.3 support?
    sbom-normalizer capabilities 1.3

    # Render the sample BOM as CycloneDX 1.2 XML
    sbom-normalizer sample --spec-version 1.2 --format xml

    # Print the effective configuration
    sbom-normalizer config show")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for the `capabilities` subcommand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum CapabilitiesOutput {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Arguments for the `sample` subcommand
#[derive(Parser)]
struct SampleArgs {
    /// Target CycloneDX version (overrides the config file)
    #[arg(short, long)]
    spec_version: Option<SpecVersion>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Render without indentation
    #[arg(long)]
    compact: bool,

    /// Keep duplicate bom-ref values as they are
    #[arg(long)]
    keep_bom_refs: bool,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what a CycloneDX version can represent
    Capabilities {
        /// CycloneDX version, e.g. 1.4
        version: SpecVersion,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = CapabilitiesOutput::Table)]
        output: CapabilitiesOutput,
    },

    /// Render a built-in sample BOM with the effective configuration
    Sample(SampleArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (defaults merged with file)
    Show,
    /// Print the discovered config file, if any
    Path,
    /// Generate an example .sbom-normalizer.yaml in the current directory
    Init,
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::Capabilities { version, output } => {
            let spec = Spec::for_version(version);
            match output {
                CapabilitiesOutput::Json => {
                    let json = serde_json::to_string_pretty(spec)
                        .context("failed to serialize capabilities")?;
                    println!("{json}");
                }
                CapabilitiesOutput::Yaml => {
                    let yaml =
                        serde_yaml::to_string(spec).context("failed to serialize capabilities")?;
                    print!("{yaml}");
                }
                CapabilitiesOutput::Table => print_capabilities(spec),
            }
            Ok(())
        }

        Commands::Sample(args) => {
            let (mut config, _) = config::load_or_default(cli.config.as_deref());
            if let Some(version) = args.spec_version {
                config.spec_version = version;
            }
            if let Some(format) = args.format {
                config.format = format;
            }
            if args.compact {
                config.pretty = false;
            }
            if args.keep_bom_refs {
                config.discriminate_bom_refs = false;
            }
            run_sample(&config, args.output_file)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-normalizer", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                for error in config.validate() {
                    eprintln!("# Warning: {error}");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".sbom-normalizer.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
            ConfigAction::Schema { output } => {
                let schema =
                    config::generate_json_schema().context("failed to serialize schema")?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, &schema)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        eprintln!("Schema written to {}", path.display());
                    }
                    None => println!("{schema}"),
                }
                Ok(())
            }
        },
    }
}

fn run_sample(config: &ExportConfig, output_file: Option<PathBuf>) -> Result<()> {
    let errors = config.validate();
    if let Some(error) = errors.first() {
        anyhow::bail!("invalid configuration: {error}");
    }

    let document = config
        .serializer()
        .serialize(&sample_bom())
        .context("failed to serialize sample BOM")?;

    match output_file {
        Some(path) => {
            std::fs::write(&path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Sample written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn print_capabilities(spec: &Spec) {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let features = spec.features();
    let formats: Vec<_> = spec.formats().iter().map(|f| f.as_str()).collect();

    println!("CycloneDX {}", spec.version());
    println!("  formats:                    {}", formats.join(", "));
    if let Some(schema) = spec.json_schema() {
        println!("  JSON schema:                {schema}");
    }
    println!("  XML namespace:              {}", spec.xml_namespace());
    println!();
    for (name, supported) in [
        ("metadata", features.metadata),
        ("bom-ref", features.bom_ref),
        ("dependencies", features.dependencies),
        ("external reference hashes", features.external_reference_hashes),
        ("tool external references", features.tool_external_references),
        ("metadata properties", features.metadata_properties),
        ("component author", features.component_author),
        ("component properties", features.component_properties),
        ("component evidence", features.component_evidence),
        ("BOM properties (XML)", features.bom_properties_xml),
        ("BOM properties (JSON)", features.bom_properties_json),
        ("license expression", features.license_expression),
        ("license acknowledgement", features.license_acknowledgement),
        ("required component version", features.requires_component_version),
    ] {
        println!("  {name:<27} {}", yes_no(supported));
    }
    println!();

    let types: Vec<_> = spec.component_types().iter().map(|t| t.as_str()).collect();
    println!("  component types: {}", types.join(", "));
    let algorithms: Vec<_> = spec.hash_algorithms().iter().map(|a| a.as_str()).collect();
    println!("  hash algorithms: {}", algorithms.join(", "));
    let references: Vec<_> = spec
        .external_reference_types()
        .iter()
        .map(|r| r.as_str())
        .collect();
    println!("  external reference types: {}", references.join(", "));
}

/// A small BOM touching every normalizer
fn sample_bom() -> Bom {
    let core = Component::new(ComponentType::Library, "core")
        .with_group("org.example")
        .with_version("2.4.1")
        .with_bom_ref("pkg:maven/org.example/core@2.4.1")
        .with_licenses(LicenseRepository::new().with(License::spdx("Apache-2.0")))
        .with_hashes(
            HashDictionary::new()
                .with(HashAlgorithm::Sha1, "3e0a2b5d1c9f8e7a6b5c4d3e2f1a0b9c8d7e6f5a")
                .with(HashAlgorithm::Blake3, "not-a-digest"),
        );
    let firmware = Component::new(ComponentType::Firmware, "bootloader")
        .with_version("7")
        .with_bom_ref("bootloader");
    let app = Component::new(ComponentType::Application, "example-app")
        .with_version("1.0.0")
        .with_bom_ref("example-app")
        .with_licenses(LicenseRepository::new().with(License::expression("MIT OR Apache-2.0")))
        .with_external_reference(ExternalReference::new(
            ExternalReferenceType::Vcs,
            "https://example.com/example-app.git",
        ))
        .depends_on(&core.bom_ref)
        .depends_on(&firmware.bom_ref);

    Bom::new()
        .with_serial_number("urn:uuid:3e671687-395b-41f5-a30f-a58921a69b79")
        .with_metadata(
            Metadata::new()
                .with_timestamp(chrono::Utc::now().fixed_offset())
                .with_tool(Tool::new(env!("CARGO_PKG_NAME")).with_version(env!("CARGO_PKG_VERSION")))
                .with_component(app),
        )
        .with_component(core)
        .with_component(firmware)
        .with_external_reference(ExternalReference::new(
            ExternalReferenceType::Website,
            "https://example.com",
        ))
        .with_property(Property::new("example:generated", "true"))
}
