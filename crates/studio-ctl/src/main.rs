//! studio-ctl: pw-studio code generation and data page listing from the
//! command line.
//!
//! Works against a site snapshot (a YAML export of templates and pages)
//! instead of a live admin, so generated snippets can be produced in scripts
//! and editors.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use studio_shared::logging::init_tracing;
use studio_shared::{load_settings, SiteSnapshot, StudioSettings};

#[derive(Debug, Parser)]
#[command(
    name = "studio-ctl",
    version,
    about = "Generate ProcessWire template code and inspect data page listings",
    styles = output::clap_styles()
)]
struct Cli {
    /// Site snapshot: YAML export of templates and pages
    #[arg(long, global = true, env = "PW_STUDIO_SITE", default_value = "site.yaml")]
    site: PathBuf,

    /// Settings file (TOML); `PW_STUDIO__*` variables override it
    #[arg(long, global = true, env = "PW_STUDIO_SETTINGS")]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List templates available for code generation
    Templates,

    /// List the fields of a template
    Fields {
        /// Template name or id
        template: String,
    },

    /// Generate accessor code for selected fields of a template
    Generate {
        /// Template name or id
        template: String,

        /// Comma-separated field names, in output order
        #[arg(long, value_delimiter = ',', required = true)]
        fields: Vec<String>,
    },

    /// Generate a template file skeleton
    Skeleton {
        /// Template name or id
        template: String,

        /// Skeleton flavour (defaults to the configured one)
        #[arg(long, value_parser = ["minimal", "basic", "uikit", "markup-regions"])]
        kind: Option<String>,

        /// Emit a full HTML document
        #[arg(long)]
        include_head: bool,

        /// Layout regions to add: header, sidebar, footer
        #[arg(long = "region", value_delimiter = ',', value_parser = ["header", "sidebar", "footer"])]
        regions: Vec<String>,

        /// `lang` attribute of the html element
        #[arg(long)]
        lang: Option<String>,
    },

    /// Show the data page listing of a container page
    Lister {
        /// Id of the container page
        page_id: u32,

        /// Request query, e.g. "q=lamp&by=title&sort=price&dir=desc&pg=2"
        #[arg(long, default_value = "")]
        query: String,
    },
}

/// What every command runs against.
#[derive(Debug)]
pub(crate) struct Context {
    pub site: SiteSnapshot,
    pub settings: StudioSettings,
    pub format: OutputFormat,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let site = SiteSnapshot::load(&cli.site)?;
    let settings = load_settings(cli.settings.as_deref());
    let ctx = Context {
        site,
        settings,
        format: cli.format,
    };

    match cli.command {
        Commands::Templates => commands::list_templates(&ctx),
        Commands::Fields { template } => commands::list_fields(&ctx, &template),
        Commands::Generate { template, fields } => {
            commands::generate_fields(&ctx, &template, &fields)
        }
        Commands::Skeleton {
            template,
            kind,
            include_head,
            regions,
            lang,
        } => commands::generate_skeleton(
            &ctx,
            &template,
            commands::SkeletonArgs {
                kind,
                include_head,
                regions,
                lang,
            },
        ),
        Commands::Lister { page_id, query } => commands::show_lister(&ctx, page_id, &query),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
