//! Command-line interface
//!
//! # Modules
//!
//! - [`logging`]: Subscriber setup (stderr, JSON, optional log file)

pub mod logging;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::DocsConfig;
use crate::properties::VersionRecord;
use crate::render::codeblock::DEFAULT_LANGUAGE;
use crate::render::{BadgeSelection, Fragments};
use crate::site;
use crate::version::{DirectorySource, VersionRegistry};

#[derive(Debug, Parser)]
#[command(name = "showcase-docs")]
#[command(
    version,
    about = "Version metadata and documentation fragments for the Showcase mod"
)]
pub struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/showcase-docs/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of <version>.properties files, overrides the config
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Log filter directive (e.g. "debug"), overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available Minecraft versions, oldest first
    List,
    /// Print the latest available Minecraft version
    Latest,
    /// Show metadata for one Minecraft version
    Info {
        version: String,
        #[arg(long)]
        json: bool,
    },
    /// Show metadata for every available version
    All {
        #[arg(long)]
        json: bool,
    },
    /// Check whether a Minecraft version is supported
    Supported { version: String },
    /// Render a Markdown fragment
    #[command(subcommand)]
    Render(RenderCommand),
    /// Generate site artifacts
    #[command(subcommand)]
    Site(SiteCommand),
}

#[derive(Debug, Subcommand)]
pub enum RenderCommand {
    /// Version badges (all versions unless --latest or --versions)
    Badges {
        #[arg(long, conflicts_with = "versions")]
        latest: bool,
        #[arg(long, value_delimiter = ',')]
        versions: Option<Vec<String>>,
    },
    /// Feature compatibility note
    Compatibility {
        #[arg(long = "mc", value_name = "VERSION")]
        version: Option<String>,
    },
    /// Table of supported versions with download links
    Table,
    /// Server requirements
    Requirements {
        #[arg(long = "mc", value_name = "VERSION")]
        version: Option<String>,
        /// List every available version on the Minecraft line
        #[arg(long)]
        all: bool,
    },
    /// Gradle dependency listing for developers
    Dependencies {
        #[arg(long = "mc", value_name = "VERSION")]
        version: Option<String>,
    },
    /// Code block from a template file ("-" reads stdin)
    Code {
        #[arg(long)]
        template_file: PathBuf,
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,
        #[arg(long = "mc", value_name = "VERSION")]
        version: Option<String>,
    },
    /// Maven dependency snippet
    Maven {
        #[arg(long = "mc", value_name = "VERSION")]
        version: Option<String>,
    },
    /// Gradle dependency snippet
    Gradle {
        #[arg(long = "mc", value_name = "VERSION")]
        version: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SiteCommand {
    /// robots.txt
    Robots,
    /// sitemap.xml
    Sitemap {
        /// Documentation content directory, overrides the config
        #[arg(long)]
        content: Option<PathBuf>,
    },
}

impl Cli {
    /// Load the config and apply command-line overrides
    pub fn resolve_config(&self) -> anyhow::Result<DocsConfig> {
        let mut config = DocsConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.dir {
            config.versions_dir = dir.clone();
        }
        Ok(config)
    }

    pub fn log_options(&self, config: &DocsConfig) -> logging::LogOptions {
        logging::LogOptions {
            level: self.log_level.clone(),
            json: self.json_logs,
            file: config.log_file.clone(),
        }
    }
}

/// Outcome of a command that ran without errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The requested version is unknown or unsupported
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run `command`, writing its output to `out`
pub fn execute(
    command: &Command,
    config: &DocsConfig,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    let registry = VersionRegistry::<DirectorySource>::from_dir(&config.versions_dir);
    debug!("Using version properties from {:?}", config.versions_dir);

    match command {
        Command::List => {
            for version in registry.available_versions() {
                writeln!(out, "{version}")?;
            }
        }
        Command::Latest => writeln!(out, "{}", registry.latest_version())?,
        Command::Info { version, json } => {
            let Some(record) = registry.version_info(version) else {
                warn!("Version information not available for {}", version);
                return Ok(Status::Failure);
            };
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
            } else {
                write!(out, "{}", describe(&record))?;
            }
        }
        Command::All { json } => {
            let records = registry.all_version_info();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
            } else {
                let text: Vec<String> = records.iter().map(describe).collect();
                write!(out, "{}", text.join("\n"))?;
            }
        }
        Command::Supported { version } => {
            let supported = registry.is_supported(version);
            writeln!(out, "{supported}")?;
            if !supported {
                return Ok(Status::Failure);
            }
        }
        Command::Render(render) => {
            let fragments = Fragments::new(&registry, &config.mod_version);
            write!(out, "{}", render_fragment(&fragments, render)?)?;
        }
        Command::Site(SiteCommand::Robots) => {
            write!(out, "{}", site::robots_txt(&config.site))?;
        }
        Command::Site(SiteCommand::Sitemap { content }) => {
            let content_dir = content.as_ref().unwrap_or(&config.content_dir);
            let pages = site::discover_pages(content_dir)?;
            let entries = site::sitemap_entries(&config.site, &pages, chrono::Utc::now());
            write!(out, "{}", site::sitemap_xml(&entries)?)?;
        }
    }

    Ok(Status::Success)
}

fn render_fragment(
    fragments: &Fragments<'_, DirectorySource>,
    command: &RenderCommand,
) -> anyhow::Result<String> {
    let fragment = match command {
        RenderCommand::Badges { latest, versions } => {
            let selection = match (latest, versions) {
                (true, _) => BadgeSelection::Latest,
                (false, Some(versions)) => BadgeSelection::Explicit(versions.clone()),
                (false, None) => BadgeSelection::Auto,
            };
            format!("{}\n", fragments.badges(&selection))
        }
        RenderCommand::Compatibility { version } => fragments.compatibility(version.as_deref()),
        RenderCommand::Table => fragments.version_table(),
        RenderCommand::Requirements { version, all } => {
            fragments.requirements(version.as_deref(), *all)
        }
        RenderCommand::Dependencies { version } => fragments
            .dependency_versions(version.as_deref())
            .unwrap_or_default(),
        RenderCommand::Code {
            template_file,
            language,
            version,
        } => {
            let template = read_template(template_file)?;
            fragments.versioned_code_block(language, template.trim_end(), version.as_deref())
        }
        RenderCommand::Maven { version } => fragments.maven_dependency(version.as_deref()),
        RenderCommand::Gradle { version } => fragments.gradle_dependency(version.as_deref()),
    };
    Ok(fragment)
}

fn read_template(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin())
            .context("failed to read template from stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read template {path:?}"))
}

/// Plain-text summary of a record
pub fn describe(record: &VersionRecord) -> String {
    let or_none = |value: &str| {
        if value.is_empty() {
            "(none)".to_string()
        } else {
            value.to_string()
        }
    };

    format!(
        "Minecraft version: {}\n\
         Compatible versions: {}\n\
         Fabric Loader: {}\n\
         Fabric API: {}\n\
         PlaceholderAPI: {}\n\
         Release type: {}\n",
        record.minecraft_version,
        or_none(&record.compatible_versions.join(", ")),
        or_none(&record.fabric_loader_version),
        or_none(&record.fabric_api_version),
        or_none(&record.placeholder_api_version),
        record.release_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::ReleaseType;

    #[test]
    fn cli_parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "showcase-docs",
            "render",
            "requirements",
            "--mc",
            "1.21.4",
            "--all",
            "--dir",
            "/srv/version_properties",
        ])
        .unwrap();

        assert_eq!(cli.dir, Some(PathBuf::from("/srv/version_properties")));
        assert!(matches!(
            cli.command,
            Command::Render(RenderCommand::Requirements { ref version, all: true })
                if version.as_deref() == Some("1.21.4")
        ));
    }

    #[test]
    fn cli_splits_badge_versions_on_commas() {
        let cli =
            Cli::try_parse_from(["showcase-docs", "render", "badges", "--versions", "1.21.6,1.21.5"])
                .unwrap();

        let Command::Render(RenderCommand::Badges { latest, versions }) = cli.command else {
            panic!("expected badges command");
        };
        assert!(!latest);
        assert_eq!(
            versions,
            Some(vec!["1.21.6".to_string(), "1.21.5".to_string()])
        );
    }

    #[test]
    fn cli_rejects_latest_with_explicit_versions() {
        let result = Cli::try_parse_from([
            "showcase-docs",
            "render",
            "badges",
            "--latest",
            "--versions",
            "1.21.6",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn describe_marks_missing_values() {
        let record = VersionRecord {
            minecraft_version: "1.21.6".to_string(),
            compatible_versions: vec![],
            fabric_loader_version: "0.16.14".to_string(),
            fabric_api_version: String::new(),
            placeholder_api_version: String::new(),
            release_type: ReleaseType::Beta,
        };

        assert_eq!(
            describe(&record),
            "Minecraft version: 1.21.6\n\
             Compatible versions: (none)\n\
             Fabric Loader: 0.16.14\n\
             Fabric API: (none)\n\
             PlaceholderAPI: (none)\n\
             Release type: beta\n"
        );
    }
}
