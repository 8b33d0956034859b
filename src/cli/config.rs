use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::dom::document::FetchOptions;
use crate::selector::selector_model::{SelectorOptions, Strategy};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "selector-forge",
    version,
    about = "Generate CSS selectors for elements in an HTML document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: selector-forge.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a selector for the element matched by --target
    Generate {
        /// HTML file to read
        #[arg(long)]
        input: Option<String>,

        /// URL to fetch instead of reading a file
        #[arg(long)]
        url: Option<String>,

        /// CSS selector locating the target element (first match wins)
        #[arg(long)]
        target: String,

        /// Generate for every match of --target, not just the first
        #[arg(long)]
        all: bool,

        /// Strategy: full, nth-child, or optimized
        #[arg(long)]
        strategy: Option<String>,

        /// Ancestor levels to walk (1-10)
        #[arg(long)]
        depth: Option<usize>,

        /// Include element ids
        #[arg(long, action = clap::ArgAction::Set)]
        ids: Option<bool>,

        /// Include class lists
        #[arg(long, action = clap::ArgAction::Set)]
        classes: Option<bool>,

        /// Include extra attributes (full strategy only)
        #[arg(long, action = clap::ArgAction::Set)]
        attributes: Option<bool>,

        /// Output format: console or json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show what every strategy produces for one target
    Inspect {
        /// HTML file to read
        #[arg(long)]
        input: Option<String>,

        /// URL to fetch instead of reading a file
        #[arg(long)]
        url: Option<String>,

        /// CSS selector locating the target element (first match wins)
        #[arg(long)]
        target: String,

        /// Ancestor levels to walk (1-10)
        #[arg(long)]
        depth: Option<usize>,

        /// Include element ids
        #[arg(long, action = clap::ArgAction::Set)]
        ids: Option<bool>,

        /// Include class lists
        #[arg(long, action = clap::ArgAction::Set)]
        classes: Option<bool>,

        /// Include extra attributes (full strategy only)
        #[arg(long, action = clap::ArgAction::Set)]
        attributes: Option<bool>,

        /// Output format: console or json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check how many elements a selector matches in a document
    Check {
        /// HTML file to read
        #[arg(long)]
        input: Option<String>,

        /// URL to fetch instead of reading a file
        #[arg(long)]
        url: Option<String>,

        /// Selector string to verify
        #[arg(long)]
        selector: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `selector-forge.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default = "default_true")]
    pub include_ids: bool,

    #[serde(default = "default_true")]
    pub include_classes: bool,

    #[serde(default)]
    pub include_attributes: bool,

    #[serde(default = "default_depth")]
    pub depth: usize,

    #[serde(default = "default_strategy")]
    pub strategy: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            include_ids: true,
            include_classes: true,
            include_attributes: false,
            depth: 10,
            strategy: "full".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: default_user_agent(),
        }
    }
}

// Serde default helpers
fn default_true() -> bool { true }
fn default_depth() -> usize { 10 }
fn default_strategy() -> String { "full".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_user_agent() -> String { "selector-forge/0.1".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("selector-forge.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Option Builders (merge CLI args with config file)
// ============================================================================

/// Build the generation options from resolved values: CLI > config > defaults.
/// Depth is clamped to the range the options surface allows.
pub fn build_selector_options(
    config: &SelectorConfig,
    strategy: Option<&str>,
    depth: Option<usize>,
    ids: Option<bool>,
    classes: Option<bool>,
    attributes: Option<bool>,
) -> SelectorOptions {
    let name = strategy.unwrap_or(&config.strategy);
    let strategy = match Strategy::from_name(name) {
        Some(strategy) => strategy,
        None => {
            eprintln!("Warning: unknown strategy '{}', using 'full'", name);
            Strategy::FullPath
        }
    };

    SelectorOptions {
        include_ids: ids.unwrap_or(config.include_ids),
        include_classes: classes.unwrap_or(config.include_classes),
        include_attributes: attributes.unwrap_or(config.include_attributes),
        depth: depth.unwrap_or(config.depth),
        strategy,
    }
    .clamped()
}

/// Build fetch options from the config file section.
pub fn build_fetch_options(config: &FetchConfig) -> FetchOptions {
    FetchOptions {
        timeout_secs: config.timeout_secs,
        user_agent: config.user_agent.clone(),
    }
}
