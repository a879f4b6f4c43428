use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `portal-search` binary.
#[derive(Parser, Debug)]
#[command(
    name = "portal-search",
    version,
    long_version = long_version(),
    about = "Search the community directory portal from the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "PORTAL_SEARCH_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'b',
        long = "base-url",
        value_name = "URL",
        help = "Portal address used for searches and links (default: http://localhost:8000)"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        short = 'f',
        long,
        value_name = "FILE",
        help = "Answer searches from a local directory snapshot instead of the portal (default: none)"
    )]
    pub(crate) fixture: Option<PathBuf>,
    #[arg(
        long = "timeout-ms",
        value_name = "MS",
        help = "Abandon portal requests after this many milliseconds (default: 10000)"
    )]
    pub(crate) timeout_ms: Option<u64>,
    #[arg(
        long = "palette-debounce-ms",
        value_name = "MS",
        help = "Quiet period before the palette searches (default: 280)"
    )]
    pub(crate) palette_debounce_ms: Option<u64>,
    #[arg(
        long = "hero-debounce-ms",
        value_name = "MS",
        help = "Quiet period before the inline search runs (default: 300)"
    )]
    pub(crate) hero_debounce_ms: Option<u64>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the page title (default: Portal de Catequese)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Prefill the inline search (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Log filter written to the log file; PORTAL_SEARCH_LOG takes precedence (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
