use clap::Parser;
use tracing::Level;

use crate::catalog::DEFAULT_CATALOG_URL;

#[derive(Parser, Debug)]
#[command(name = "bookid")]
#[command(version)]
#[command(about = "Extract and validate ISBNs from EPUB files", long_about = None)]
#[command(after_help = "Examples:\n  \
  bookid book.epub                 print the compact ISBN of book.epub\n  \
  bookid -l *.epub                 list every identifier of each book\n  \
  cat book.epub | bookid -g -      read from stdin and look the ISBN up\n  \
  bookid -c 978-5-4461-1766-6      check an ISBN checksum")]
pub struct Cli {
    /// EPUB files ("-" reads standard input), or ISBNs with -c
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<String>,

    /// List all identifiers
    #[arg(short = 'l')]
    pub list: bool,

    /// Print the ISBN exactly as declared instead of the compact form
    #[arg(short = 'r')]
    pub raw: bool,

    /// Treat inputs as ISBNs and check them
    #[arg(short = 'c')]
    pub check: bool,

    /// Look up each ISBN in the catalog
    #[arg(short = 'g')]
    pub lookup: bool,

    /// Catalog volume search endpoint
    #[arg(long, value_name = "URL", env = "BOOKID_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Catalog API key
    #[arg(long, value_name = "KEY", env = "BOOKID_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Verbose logging
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn is_stdin(input: &str) -> bool {
        input == "-"
    }

    /// Default log level when `RUST_LOG` is unset
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
