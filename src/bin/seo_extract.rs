//! Command-line front end: read URLs, extract fields, write a spreadsheet.
//!
//! ```text
//! seo_extract urls.txt -f h1,meta-title,meta-description -o report.xlsx
//! cat urls.txt | seo_extract --format csv -o -
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use rs_seo_extractor::export::{self, ExportFormat};
use rs_seo_extractor::input::parse_url_list;
use rs_seo_extractor::{Extractor, Field, Options, Scheme, DEFAULT_USER_AGENT};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seo_extract")]
#[command(about = "Extract H1, H2, meta title/description, canonical and robots tags from a list of URLs")]
#[command(version)]
struct Cli {
    /// File with one URL per line (reads stdin when omitted or `-`)
    urls: Option<PathBuf>,

    /// Comma-separated fields, e.g. `h1,meta-title,canonical` (default: all)
    #[arg(short, long, value_name = "FIELDS")]
    fields: Option<String>,

    /// Output file; `-` writes to stdout (default: seo_extract_<timestamp>.<format>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: xlsx, csv or json
    #[arg(long, default_value = "xlsx")]
    format: ExportFormat,

    /// Page request timeout in seconds
    #[arg(long, default_value_t = 15, env = "SEO_EXTRACT_TIMEOUT")]
    timeout: u64,

    /// Scheme added to URLs that have none: https or http
    #[arg(long, default_value = "https", env = "SEO_EXTRACT_SCHEME")]
    scheme: Scheme,

    /// Skip the locale warm-up request for `/xx-XX/` paths
    #[arg(long)]
    no_warmup: bool,

    /// User-Agent header
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "SEO_EXTRACT_USER_AGENT")]
    user_agent: String,

    /// Verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
            default_scheme: self.scheme,
            locale_warmup: !self.no_warmup,
            ..Options::default()
        }
    }

    fn fields(&self) -> Result<Vec<Field>> {
        let Some(list) = &self.fields else {
            return Ok(Field::ALL.to_vec());
        };
        let fields = Field::parse_list(list)?;
        if fields.is_empty() {
            bail!("no fields selected");
        }
        Ok(fields)
    }

    fn read_urls(&self) -> Result<Vec<String>> {
        let mut text = String::new();
        match &self.urls {
            Some(path) if path.as_os_str() != "-" => {
                File::open(path)
                    .and_then(|mut f| f.read_to_string(&mut text))
                    .with_context(|| format!("reading {}", path.display()))?;
            }
            _ => {
                io::stdin()
                    .read_to_string(&mut text)
                    .context("reading URLs from stdin")?;
            }
        }
        Ok(parse_url_list(&text))
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fields = cli.fields()?;
    let urls = cli.read_urls()?;
    if urls.is_empty() {
        bail!("no URLs given: pass a file or pipe one URL per line on stdin");
    }

    let extractor = Extractor::new(cli.options()).context("building HTTP client")?;
    tracing::info!(urls = urls.len(), fields = fields.len(), "starting extraction");

    let rows = extractor.extract_batch(&urls, &fields);
    let failed = rows.iter().filter(|row| row.is_error()).count();

    match &cli.output {
        Some(path) if path.as_os_str() == "-" => {
            let stdout = io::stdout();
            export::write(cli.format, &rows, &fields, stdout.lock())?;
        }
        output => {
            let path = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(export::default_file_name(cli.format, &Local::now())));
            let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export::write(cli.format, &rows, &fields, &mut writer)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "wrote {} rows", rows.len());
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total = rows.len(), "some URLs could not be extracted");
    }

    Ok(())
}
