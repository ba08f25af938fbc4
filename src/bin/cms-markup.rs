use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser as ClapParser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use cms_markup::config::{self, Config};
use cms_markup::renderer::{DescriptionRenderer, HtmlRenderer, Renderer};
use cms_markup::value;

#[derive(ClapParser)]
#[command(
    version,
    about = "Render CMS markdown snippets",
    long_about = "Renders markdown-flavored CMS text into HTML fragments, or splits a \
                  description into narrative text and bullet items.\n\n\
                  If no input file is specified, reads from stdin.\n\
                  If no output file is specified, writes to stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// configuration file (defaults to $XDG_CONFIG_HOME/cms-markup/config.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// debug log file
    #[arg(short, long, value_name = "FILE", global = true)]
    debuglogfile: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand)]
enum Command {
    /// Render text into an HTML fragment
    Html(IoArgs),
    /// Split a description into {text, items} JSON
    Describe {
        #[command(flatten)]
        io_args: IoArgs,
        /// pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads from stdin if not specified)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Treat the input as a JSON value; anything but a string renders empty
    #[arg(long)]
    json: bool,
}

fn init_logger(filter_level: log::LevelFilter, logfile: Option<PathBuf>) -> anyhow::Result<()> {
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(filename) = logfile {
        let file = File::create(&filename)
            .with_context(|| format!("cannot create log file {}", filename.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            filter_level,
            simplelog::Config::default(),
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Ok(Config::load_from_path(path)?);
    }
    match config::load_config()? {
        Some(loaded) => {
            log::debug!("loaded config from {}", loaded.path.display());
            Ok(loaded.config)
        }
        None => Ok(Config::default()),
    }
}

fn read_input(io_args: &IoArgs) -> anyhow::Result<String> {
    let raw = match &io_args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    if !io_args.json {
        return Ok(raw);
    }
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("input is not valid JSON")?;
    Ok(value::as_text(&value).unwrap_or_default().to_string())
}

fn write_output<R: Renderer>(renderer: &R, text: &str, io_args: &IoArgs) -> anyhow::Result<()> {
    match &io_args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            renderer.format(text, &mut writer)?;
            writeln!(writer)?;
            writer.flush()?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            renderer.format(text, &mut writer)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose.log_level_filter(), args.debuglogfile)?;

    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Command::Html(io_args) => {
            let text = read_input(io_args)?;
            let renderer = HtmlRenderer::new(config.html_options());
            write_output(&renderer, &text, io_args)
        }
        Command::Describe { io_args, pretty } => {
            let text = read_input(io_args)?;
            let renderer = DescriptionRenderer::new(config.description_options(*pretty));
            write_output(&renderer, &text, io_args)
        }
    }
}
