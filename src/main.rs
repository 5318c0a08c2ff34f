use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use edgelist_sniff::{
    check_format, check_header, convert, detect_all, detect_delimiter, ConvertOptions, Delimiter,
    HeaderMode, TableFormat,
};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Validate and process character-delimited edge-list files
#[derive(Parser, Debug)]
#[command(
    name = "edgelist-sniff",
    version,
    long_about = "Detects whether edge lists, node lists and cluster lists are separated by \
                  commas, tabs or spaces, checks their headers, and converts them to another \
                  delimiter."
)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print the delimiter of one or more files")]
    Detect(DetectArgs),

    #[command(about = "Check that a file has the header columns of a table format")]
    Check(CheckArgs),

    #[command(
        about = "Rewrite a file with another delimiter or header",
        long_about = "Rewrites a delimited file. Without --output or --inplace nothing is \
                      written.\n\n\
                      Examples:\n  \
                      edgelist-sniff convert edges.csv -o edges.tsv -d '\\t'\n  \
                      edgelist-sniff convert edges.tsv -i --header source,target"
    )]
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
struct DetectArgs {
    #[arg(value_name = "PATH", required = true, help = "Files to inspect")]
    paths: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    #[arg(value_name = "PATH", help = "Path to the input character-delimited file")]
    input: PathBuf,

    #[arg(
        long,
        value_name = "FORMAT",
        value_parser = ["edgelist", "nodelist", "cluster_list"],
        help = "Format the file should conform to"
    )]
    format: String,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    #[arg(value_name = "PATH", help = "Path to the input character-delimited file")]
    input: PathBuf,

    #[arg(short = 'o', long, conflicts_with = "inplace", help = "Path to the output file")]
    output: Option<PathBuf>,

    #[arg(short = 'i', long, help = "Write the result back to the input file")]
    inplace: bool,

    #[arg(
        short = 'd',
        long,
        value_parser = ["\\t", "\\s", "comma"],
        help = "Target delimiter"
    )]
    delimiter: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        conflicts_with = "remove_header",
        help = "Comma-separated header names for the output, e.g. \"col1,col2,col3\""
    )]
    header: Option<Vec<String>>,

    #[arg(long, help = "Remove the header from the output")]
    remove_header: bool,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("Arguments: {:?}", args);

    let mut stdout = io::stdout().lock();
    let result = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, &mut stdout).await,
        Commands::Check(check_args) => handle_check(check_args, &mut stdout),
        Commands::Convert(convert_args) => handle_convert(convert_args, &mut stdout),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    let _ = stdout.flush();
    std::process::exit(exit_code);
}

/// Print `<path>\t<delimiter>` per file. Exit code 1 if any file failed.
async fn handle_detect<W: Write>(args: &DetectArgs, out: &mut W) -> anyhow::Result<i32> {
    let results = detect_all(args.paths.iter().cloned()).await;

    let mut exit_code = 0;
    for path in &args.paths {
        match results.get(path) {
            Some(Ok(delimiter)) => writeln!(out, "{}\t{}", path.display(), delimiter)?,
            Some(Err(e)) => {
                eprintln!("{}: {}", path.display(), e);
                exit_code = 1;
            }
            None => bail!("no result for {}", path.display()),
        }
    }

    Ok(exit_code)
}

/// Exit code 1 when the file does not conform to the format.
fn handle_check<W: Write>(args: &CheckArgs, out: &mut W) -> anyhow::Result<i32> {
    let format: TableFormat = args.format.parse().map_err(anyhow::Error::msg)?;
    let delimiter = detect_delimiter(&args.input)?;
    let report = check_format(&args.input, delimiter, format)
        .with_context(|| format!("checking {}", args.input.display()))?;

    if report.is_valid() {
        writeln!(out, "Input file is a valid {}", format.display_name())?;
        return Ok(0);
    }

    write!(out, "Input file is not a valid {}. ", format.display_name())?;
    if !report.has_header {
        writeln!(out, "It has no header.")?;
    } else {
        writeln!(out, "Missing columns: {:?}.", report.missing)?;
    }
    Ok(1)
}

fn handle_convert<W: Write>(args: &ConvertArgs, out: &mut W) -> anyhow::Result<i32> {
    let target = args
        .delimiter
        .as_deref()
        .map(str::parse::<Delimiter>)
        .transpose()?;

    let header = match (&args.header, args.remove_header) {
        (Some(names), _) => HeaderMode::Replace(names.clone()),
        (None, true) => HeaderMode::Remove,
        (None, false) => HeaderMode::Keep,
    };
    let options = ConvertOptions {
        delimiter: target,
        header,
    };

    // Header arguments are checked against the input even when nothing is written.
    let source = detect_delimiter(&args.input)?;
    let info = check_header(&args.input, source)?;
    let width = (!info.first_row.is_empty()).then_some(info.first_row.len());
    options.validate(width)?;

    if (target.is_some() || args.remove_header) && target.unwrap_or(source) == source {
        writeln!(out, "No need to change delimiter")?;
    }

    let output = if args.inplace {
        Some(args.input.clone())
    } else {
        args.output.clone()
    };

    let Some(output) = output else {
        writeln!(
            out,
            "{}: delimiter {}, header {}",
            args.input.display(),
            source,
            if info.has_header { "present" } else { "absent" }
        )?;
        return Ok(0);
    };

    let summary = convert(&args.input, &output, &options).with_context(|| {
        format!("converting {} to {}", args.input.display(), output.display())
    })?;

    writeln!(
        out,
        "Converted {} to {} ({} -> {}, {} rows)",
        args.input.display(),
        output.display(),
        summary.source_delimiter,
        summary.target_delimiter,
        summary.rows_written
    )?;
    Ok(0)
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str =
            env::var("EDGELIST_SNIFF_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        parse_level(&level_str)
    };

    let mut filter = EnvFilter::from_default_env();

    if env::var("RUST_LOG").is_err() {
        if let Ok(directive) = format!("edgelist_sniff={}", level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}
