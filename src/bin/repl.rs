use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordwise::{SpellCorrector, SuggestConfig, Suggestion, SuggestionRequest, WordAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "wordwise", about = "Interactive spelling suggestions from a word list")]
struct Args {
    /// Newline-delimited word list
    #[arg(default_value = "word.txt")]
    dict: PathBuf,

    /// JSON file with ranking settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum suggestions per word (overrides the config file)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Score candidates on all cores
    #[arg(long)]
    parallel: bool,

    /// Read one {"query": ...} object per line and print suggestions as JSON arrays
    #[arg(long)]
    json: bool,
}

fn print_suggestions(
    out: &mut impl Write,
    word: &str,
    list: &[Suggestion],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        writeln!(out, "{}", serde_json::to_string(list)?)?;
        return Ok(());
    }
    if list.is_empty() {
        writeln!(out, "  {}  ->  (no suggestions)", word)?;
        return Ok(());
    }
    writeln!(out, "  {}", word)?;
    for s in list {
        writeln!(out, "    {:<20} penalty {:>3}  {:>5.1}%", s.word, s.penalty, s.confidence)?;
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs one trimmed input line. The whole line is a single query; in JSON
/// mode it must be a `{"query": ...}` object.
fn handle_line(
    analyzer: &mut WordAnalyzer,
    input: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<Flow, Box<dyn std::error::Error>> {
    match input {
        "" => return Ok(Flow::Continue),
        ":q" | ":quit" => return Ok(Flow::Quit),
        ":history" => {
            if json {
                let entries: Vec<&str> = analyzer.history().iter().collect();
                writeln!(out, "{}", serde_json::to_string(&entries)?)?;
            } else {
                for (i, entry) in analyzer.history().iter().enumerate() {
                    writeln!(out, "  {:>2}. {}", i + 1, entry)?;
                }
            }
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    if json {
        let request: SuggestionRequest = match serde_json::from_str(input) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "skipping malformed request");
                return Ok(Flow::Continue);
            }
        };
        let list = analyzer.analyze_request(&request);
        print_suggestions(out, &request.query, &list, true)?;
    } else {
        let list = analyzer.analyze(input);
        print_suggestions(out, input, &list, false)?;
    }
    Ok(Flow::Continue)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordwise=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SuggestConfig::from_json_file(path)?,
        None => SuggestConfig::default(),
    };
    if let Some(limit) = args.limit {
        config = config.with_limit(limit);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }

    let corrector = SpellCorrector::from_word_list_file(&args.dict)?;
    let mut analyzer = WordAnalyzer::new(corrector, config);

    let stdin = io::stdin();
    let mut out = io::stdout();
    if !args.json {
        writeln!(
            out,
            "wordwise - dictionary: {} ({} words)\n:history to list past queries, :q to quit",
            args.dict.display(),
            analyzer.corrector().len()
        )?;
    }

    let mut line = String::new();
    loop {
        if !args.json {
            write!(out, "> ")?;
            out.flush()?;
        }
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if handle_line(&mut analyzer, line.trim(), args.json, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
