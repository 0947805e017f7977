use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::info;

use ngram_stats_core::io::{normalize_folder, FileSource};
use ngram_stats_core::{NGramPipeline, PipelineConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Reports the most frequent n-grams of a set of text files.
#[derive(Debug, Parser)]
#[command(name = "ngram-stats", version)]
struct Cli {
    /// Largest n-gram order to count (asked on stdin when missing)
    #[arg(short = 'n', long, env = "NGRAM_MAX_ORDER")]
    max_order: Option<String>,

    /// Number of top n-grams to report per order (asked on stdin when missing)
    #[arg(short = 't', long, env = "NGRAM_TOP")]
    top: Option<String>,

    /// Extension of the files read from folder inputs
    #[arg(short, long, default_value = "txt")]
    extension: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Files or folders to read, one document per file (asked on stdin when missing)
    inputs: Vec<String>,
}

/// Prints `question` and reads one trimmed line from stdin.
fn prompt(question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_owned())
}

/// Builds the pipeline configuration from flags, asking `ask` for missing values.
fn resolve_config<F>(
    max_order: Option<String>,
    top: Option<String>,
    mut ask: F,
) -> Result<PipelineConfig, Box<dyn std::error::Error>>
where
    F: FnMut(&str) -> io::Result<String>,
{
    let max_order = match max_order {
        Some(v) => v,
        None => ask("What max N-Gram do you want to find? ")?,
    };
    let top = match top {
        Some(v) => v,
        None => ask("How many top results do you want to receive? ")?,
    };
    Ok(PipelineConfig::parse(&max_order, &top)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // Configuration is validated before any file is touched
    let config = resolve_config(cli.max_order, cli.top, prompt)?;

    let inputs = if cli.inputs.is_empty() {
        vec![prompt("Please enter your file name: ")?]
    } else {
        cli.inputs
    };

    let mut source = FileSource::new();
    for input in &inputs {
        source.add(normalize_folder(input), &cli.extension)?;
    }
    info!("{} files to read", source.paths().len());

    info!("Starting timer...");
    let start = Instant::now();

    let mut pipeline = NGramPipeline::new(config)?;
    for document in source.documents() {
        pipeline.add_document(&document?)?;
    }
    let report = pipeline.report();

    match cli.format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    let stats = pipeline.stats();
    info!(
        "{} documents, {} sentences, {} ideas",
        stats.documents, stats.sentences, stats.ideas
    );
    info!("Execution time = {} milliseconds.", start.elapsed().as_millis());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngram_stats_core::PipelineError;

    #[test]
    fn parses_flags_and_inputs() {
        let cli = Cli::try_parse_from(["ngram-stats", "-n", "3", "--top", "5", "--format", "json", "a.txt", "data"]).unwrap();
        assert_eq!(cli.max_order.as_deref(), Some("3"));
        assert_eq!(cli.top.as_deref(), Some("5"));
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.extension, "txt");
        assert_eq!(cli.inputs, vec!["a.txt", "data"]);
    }

    #[test]
    fn negative_top_flag_is_a_config_error() {
        let cli = Cli::try_parse_from(["ngram-stats", "-n", "2", "--top=-1", "a.txt"]).unwrap();
        let err = resolve_config(cli.max_order, cli.top, |_| panic!("no prompt expected")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::InvalidTopCount(v)) if v == "-1"
        ));
    }

    #[test]
    fn missing_values_are_prompted() {
        let mut questions = Vec::new();
        let config = resolve_config(None, None, |q| {
            questions.push(q.to_owned());
            Ok(if questions.len() == 1 { " 3\n".to_owned() } else { "7".to_owned() })
        })
        .unwrap();

        assert_eq!(config, PipelineConfig::new(3, 7).unwrap());
        assert_eq!(questions.len(), 2);
        assert!(questions[0].contains("max N-Gram"));
    }

    #[test]
    fn prompted_zero_order_is_rejected() {
        let err = resolve_config(None, Some("5".to_owned()), |_| Ok("0".to_owned())).unwrap_err();
        assert!(matches!(err.downcast_ref::<PipelineError>(), Some(PipelineError::InvalidMaxOrder(_))));
    }
}
