//! i3rab crate example
//!
//! Explains each word of the sentence given on the command line
//! (or a default sentence) with the bundled dictionary.
//!
//! ```bash
//! cargo run -p i3rab --example explain_sentence -- "كتب الولد"
//! ```

use tracing_subscriber::EnvFilter;

use i3rab::{I3rabConfig, I3rabService};

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

const DEFAULT_SENTENCE: &str = "ذهب الطالب إلى المكتبة";

fn main() -> AppResult<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let args: Vec<String> = std::env::args().skip(1).collect();
  let sentence = if args.is_empty() { DEFAULT_SENTENCE.to_string() } else { args.join(" ") };

  let service = I3rabService::init(&I3rabConfig::default())?;
  let analysis = service.analyze_sentence(&sentence, true)?;

  println!("{}", analysis.sentence);
  for result in &analysis.results {
    println!(
      "- {}: {} [{}]",
      result.word,
      result.explanation,
      result.rule.as_deref().unwrap_or("-")
    );

    for candidate in result.analyses.iter().flatten() {
      println!("    {} {} ({})", candidate.pos, candidate.diac, candidate.lex);
    }
  }

  Ok(())
}
