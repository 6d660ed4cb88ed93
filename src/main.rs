use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use callcheck::{
    analysis, apply_corrections, corrections, load_transcription, report, stt, unknown_lexemes,
    AssemblyClient, AssemblyConfig, LexiconStore, ProtocolChecker, SpellOracle, Tokenizer,
    WordlistOracle,
};

#[derive(Parser)]
#[command(name = "callcheck")]
#[command(author, version, about = "Customer-service call compliance analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transcribed call and write a compliance report
    Analyze {
        /// Input transcription file (JSON with text + utterances)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the compliance report (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Lexicon file (created empty if absent)
        #[arg(long, default_value = "lexicon.json")]
        lexicon: PathBuf,

        /// Wordlist backing the spell oracle (one word per line)
        #[arg(long)]
        wordlist: Option<PathBuf>,

        /// Correction batch to apply before scoring (JSON)
        #[arg(long)]
        corrections: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Transcribe and diarize an audio file via AssemblyAI
    Transcribe {
        /// Input audio file
        #[arg(short, long)]
        audio: PathBuf,

        /// Output transcription file (default: outputs/<stem>/transcription.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print ranked correction suggestions for one word
    Suggest {
        /// The word to look up
        word: String,

        /// Wordlist backing the spell oracle
        #[arg(long)]
        wordlist: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            lexicon,
            wordlist,
            corrections,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_call(input, output, lexicon, wordlist, corrections)
        }
        Commands::Transcribe {
            audio,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            transcribe_audio(audio, output).await
        }
        Commands::Suggest { word, wordlist } => {
            setup_logging(false);
            suggest_word(&word, &wordlist)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn analyze_call(
    input: PathBuf,
    output: PathBuf,
    lexicon: PathBuf,
    wordlist: Option<PathBuf>,
    corrections_path: Option<PathBuf>,
) -> Result<()> {
    info!("Loading transcription from {:?}", input);
    let transcription =
        load_transcription(&input).context("Failed to load input transcription")?;

    let mut store = LexiconStore::load(&lexicon).context("Failed to load lexicon")?;
    let oracle = match &wordlist {
        Some(path) => WordlistOracle::load(path)
            .with_context(|| format!("Failed to load wordlist: {:?}", path))?,
        None => WordlistOracle::from_content(""),
    };
    info!(
        "Lexicon: {} entries, wordlist: {} words",
        store.len(),
        oracle.len()
    );

    let tokenizer = Tokenizer::new(&store, &oracle);
    let mut tokens = tokenizer.tokenize(&transcription.text);
    info!("Tokenized {} words", tokens.len());

    if let Some(path) = corrections_path {
        let batch = corrections::load_batch(&path)
            .with_context(|| format!("Failed to load corrections: {:?}", path))?;
        let patched = apply_corrections(&mut store, &mut tokens, &batch)
            .context("Failed to apply corrections")?;
        info!("Corrections: {} entries, {} tokens patched", batch.len(), patched);
    }

    let sentiment = analysis::score(&tokens);
    let protocol = ProtocolChecker::default().check(&tokens, &transcription.utterances);
    let compliance = report::assemble(sentiment, protocol);
    report::write_json(&compliance, &output).context("Failed to write report")?;

    println!("Compliance Report");
    println!("=================");
    println!(
        "Sentiment: {:?} (score {})",
        compliance.sentiment_analysis.sentiment, compliance.sentiment_analysis.score
    );
    println!(
        "Positive words: {}, negative words: {}",
        compliance.sentiment_analysis.positive_words_count,
        compliance.sentiment_analysis.negative_words_count
    );
    println!("Greeting: {:?}", compliance.protocol_analysis.greeting.status);
    println!(
        "Identification: {:?}",
        compliance.protocol_analysis.identification.status
    );
    println!(
        "Prohibited words: {:?} ({})",
        compliance.protocol_analysis.prohibited_words.status,
        compliance.protocol_analysis.prohibited_words.found.join(", ")
    );
    println!("Farewell: {:?}", compliance.protocol_analysis.farewell.status);

    let unknown = unknown_lexemes(&tokens);
    if !unknown.is_empty() {
        println!();
        println!("Unknown words needing review ({}):", unknown.len());
        for token in unknown {
            if token.suggestions.is_empty() {
                println!("  {}", token.lexeme);
            } else {
                println!("  {} (suggestions: {})", token.lexeme, token.suggestions.join(", "));
            }
        }
    }

    Ok(())
}

async fn transcribe_audio(audio: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let cache_path = output.unwrap_or_else(|| stt::default_cache_path(&audio));

    let config = AssemblyConfig::from_env()?;
    let client = AssemblyClient::new(config);
    let transcription = stt::transcribe_cached(&client, &audio, &cache_path).await?;

    println!("Transcription written to {:?}", cache_path);
    println!(
        "{} characters of text, {} utterances",
        transcription.text.len(),
        transcription.utterances.len()
    );

    Ok(())
}

fn suggest_word(word: &str, wordlist: &PathBuf) -> Result<()> {
    let oracle = WordlistOracle::load(wordlist)
        .with_context(|| format!("Failed to load wordlist: {:?}", wordlist))?;
    let store = LexiconStore::in_memory();
    let tokenizer = Tokenizer::new(&store, &oracle);

    if oracle.is_valid(word) {
        println!("{} is valid", word);
        return Ok(());
    }

    let suggestions = tokenizer.find_suggestions(word);
    if suggestions.is_empty() {
        println!("No suggestions for {}", word);
    } else {
        println!("Suggestions for {}: {}", word, suggestions.join(", "));
    }

    Ok(())
}
