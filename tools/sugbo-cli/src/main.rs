mod logs;
mod report;
mod source;

use std::fs;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use rkyv::check_archived_root;
use sugbo_morph::AffixStemmer;
use sugbo_parser::{Parser as SentenceParser, ParserOptions};
use sugbo_protocol::{Dictionary, RootLookup};

use crate::report::Report;
use crate::source::{DictionaryFile, DictionarySource};

#[derive(Parser)]
#[command(author, version, about = "Grammar checker for single Cebuano sentences")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON dictionary source into its rkyv binary form
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Check one sentence and print its diagnostics and parse tree
    Check(CheckArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Dictionary to use: a `.json` source or a compiled file
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Deepest phrase nesting the parser will follow
    #[arg(long, default_value_t = ParserOptions::default().max_depth)]
    max_depth: usize,

    /// The sentence
    text: String,
}

fn main() -> anyhow::Result<()> {
    logs::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Compile { input, output } => compile(input, output),
        Command::Check(args) => {
            let file = match &args.dictionary {
                Some(path) => DictionaryFile::open(path)?,
                None => DictionaryFile::sample()?,
            };
            match file {
                DictionaryFile::Json(dict) => check(&args, &dict),
                DictionaryFile::Archive(bytes) => {
                    let archived = check_archived_root::<Dictionary>(&bytes[..])
                        .map_err(|e| anyhow!("invalid dictionary archive: {e}"))?;
                    check(&args, archived)
                }
            }
        }
    }
}

fn compile(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    println!("Reading JSON from {:?}...", input);
    let text = fs::read_to_string(&input)?;
    let dict = DictionarySource::from_json(&text)?.into_dictionary();

    println!("Compiling dictionary version {} with {} roots...", dict.version, dict.len());
    let bytes = source::compile(&dict)?;
    fs::write(&output, &bytes)?;

    println!("Binary written to {:?}", output);
    Ok(())
}

fn check<D: RootLookup + ?Sized>(args: &CheckArgs, dict: &D) -> anyhow::Result<()> {
    let stemmer = AffixStemmer::new(dict);
    let options = ParserOptions { max_depth: args.max_depth };
    let parsed = SentenceParser::new(&stemmer, dict)
        .with_options(options)
        .parse(&args.text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&Report::new(&parsed))?);
    } else {
        print!("{}", report::text(&parsed));
    }
    Ok(())
}
