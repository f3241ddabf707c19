use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use music_ontology::config::{ProviderOptions, StoreFormat, DEFAULT_BASE_IRI};
use music_ontology::provider::MusicOntologyProvider;
use music_ontology::report::CatalogReport;

/// Build, persist and inspect the music OWL ontology.
#[derive(Parser)]
#[command(name = "music-ontology", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base IRI of the ontology. A `file://` IRI also names the output file.
    #[arg(short, long, value_name = "URI", default_value = DEFAULT_BASE_IRI, global = true)]
    base_iri: String,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build the ontology with the sample catalog and save it.
    Create {
        /// Output file path [default: derived from the base IRI].
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format: ntriples, turtle [default: from the file extension].
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<StoreFormat>,
    },
    /// Load a saved ontology and print its catalog.
    Show {
        /// Input file path [default: derived from the base IRI].
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Save and reload twice, checking nothing changes.
    Verify {
        /// Scratch file path [default: derived from the base IRI].
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "music_ontology=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn provider(
    base_iri: &str,
    path: Option<PathBuf>,
    format: Option<StoreFormat>,
) -> MusicOntologyProvider {
    MusicOntologyProvider::with_options(ProviderOptions {
        path,
        format,
        ..ProviderOptions::with_base_iri(base_iri)
    })
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Create { output, format } => {
            let provider = provider(&cli.base_iri, output, format);
            let graph = provider.create()?;
            let triple_count = provider.save(&graph)?;
            if !cli.quiet {
                eprintln!(
                    "Wrote {triple_count} triples for {} individuals to {}",
                    graph.len(),
                    display_location(&provider)
                );
            }
        }
        Command::Show { input, json } => {
            let provider = provider(&cli.base_iri, input, None);
            let graph = provider.load()?;
            let report = CatalogReport::from_graph(&graph)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        Command::Verify { output } => {
            let provider = provider(&cli.base_iri, output, None);
            let path = provider
                .options()
                .location()
                .ok_or_else(|| format!("base IRI `{}` does not name a local file", cli.base_iri))?;

            let created = provider.create()?;
            provider.save(&created)?;
            let first_bytes = std::fs::read(&path)?;
            let first = provider.load()?;
            provider.save(&first)?;
            let second_bytes = std::fs::read(&path)?;
            let second = provider.load()?;

            if created != first || first != second {
                return Err("reloaded graph differs from the saved one".into());
            }
            if first_bytes != second_bytes {
                return Err("saving a reloaded graph changed the file".into());
            }
            if !cli.quiet {
                eprintln!(
                    "Round trip OK: {} individuals, {} bytes in {}",
                    second.len(),
                    second_bytes.len(),
                    path.display()
                );
            }
        }
    }
    Ok(())
}

fn display_location(provider: &MusicOntologyProvider) -> String {
    provider
        .options()
        .location()
        .map(|path| path.display().to_string())
        .unwrap_or_default()
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
