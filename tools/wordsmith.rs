/// Wordsmith: render any generator from the command line.
///
/// Usage: wordsmith <generator> [--count <n>] [--seed <n>] [--assets <path>]
///                  [--syllables <n>] [--set <name>] [--stats]
///
/// `--assets` accepts a single RON bundle or a directory of bundles; they are
/// merged over the embedded word lists. `RUST_LOG=debug` shows what loaded.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::path::PathBuf;
use wordsmith::{
    AncientName, BandName, Component, ComponentError, CriminalGangName, ExoticCharacter,
    FictionalElementName, FictionalMineralName, NauticalShipName, PersonName, RandomSource,
    ReadableIdentifier, TownName, WeirdName, WordLists, WorkTitle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Generator {
    Ancient,
    Weird,
    Person,
    Town,
    Band,
    Gang,
    Ship,
    WorkTitle,
    Element,
    Mineral,
    Exotic,
    Identifier,
}

#[derive(Parser, Debug)]
#[command(name = "wordsmith")]
#[command(about = "Generate names, titles and other procedural text")]
struct Args {
    /// Which generator to run
    #[arg(value_enum)]
    generator: Generator,

    /// How many results to print
    #[arg(short = 'n', long, default_value = "10")]
    count: usize,

    /// Random seed (uses system randomness if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Extra word-list bundle (file or directory) merged over the defaults
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Syllable count for the phonetic name generators
    #[arg(long, default_value = "3")]
    syllables: usize,

    /// Character set for the exotic generator (any set if not specified)
    #[arg(long)]
    set: Option<String>,

    /// Print a distinct-output summary after the results
    #[arg(long)]
    stats: bool,
}

/// Exotic characters drawn from one named set.
#[derive(Debug)]
struct NamedSet {
    characters: ExoticCharacter,
    name: String,
}

impl Component for NamedSet {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.characters.random_character_from_set(&self.name, rng)
    }
}

/// Identifiers stamped with the time of each render.
#[derive(Debug)]
struct Stamped(ReadableIdentifier);

impl Component for Stamped {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.0.make(rng)
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let lists = match load_lists(args.assets.as_ref()) {
        Ok(lists) => lists,
        Err(e) => {
            eprintln!("Error loading word lists: {}", e);
            std::process::exit(1);
        }
    };

    let generator = match build(&args, &lists) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Invalid generator setup: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };

    let mut seen = HashSet::new();
    for _ in 0..args.count {
        match generator.render(rng.as_mut()) {
            Ok(text) => {
                println!("{}", text);
                seen.insert(text);
            }
            Err(e) => {
                eprintln!("Render failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    if args.stats && args.count > 0 {
        println!();
        println!(
            "{} distinct of {} ({:.0}%)",
            seen.len(),
            args.count,
            seen.len() as f64 / args.count as f64 * 100.0
        );
    }
}

fn load_lists(assets: Option<&PathBuf>) -> Result<WordLists, wordsmith::WordListError> {
    let mut lists = WordLists::embedded();
    if let Some(path) = assets {
        let extra = WordLists::load(path)?;
        log::info!(
            "merged {} lists from {}",
            extra.list_names().count(),
            path.display()
        );
        lists.merge(extra);
    }
    Ok(lists)
}

fn build(args: &Args, lists: &WordLists) -> Result<Box<dyn Component>, ComponentError> {
    Ok(match args.generator {
        Generator::Ancient => Box::new(AncientName::new(args.syllables)?),
        Generator::Weird => Box::new(WeirdName::new(args.syllables)?),
        Generator::Person => Box::new(PersonName::from_lists(lists, None)),
        Generator::Town => Box::new(TownName::from_lists(lists)?),
        Generator::Band => Box::new(BandName::from_lists(lists)?),
        Generator::Gang => Box::new(CriminalGangName::from_lists(lists)?),
        Generator::Ship => Box::new(NauticalShipName::from_lists(lists)?),
        Generator::WorkTitle => Box::new(WorkTitle::from_lists(lists)?),
        Generator::Element => Box::new(FictionalElementName::from_lists(lists)?),
        Generator::Mineral => Box::new(FictionalMineralName::from_lists(lists)?),
        Generator::Identifier => Box::new(Stamped(ReadableIdentifier::from_lists(lists)?)),
        Generator::Exotic => {
            let characters = ExoticCharacter::from_lists(lists);
            match &args.set {
                Some(name) => {
                    lists.character_set(name)?;
                    Box::new(NamedSet {
                        characters,
                        name: name.clone(),
                    })
                }
                None => Box::new(characters),
            }
        }
    })
}
