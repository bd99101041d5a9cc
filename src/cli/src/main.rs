#![warn(clippy::pedantic)]

mod config;

use std::{fs, path::PathBuf};

use bld_tracer::{
    DrillReport, Letter, NotationReference, PermutationTrace, PieceClass, Tracer, check_answer,
    shuffled_letters, validate_drill,
};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use config::TrainerConfig;
use cube_core::{Algorithm, Color, CubeState, Scrambler};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug};
use owo_colors::OwoColorize;

/// Blindfolded solving trainer: scrambles, letter traces and memo drills
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The trainer configuration file to use, in TOML format. Defaults to
    /// `bld.toml` when it exists.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print nets without colors
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random scramble.
    Scramble {
        /// Number of moves
        #[arg(short = 'n', long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply an algorithm to a solved cube and print the result.
    Apply {
        /// The algorithm, e.g. "R U' Fw2 M x".
        algorithm: String,
        /// Print the state as TOML instead of a net
        #[arg(long)]
        toml: bool,
    },
    /// Trace the edge and corner letters of a scramble or a saved state.
    Trace {
        /// The scramble to trace
        #[arg(required_unless_present = "state")]
        algorithm: Option<String>,
        /// A TOML cube state, as printed by `apply --toml`
        #[arg(long, conflicts_with = "algorithm")]
        state: Option<PathBuf>,
    },
    /// Execute a memorized letter sequence on a scramble and score it.
    Drill {
        /// Which pieces the letters are for
        #[arg(long, value_enum)]
        class: ClassArg,
        /// The scramble, e.g. "R U R' U'".
        scramble: String,
        /// The memorized letters, e.g. "a c d".
        letters: String,
    },
    /// Name the letter of a sticker combination, or check an answer for it.
    Letter {
        /// Two colors for an edge or three for a corner, starting with the
        /// sticker being named.
        #[arg(required = true, num_args = 2..=3)]
        colors: Vec<Color>,
        /// Check this answer instead of printing the letter
        #[arg(long)]
        answer: Option<String>,
    },
    /// Print every letter of a piece class in random order.
    Shuffle {
        #[arg(long, value_enum)]
        class: ClassArg,
        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum ClassArg {
    Edges,
    Corners,
}

impl From<ClassArg> for PieceClass {
    fn from(value: ClassArg) -> Self {
        match value {
            ClassArg::Edges => PieceClass::Edge,
            ClassArg::Corners => PieceClass::Corner,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = TrainerConfig::load(cli.config.as_deref())?;
    let color = config.color && !cli.no_color;
    debug!("Running with {config:?}");

    let notation = NotationReference::new();

    match cli.command {
        Commands::Scramble { length, seed } => {
            let mut scrambler = match seed.or(config.seed) {
                Some(seed) => Scrambler::with_seed(seed),
                None => Scrambler::new(),
            };
            println!(
                "{}",
                scrambler.generate(length.unwrap_or(config.scramble_length))
            );
        }
        Commands::Apply { algorithm, toml } => {
            let state = CubeState::scrambled(&algorithm.parse::<Algorithm>()?);
            if toml {
                print!("{}", toml::to_string(&state)?);
            } else {
                print!("{}", render_net(&state, color));
            }
        }
        Commands::Trace { algorithm, state } => {
            let state = match (algorithm, state) {
                (_, Some(path)) => {
                    let text = fs::read_to_string(&path)
                        .wrap_err_with(|| format!("Failed to read the cube state {path:?}"))?;
                    toml::from_str::<CubeState>(&text)
                        .wrap_err_with(|| format!("Failed to parse the cube state {path:?}"))?
                }
                (Some(algorithm), None) => CubeState::scrambled(&algorithm.parse()?),
                (None, None) => return Err(eyre!("Give a scramble or a `--state` file")),
            };

            let traced = Tracer::new(&notation).trace(&state)?;
            print_trace("Edges", "Flipped edges", &traced.edges, color);
            print_trace("Corners", "Twisted corners", &traced.corners, color);
        }
        Commands::Drill {
            class,
            scramble,
            letters,
        } => {
            let report = validate_drill(&notation, &scramble, class.into(), &letters)?;
            print_report(&report, color);
        }
        Commands::Letter { colors, answer } => match answer {
            Some(answer) => {
                let check = check_answer(&notation, &colors, &answer)?;
                if check.correct {
                    println!("{}", paint("Correct", color, |s| s.green().to_string()));
                } else {
                    println!(
                        "{} The answer is {}",
                        paint("Wrong.", color, |s| s.red().to_string()),
                        check.expected
                    );
                }
            }
            None => println!("{}", notation.letter_for_colors(&colors)?),
        },
        Commands::Shuffle { class, seed } => {
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            println!(
                "{}",
                shuffled_letters(class.into(), &mut rng).iter().join(" ")
            );
        }
    }

    Ok(())
}

fn paint(text: &str, color: bool, style: impl Fn(&str) -> String) -> String {
    if color { style(text) } else { text.to_owned() }
}

fn sticker(color: Color) -> String {
    let initial = color.initial().to_string();
    let (r, g, b) = match color {
        Color::White => (0xFF, 0xFF, 0xFF),
        Color::Yellow => (0xFF, 0xD7, 0x00),
        Color::Red => (0xE5, 0x39, 0x35),
        Color::Orange => (0xFF, 0x6F, 0x00),
        Color::Green => (0x43, 0xA0, 0x47),
        Color::Blue => (0x1E, 0x88, 0xE5),
    };
    initial.truecolor(r, g, b).bold().to_string()
}

fn render_net(state: &CubeState, color: bool) -> String {
    if color {
        state.net(sticker)
    } else {
        state.to_string()
    }
}

fn letter_list(letters: &[Letter]) -> String {
    if letters.is_empty() {
        "none".to_owned()
    } else {
        letters.iter().join(" ")
    }
}

fn print_trace(label: &str, misoriented_label: &str, trace: &PermutationTrace, color: bool) {
    let sequence = trace.to_string();
    println!(
        "{}: {}",
        paint(label, color, |s| s.bold().to_string()),
        if sequence.is_empty() { "solved" } else { &sequence }
    );
    if !trace.misoriented.is_empty() {
        println!("{misoriented_label}: {}", letter_list(&trace.misoriented));
    }
}

fn print_report(report: &DrillReport, color: bool) {
    let summary = report.summary();
    let summary = match report.score {
        90.. => paint(&summary, color, |s| s.green().to_string()),
        50.. => paint(&summary, color, |s| s.yellow().to_string()),
        _ => paint(&summary, color, |s| s.red().to_string()),
    };
    let misoriented = match report.class {
        PieceClass::Edge => "Flipped edges",
        PieceClass::Corner => "Twisted corners",
    };

    println!("{summary}");
    println!("Expected sequence: {}", report.expected);
    println!("Your sequence: {}", report.user.iter().join(" "));
    println!(
        "{} in position: {}/24",
        report.class,
        report.in_position().len()
    );
    println!("{misoriented}: {}", letter_list(&report.result.misoriented));
    if !report.solved && !report.result.cycles.is_empty() {
        println!("Left unsolved: {}", report.result);
    }
    for suggestion in report.suggestions() {
        println!("- {suggestion}");
    }
}

#[cfg(test)]
mod tests {
    use cube_core::Face;

    use super::*;

    #[test_log::test]
    fn colored_net_keeps_the_plain_layout() {
        let state = CubeState::scrambled(&"R U' x".parse().unwrap());
        assert_eq!(render_net(&state, false), state.to_string());

        let colored = render_net(&state, true);
        assert_eq!(colored.lines().count(), 9);
        assert!(colored.lines().nth(3).unwrap().starts_with(&sticker(state[Face::L][0][0])));
    }
}
