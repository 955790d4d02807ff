use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use log::{error, info, warn};
use wordle_sieve::{render, session::DEFAULT_TOP, Result, Round, Session, WordList};

/// Narrow down a Wordle answer from the colours your guesses got.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The word list to narrow down, one word per line.
    ///
    /// Lines that are not exactly five letters are skipped.
    #[clap(short, long, default_value = "wordle.txt")]
    words: PathBuf,

    /// How many suggestions to show after each round.
    #[clap(short, long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// A round to play, written as GUESS=FEEDBACK (for example crane=xxyxg).
    ///
    /// Feedback uses g for green, y for yellow and x for gray. May be given
    /// more than once. When any rounds are given they are played in order and
    /// the program exits instead of prompting.
    #[clap(short, long = "round")]
    rounds: Vec<String>,

    /// Print each report as JSON instead of a table.
    #[clap(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", describe(&e));
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let words = WordList::from_path(&args.words)?;
    if words.is_empty() {
        warn!("{} has no five-letter words", args.words.display());
    }
    info!("loaded {} words from {}", words.len(), args.words.display());

    let mut session = Session::new(words).top(args.top);
    let mut output = io::stdout();

    if args.rounds.is_empty() {
        return interactive(&mut session, args.json, &mut output);
    }

    script(&mut session, &args.rounds, args.json, &mut output)
}

/// Plays `GUESS=FEEDBACK` rounds in order. A malformed round is reported and
/// skipped; the rounds after it still run.
fn script(
    session: &mut Session,
    rounds: &[String],
    json: bool,
    output: &mut impl Write,
) -> Result<()> {
    for arg in rounds.iter() {
        let (guess, feedback) = split_round(arg);
        match Round::parse(guess, feedback) {
            Ok(round) => play(session, round, json, output)?,
            Err(e) => warn!("skipping round {:?}: {}", arg, describe(&e)),
        }
    }

    Ok(())
}

/// Splits a `GUESS=FEEDBACK` argument. A missing `=` leaves the feedback
/// empty, which is then rejected as too short.
fn split_round(arg: &str) -> (&str, &str) {
    arg.split_once('=').unwrap_or((arg, ""))
}

fn play(session: &mut Session, round: Round, json: bool, output: &mut impl Write) -> Result<()> {
    for i in round.feedback.unrecognized() {
        warn!(
            "ignoring unrecognized feedback symbol at position {}",
            i + 1
        );
    }

    let report = session.apply(round);

    let conflicts = session.constraints().conflicts();
    if !conflicts.is_empty() {
        warn!(
            "letters are both ruled out and required: {}",
            conflicts.iter().collect::<String>()
        );
    }

    if json {
        writeln!(output, "{}", report.to_json()?)?;
    } else {
        writeln!(output, "{}", render::grid(session.history()))?;
        writeln!(output)?;
        writeln!(output, "{}", report)?;
    }

    Ok(())
}

fn interactive(session: &mut Session, json: bool, output: &mut impl Write) -> Result<()> {
    writeln!(
        output,
        "Loaded {} words. Enter feedback as g (green), y (yellow) or x (gray).",
        session.words().len()
    )?;
    writeln!(output, "An empty guess quits.")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let guess = match prompt(&mut input, output, "Guess: ")? {
            Some(guess) if !guess.is_empty() => guess,
            _ => return Ok(()),
        };
        let feedback = match prompt(&mut input, output, "Feedback: ")? {
            Some(feedback) => feedback,
            None => return Ok(()),
        };

        match Round::parse(&guess, &feedback) {
            Ok(round) => {
                let solved = round.feedback.is_win();
                play(session, round, json, output)?;
                if solved {
                    writeln!(output, "Solved in {} guesses.", session.history().len())?;
                    return Ok(());
                }
            }
            Err(e) => writeln!(output, "{}", describe(&e))?,
        }
    }
}

/// Prints `label` and reads one trimmed line, or `None` at end of input.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> Result<Option<String>> {
    output.write_all(label.as_bytes())?;
    output.flush()?;

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Formats an error followed by all of its sources.
fn describe(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(e) = source {
        text.push_str(": ");
        text.push_str(&e.to_string());
        source = e.source();
    }
    text
}
