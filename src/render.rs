//! Showing rounds and suggestions to a person.
//!
//! With the `fancy` feature, grid rows are coloured like the game board
//! (when the terminal supports it) and reports are printed as tables.
//! Without it, everything is plain text.

use std::fmt::Display;

#[cfg(feature = "fancy")]
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
#[cfg(feature = "fancy")]
use owo_colors::{AnsiColors, OwoColorize, Stream};

use crate::{Grade, Report, Round};

/// Renders one row of the board for `round`.
///
/// Each letter is shown in uppercase on the colour of its grade: green for
/// [`Grade::Correct`], yellow for [`Grade::Almost`] and gray for
/// [`Grade::Incorrect`]. Letters whose symbol was not recognized are left
/// uncoloured.
pub fn grid_row(round: &Round) -> String {
    round
        .guess
        .chars()
        .zip(round.feedback.grades().iter())
        .map(|(c, grade)| cell(c.to_ascii_uppercase(), *grade))
        .collect()
}

/// Renders every round played so far, one row per line.
pub fn grid(rounds: &[Round]) -> String {
    rounds
        .iter()
        .map(grid_row)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(feature = "fancy")]
fn cell(c: char, grade: Option<Grade>) -> String {
    let text = format!(" {} ", c);
    let color = match grade {
        Some(Grade::Correct) => AnsiColors::Green,
        Some(Grade::Almost) => AnsiColors::Yellow,
        Some(Grade::Incorrect) => AnsiColors::BrightBlack,
        None => return text,
    };
    text.if_supports_color(Stream::Stdout, |text| text.on_color(color))
        .to_string()
}

#[cfg(not(feature = "fancy"))]
fn cell(c: char, grade: Option<Grade>) -> String {
    format!("[{}{}]", c, grade.map_or('?', Grade::symbol))
}

#[cfg(feature = "fancy")]
impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Possible words (top {} of {}):",
            self.top().len(),
            self.remaining()
        )?;

        let mut table = Table::new();
        if table.is_tty() {
            table.load_preset(UTF8_FULL);
        }
        table.set_header(vec!["#", "word", "score"]);
        for (i, suggestion) in self.top().iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(suggestion.word.to_uppercase()),
                Cell::new(suggestion.score).set_alignment(CellAlignment::Right),
            ]);
        }
        write!(f, "{}", table)
    }
}

#[cfg(not(feature = "fancy"))]
impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Possible words (top {} of {}):",
            self.top().len(),
            self.remaining()
        )?;
        for suggestion in self.top() {
            writeln!(f, "{}", suggestion.word.to_uppercase())?;
        }
        Ok(())
    }
}
