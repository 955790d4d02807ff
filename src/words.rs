//! Loading the dictionary of candidate words.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::Deref,
    path::Path,
};

use log::debug;

use crate::{Result, Word};

/// An ordered, immutable list of [`Word`]s.
///
/// The order of the source is preserved, and every later candidate list is
/// a subsequence of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WordList {
    inner: Vec<Word>,
}

impl WordList {
    /// Reads one word per line from `reader`.
    ///
    /// Each line is trimmed and lowercased. Lines that are not exactly five
    /// ASCII letters are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_sieve::WordList;
    ///
    /// let text = "crane\nSlate\n\nhi\nx-ray\ntrace\n";
    /// let list = WordList::from_reader(text.as_bytes())?;
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list[1], "slate");
    /// #
    /// # Ok::<_, wordle_sieve::SieveError>(())
    /// ```
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut inner = Vec::new();
        let mut skipped = 0_usize;

        for line in reader.lines() {
            match Word::new(line?.trim()) {
                Ok(word) => inner.push(word),
                Err(_) => skipped += 1,
            }
        }

        debug!("loaded {} words, skipped {} lines", inner.len(), skipped);
        Ok(WordList { inner })
    }

    /// Reads a word list from a file (one word per line).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading word list from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        WordList {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Deref for WordList {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        self.inner.as_slice()
    }
}
