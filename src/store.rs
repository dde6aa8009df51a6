// Joke store: an append-only text file with one rated joke per line.
// Each line looks like `<marker> <joke text>`, where the marker is the
// thumbs-up or thumbs-down glyph. The leaderboard is derived by scanning
// every line; nothing else is ever stored.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Glyph stored in front of a liked joke.
pub const LIKED_GLYPH: &str = "👍";
/// Glyph stored in front of a disliked joke.
pub const DISLIKED_GLYPH: &str = "👎";

/// Binary rating collected from the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rating {
    Liked,
    Disliked,
}

impl Rating {
    /// Interpret the answer to the rating prompt: `1` means liked,
    /// everything else (including an empty answer) means disliked.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().to_lowercase() == "1" {
            Rating::Liked
        } else {
            Rating::Disliked
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Rating::Liked => LIKED_GLYPH,
            Rating::Disliked => DISLIKED_GLYPH,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of scanning the store for the most liked line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Leaderboard {
    /// The store holds no lines at all.
    Empty,
    /// There are lines, but none carries the liked glyph.
    NoLikes,
    /// The first line with the highest liked-glyph count.
    Top { joke: String, likes: usize },
}

/// Handle to the store file. Cheap to create; the file is only touched by
/// `read_all` and `append`.
#[derive(Clone, Debug)]
pub struct JokeStore {
    path: PathBuf,
}

impl JokeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JokeStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every non-empty line. A store that was never written to reads
    /// as empty.
    pub fn read_all(&self) -> Result<Vec<String>, StoreError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("{} does not exist yet, treating it as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        Ok(data
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Append one `<marker> <joke>` line, creating the file if needed.
    /// Line breaks inside the joke are flattened so the entry stays on a
    /// single line.
    pub fn append(&self, joke: &str, rating: Rating) -> Result<(), StoreError> {
        let line = format!("{} {}\n", rating.glyph(), single_line(joke));
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        // One write call per entry.
        file.write_all(line.as_bytes()).map_err(write_err)?;

        log::info!("appended {} entry to {}", rating, self.path.display());
        Ok(())
    }

    /// Convenience wrapper: read the store and compute its leaderboard.
    pub fn leaderboard(&self) -> Result<Leaderboard, StoreError> {
        let lines = self.read_all()?;
        Ok(compute_leaderboard(&lines))
    }
}

/// Find the line with the most liked glyphs. Counting is per line and the
/// running best starts at (empty, 0), so a line only wins with a strictly
/// greater count and ties go to the earliest line.
pub fn compute_leaderboard<S: AsRef<str>>(lines: &[S]) -> Leaderboard {
    if lines.is_empty() {
        return Leaderboard::Empty;
    }

    let mut best: (&str, usize) = ("", 0);
    for line in lines {
        let line = line.as_ref();
        let likes = line.matches(LIKED_GLYPH).count();
        if likes > best.1 {
            best = (line, likes);
        }
    }
    log::debug!("scanned {} lines, best count {}", lines.len(), best.1);

    match best {
        (_, 0) => Leaderboard::NoLikes,
        (line, likes) => Leaderboard::Top {
            joke: joke_text(line).to_string(),
            likes,
        },
    }
}

/// Strip the leading `<marker> ` from a stored line. Lines without a known
/// marker are returned unchanged.
pub fn joke_text(line: &str) -> &str {
    [LIKED_GLYPH, DISLIKED_GLYPH]
        .iter()
        .find_map(|glyph| line.strip_prefix(glyph))
        .map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
        .unwrap_or(line)
}

fn single_line(joke: &str) -> String {
    joke.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rating_answers() {
        assert_eq!(Rating::from_answer("1"), Rating::Liked);
        assert_eq!(Rating::from_answer("  1 \n"), Rating::Liked);
        assert_eq!(Rating::from_answer("2"), Rating::Disliked);
        assert_eq!(Rating::from_answer("yes"), Rating::Disliked);
        assert_eq!(Rating::from_answer(""), Rating::Disliked);
    }

    #[test]
    fn highest_per_line_count_wins() {
        let lines = ["👍 A", "👎 B", "👍 👍 C"];
        assert_eq!(
            compute_leaderboard(&lines),
            Leaderboard::Top {
                joke: "👍 C".into(),
                likes: 2
            }
        );
    }

    #[test]
    fn ties_go_to_the_first_line() {
        let lines = ["👎 X", "👍 First", "👍 Second"];
        assert_eq!(
            compute_leaderboard(&lines),
            Leaderboard::Top {
                joke: "First".into(),
                likes: 1
            }
        );
    }

    #[test]
    fn no_liked_markers_is_not_a_winner() {
        // A zero count never beats the zero-initialised accumulator.
        let lines = ["👎 A", "👎 B"];
        assert_eq!(compute_leaderboard(&lines), Leaderboard::NoLikes);
    }

    #[test]
    fn empty_input_is_distinct_from_no_likes() {
        let lines: [&str; 0] = [];
        assert_eq!(compute_leaderboard(&lines), Leaderboard::Empty);
    }

    #[test]
    fn joke_text_strips_only_the_leading_marker() {
        assert_eq!(joke_text("👍 Why did the chicken"), "Why did the chicken");
        assert_eq!(joke_text("👎 Nope"), "Nope");
        assert_eq!(joke_text("👍 👍 Twice"), "👍 Twice");
        assert_eq!(joke_text("no marker"), "no marker");
    }

    #[test]
    fn append_keeps_order_and_creates_file() {
        let dir = tempdir().unwrap();
        let store = JokeStore::new(dir.path().join("jokes.txt"));
        assert!(!store.path().exists());

        store.append("E1", Rating::Liked).unwrap();
        store.append("E2", Rating::Disliked).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "👍 E1\n👎 E2\n");
        assert_eq!(store.read_all().unwrap(), vec!["👍 E1", "👎 E2"]);
    }

    #[test]
    fn append_never_rewrites_existing_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.txt");
        std::fs::write(&path, "👎 old one\n").unwrap();

        let store = JokeStore::new(&path);
        store.append("new one", Rating::Liked).unwrap();

        assert_eq!(store.read_all().unwrap(), vec!["👎 old one", "👍 new one"]);
    }

    #[test]
    fn embedded_newlines_are_flattened() {
        let dir = tempdir().unwrap();
        let store = JokeStore::new(dir.path().join("jokes.txt"));
        store.append("Knock knock.\nWho's there?\r\nLettuce.", Rating::Liked).unwrap();

        let lines = store.read_all().unwrap();
        assert_eq!(lines, vec!["👍 Knock knock. Who's there? Lettuce."]);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JokeStore::new(dir.path().join("absent.txt"));
        assert!(store.read_all().unwrap().is_empty());
        assert_eq!(store.leaderboard().unwrap(), Leaderboard::Empty);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.txt");
        std::fs::write(&path, "\n👍 A\n\n👎 B\n\n").unwrap();
        assert_eq!(JokeStore::new(&path).read_all().unwrap(), vec!["👍 A", "👎 B"]);
    }

    #[test]
    fn unreadable_store_is_a_read_error() {
        // A directory exists but cannot be read as a file.
        let dir = tempdir().unwrap();
        let store = JokeStore::new(dir.path());
        assert!(matches!(store.read_all(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn failed_append_is_a_write_error() {
        let dir = tempdir().unwrap();
        let store = JokeStore::new(dir.path().join("missing-dir").join("jokes.txt"));
        let err = store.append("joke", Rating::Liked).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
