// Command-line parsing. The first argument selects the mode; for any mode
// other than `leaderboard`, the remaining arguments form the search term.

/// Printed when no command is given.
pub const USAGE: [&str; 2] = [
    "Usage: joke-cli <command> [searchTerm]",
    "Available commands: \"leaderboard\"",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Usage,
    Leaderboard,
    /// Fetch and rate jokes matching `term` (may be empty).
    Rate { term: String },
}

impl Command {
    /// Parse process arguments. `args` includes the program name, as
    /// `std::env::args()` yields it.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into).skip(1);
        match args.next() {
            None => Command::Usage,
            Some(mode) if mode.is_empty() => Command::Usage,
            Some(mode) if mode == "leaderboard" => Command::Leaderboard,
            Some(_) => Command::Rate {
                term: args.collect::<Vec<String>>().join(" "),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_prints_usage() {
        assert_eq!(Command::from_args(["joke-cli"]), Command::Usage);
        assert_eq!(Command::from_args(Vec::<String>::new()), Command::Usage);
    }

    #[test]
    fn empty_mode_prints_usage() {
        assert_eq!(Command::from_args(["joke-cli", ""]), Command::Usage);
        assert_eq!(Command::from_args(["joke-cli", "", "cats"]), Command::Usage);
    }

    #[test]
    fn leaderboard_mode() {
        assert_eq!(Command::from_args(["joke-cli", "leaderboard"]), Command::Leaderboard);
    }

    #[test]
    fn mode_is_not_part_of_the_term() {
        assert_eq!(
            Command::from_args(["joke-cli", "dad", "jokes", "please"]),
            Command::Rate {
                term: "jokes please".into()
            }
        );
    }

    #[test]
    fn lone_topic_gives_empty_term() {
        assert_eq!(
            Command::from_args(["joke-cli", "dad"]),
            Command::Rate { term: String::new() }
        );
    }

    #[test]
    fn extra_words_after_leaderboard_are_ignored() {
        assert_eq!(
            Command::from_args(["joke-cli", "leaderboard", "now"]),
            Command::Leaderboard
        );
    }

    #[test]
    fn only_exact_leaderboard_matches() {
        assert_eq!(
            Command::from_args(["joke-cli", "Leaderboard", "cats"]),
            Command::Rate { term: "cats".into() }
        );
    }
}
