// UI layer: the leaderboard screen, the fetch-and-rate loop and the
// dispatcher that picks between them. Everything talks to the user
// through a `Console`, so the same flows run on a terminal or in tests.

use crate::api::{Fetched, JokeClient, JokeSource};
use crate::cli::{Command, USAGE};
use crate::config::Config;
use crate::console::{Console, CONTINUE_QUESTION, RATE_QUESTION};
use crate::store::{JokeStore, Leaderboard, Rating};
use anyhow::{Context, Result};

/// Why the feedback loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The user answered something other than "yes" to continue.
    Declined,
    /// The search matched no jokes.
    NotFound,
    /// The request to the joke service failed.
    FetchFailed,
    /// Input was closed before the user answered.
    InputClosed,
}

/// Summary of one fetch-and-rate session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub rated: usize,
    pub ended: EndReason,
}

enum Step {
    ShowJoke,
    AskRating(String),
    Persist(String, Rating),
    AskContinue,
    Done(EndReason),
}

/// Dispatch a parsed command. Store write failures and HTTP client setup
/// failures are returned; everything else is reported on the console.
pub fn run(command: Command, config: &Config, console: &mut dyn Console) -> Result<()> {
    match command {
        Command::Usage => {
            for line in USAGE {
                console.say(line)?;
            }
        }
        Command::Leaderboard => {
            show_leaderboard(&JokeStore::new(&config.jokes_file), console)?;
        }
        Command::Rate { term } => {
            let client = JokeClient::new(config)?;
            let store = JokeStore::new(&config.jokes_file);
            let session = feedback_loop(&client, &store, &term, console)?;
            log::debug!("session finished: {:?}", session);
        }
    }
    Ok(())
}

/// Print the most liked joke, or a friendly message when there is none.
/// A store that cannot be read is reported and nothing else is shown.
pub fn show_leaderboard(store: &JokeStore, console: &mut dyn Console) -> Result<()> {
    let leaderboard = match store.leaderboard() {
        Ok(leaderboard) => leaderboard,
        Err(e) => {
            console.complain(&e.to_string())?;
            return Ok(());
        }
    };

    match leaderboard {
        Leaderboard::Empty => {
            console.say("No jokes in the leaderboard yet. Be the first one to make us laugh!")?;
        }
        Leaderboard::NoLikes => {
            console.say("Nobody has liked a joke yet. Rate a few and check back!")?;
        }
        Leaderboard::Top { joke, .. } => {
            console.say("The most popular joke in the leaderboard is:")?;
            console.say(&joke)?;
        }
    }
    Ok(())
}

/// Fetch a joke, ask for a rating, store it, and repeat while the user
/// says "yes". Ratings are always persisted before the next fetch.
pub fn feedback_loop(
    source: &dyn JokeSource,
    store: &JokeStore,
    term: &str,
    console: &mut dyn Console,
) -> Result<Session> {
    let mut rated = 0;
    let mut step = Step::ShowJoke;

    loop {
        step = match step {
            Step::ShowJoke => {
                let spinner = console.spinner("Looking for jokes...");
                let fetched = source.fetch(term);
                spinner.finish_and_clear();

                match fetched {
                    Ok(Fetched::Joke(joke)) => {
                        console.say("Here's a joke for you:")?;
                        console.say(&joke)?;
                        Step::AskRating(joke)
                    }
                    Ok(Fetched::NotFound) => {
                        console.say(
                            "Sorry, no jokes found for the given search term. \
                             The joke gods are taking a day off!",
                        )?;
                        Step::Done(EndReason::NotFound)
                    }
                    Err(e) => {
                        log::warn!("fetch for {:?} failed: {:?}", term, e);
                        console.complain(&format!("Failed to fetch jokes from the API: {}", e))?;
                        Step::Done(EndReason::FetchFailed)
                    }
                }
            }
            Step::AskRating(joke) => match console.ask(&RATE_QUESTION)? {
                Some(answer) => Step::Persist(joke, Rating::from_answer(&answer)),
                None => Step::Done(EndReason::InputClosed),
            },
            Step::Persist(joke, rating) => {
                store
                    .append(&joke, rating)
                    .context("Failed to record feedback")?;
                rated += 1;
                console.say("Feedback recorded. Thanks for your response!")?;
                Step::AskContinue
            }
            Step::AskContinue => match console.ask(&CONTINUE_QUESTION)? {
                Some(answer) if answer.trim().to_lowercase() == "yes" => Step::ShowJoke,
                Some(_) => Step::Done(EndReason::Declined),
                None => Step::Done(EndReason::InputClosed),
            },
            Step::Done(ended) => return Ok(Session { rated, ended }),
        };
    }
}
