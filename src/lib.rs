// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper around these modules.
//
// Module responsibilities:
// - `cli`: turns process arguments into a `Command`.
// - `config`: API endpoint and store path, overridable from the environment.
// - `api`: HTTP search against the joke service and the random pick.
// - `store`: the append-only `jokes.txt` file and the leaderboard scan.
// - `console`: the interactive channel (terminal or plain lines).
// - `ui`: the leaderboard screen, the fetch-and-rate loop and dispatch.
pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod store;
pub mod ui;
