// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) parses argv and hands the resulting configuration to `ui`.
//
// Module responsibilities:
// - `cli`: Turns command-line tokens into a `Config` or a help request.
// - `api`: Fetches an account's recent posts over HTTP.
// - `buckets`: Counts posts per hour of day or day of week.
// - `chart`: Renders bucket counts as ASCII bars.
// - `error`: Typed errors shared by the stages above.
// - `ui`: Runs one report end to end and prints diagnostics.
//
// `ui` only talks to the network through the `api::PostSource` trait, so
// the whole pipeline can be exercised in tests without a live service.
pub mod api;
pub mod buckets;
pub mod chart;
pub mod cli;
pub mod error;
pub mod ui;
