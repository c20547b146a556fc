//! Schedule-generation core library (spec §1-§4): everything needed to turn
//! a course/section catalog into ranked, conflict-free weekly schedules.
//! `cli`/`config`/`logging` are the ambient harness around it for the binary
//! entry point in `main.rs`; the HTTP surface, persistence, and presentation
//! layers this would sit behind in production are explicitly out of scope
//! (spec §1) and are not modeled here.

pub mod cli;
pub mod config;
pub mod logging;
pub mod scheduling;
