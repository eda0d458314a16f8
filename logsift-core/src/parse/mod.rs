//! Access-log line grammar
//!
//! Exactly one format is understood, the leading fields of the Apache/NCSA
//! common and combined formats:
//!
//! ```text
//! <ip> <ident> <user> [<dd/Mon/yyyy:HH:mm:ss ±HHMM>] "<method> <path> <protocol>" <status> <size|->
//! ```
//!
//! Anything after the size field (referrer, user agent) is ignored.
//!
//! Two failure classes are kept apart:
//! - a line that does not have this shape is *rejected*: [`LineParser::parse`]
//!   returns `Ok(None)` and the caller moves on to the next line;
//! - a line that has this shape but whose bracketed time cannot be read is a
//!   [`ParseError`], which aborts the job the line belongs to.

mod error;
mod grammar;


pub use error::ParseError;
pub use grammar::{LineParser, TIME_FORMAT};
