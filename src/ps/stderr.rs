use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

/// Decide whether captured stderr content fails the listing.
///
/// Under pseudo-terminals with absurd dimensions, `ps` prints a warning of
/// the shape `your 131072x1 screen size is bogus. expect trouble` and still
/// produces a correct listing; that message is ignored. Any other non-blank
/// stderr content is a real failure and carries the text to the caller,
/// whatever the exit status was.
pub(crate) fn ensure_benign(stderr: &str) -> Result<()> {
    lazy_static! {
        static ref BOGUS_SCREEN_SIZE: Regex =
            Regex::new(r"\d+x\d+ screen size is bogus").unwrap();
    }

    let text = stderr.trim();
    if text.is_empty() || BOGUS_SCREEN_SIZE.is_match(text) {
        return Ok(());
    }

    bail!("ps wrote to stderr: {text}")
}
