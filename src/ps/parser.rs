use super::PidPair;

/// Parse captured `ps` stdout into ordered `(ppid, pid)` pairs.
///
/// The first line is the column header and is never treated as data. Data
/// lines must hold exactly two non-negative integers separated by whitespace;
/// anything else (footer noise, truncated lines) is skipped silently.
/// `str::lines` handles both `\n` and `\r\n` terminators, so the platform's
/// line-ending convention needs no special casing here.
pub(crate) fn parse_listing(stdout: &str) -> Vec<PidPair> {
    let mut pairs = Vec::new();

    for line in stdout.lines().skip(1) {
        let mut fields = line.split_whitespace();
        let (Some(ppid), Some(pid)) = (fields.next(), fields.next()) else {
            continue;
        };
        if fields.next().is_some() {
            continue;
        }
        let (Ok(ppid), Ok(pid)) = (ppid.parse::<u32>(), pid.parse::<u32>()) else {
            continue;
        };
        pairs.push(PidPair { ppid, pid });
    }

    pairs
}
