//! The `quote` command.

use esh_parse::quote;

/// Quote each argument and join the results with spaces, producing a line
/// that parses back into the same words.
pub fn quote_args(args: &[String]) -> String {
    args.iter().map(quote).collect::<Vec<_>>().join(" ")
}
