//! Strip markdown fencing that models wrap around JSON

/// Clean model output before JSON parsing
///
/// Steps run in a fixed order: the `json` fence tag is removed while its
/// trailing newline is still there to anchor it, then every newline, then
/// every backtick, then surrounding whitespace.
pub fn clean(text: &str) -> String {
    text.replace("json\n", "")
        .replace('\n', "")
        .replace('`', "")
        .trim()
        .to_string()
}
