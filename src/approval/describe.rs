//! Human-readable action descriptions
//!
//! Builds the one-line description embedded in approval prompts. Known
//! dangerous tools get a tailored summary of what they are about to do;
//! anything else falls back to the raw tool name. All embedded fragments
//! are sanitized against backtick injection and truncated so a hostile
//! argument cannot flood the chat message.

use serde_json::Value;

/// Ceiling for an embedded shell command
const MAX_COMMAND_LEN: usize = 80;

/// Ceiling for secondary fragments such as a remote command
const MAX_DETAIL_LEN: usize = 40;

/// Describe what a tool invocation will do
pub fn describe_action(tool_name: &str, args: &Value) -> String {
    match tool_name {
        "bash" | "exec" => {
            let command = str_arg(args, "command");
            format!("run `{}`", clip(command, MAX_COMMAND_LEN))
        }
        "write_file" => {
            format!("write file {}", clip(str_arg(args, "path"), MAX_COMMAND_LEN))
        }
        "edit_file" => {
            format!("edit file {}", clip(str_arg(args, "path"), MAX_COMMAND_LEN))
        }
        "ssh" => {
            let host = clip(str_arg(args, "host"), MAX_DETAIL_LEN);
            let command = clip(str_arg(args, "command"), MAX_DETAIL_LEN);
            format!("run `{}` on {}", command, host)
        }
        "scp" => {
            let source = clip(str_arg(args, "source"), MAX_DETAIL_LEN);
            let dest = clip(str_arg(args, "destination"), MAX_DETAIL_LEN);
            format!("copy {} to {}", source, dest)
        }
        other => sanitize(other),
    }
}

fn str_arg<'a>(args: &'a Value, key: &str) -> &'a str {
    args.get(key).and_then(|v| v.as_str()).unwrap_or("?")
}

fn clip(fragment: &str, max_chars: usize) -> String {
    truncate_chars(&sanitize(fragment), max_chars)
}

/// Neutralize backticks so a crafted argument cannot break out of the
/// code span in the rendered chat message. A zero-width space after each
/// backtick keeps the text readable while defeating the markup.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        out.push(ch);
        if ch == '`' {
            out.push('\u{200B}');
        }
    }
    out
}

/// Truncate to a character count, appending an ellipsis when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}
