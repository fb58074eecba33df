use std::fmt::Write;

use config_tool_interpreter::environment::Environment;
use config_tool_interpreter::value::Value;

/// Renders every binding as a `KEY = value` line, sorted by key.
///
/// The output always ends with a newline, so an empty environment renders as
/// a single `"\n"`.
pub fn to_toml(environment: &Environment) -> String {
    let mut bindings = environment.iter().collect::<Vec<_>>();
    bindings.sort_by(|(left, _), (right, _)| left.cmp(right));

    let lines = bindings
        .into_iter()
        .map(|(key, value)| format!("{} = {}", key, render_value(value)))
        .collect::<Vec<_>>();
    lines.join("\n") + "\n"
}

pub fn render_value(value: &Value) -> String {
    match value {
        Value::Integer(value) => value.to_string(),
        Value::String(value) => quote(value),
        Value::List(values) => format!(
            "[{}]",
            values
                .iter()
                .map(|value| render_value(value))
                .collect::<Vec<String>>()
                .join(", ")
        ),
    }
}

/// Double-quotes `text` with JSON escaping, which is also a valid TOML basic
/// string. Non-ASCII characters are written as-is.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
