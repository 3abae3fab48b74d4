//! Structural dump of non-text message parts.
//!
//! Output follows the familiar inspector layout: `{ a: 1, b: 'x', c: [ 1, 2 ] }`.
//! Everything stays on one line and nesting has no depth limit.

use super::node::Node;

/// Renders anything convertible to a [`Node`], e.g. a `&serde_json::Value`.
#[must_use]
pub fn inspect(value: impl Into<Node>) -> String {
    value.into().to_string()
}

/// Appends the dump of `node` to `out`.
pub fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Int(i) => out.push_str(&i.to_string()),
        Node::UInt(u) => out.push_str(&u.to_string()),
        Node::Float(f) => write_float(out, *f),
        Node::Str(s) => write_quoted(out, s),
        Node::Seq(items) => write_seq(out, items),
        Node::Map(entries) => write_map(out, entries),
    }
}

fn write_float(out: &mut String, f: f64) {
    if f.is_nan() {
        out.push_str("NaN");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        // f64's Display drops a zero fraction (`1.0` -> `1`)
        out.push_str(&f.to_string());
    }
}

fn write_seq(out: &mut String, items: &[Node]) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[ ");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_node(out, item);
    }
    out.push_str(" ]");
}

fn write_map(out: &mut String, entries: &[(String, Node)]) {
    if entries.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{ ");
    for (i, (key, item)) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if is_identifier(key) {
            out.push_str(key);
        } else {
            write_quoted(out, key);
        }
        out.push_str(": ");
        write_node(out, item);
    }
    out.push_str(" }");
}

/// Keys that read as bare identifiers are printed unquoted.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single quotes unless the text contains one; then the first of `"` or `` ` ``
/// the text does not contain. Only when all three occur is `'` escaped.
fn pick_quote(s: &str) -> char {
    if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') {
        '`'
    } else {
        '\''
    }
}

fn write_quoted(out: &mut String, s: &str) {
    let quote = pick_quote(s);
    out.push(quote);
    for c in s.chars() {
        match c {
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(quote);
}
