//! Positional arguments of a log call.
//!
//! Text is appended to the message verbatim; everything else is carried as a
//! [`Node`] so it can be dumped structurally without going through any
//! `Display` impl the caller's type may have.

use crate::fmt::{Node, inspect};
use serde::Serialize;
use serde_json::Value;

/// One positional argument of a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Appended verbatim. A leading `Text` equal to a level name selects the level.
    Text(String),
    /// Rendered with [`inspect`].
    Value(Node),
}

impl Part {
    /// Captures any serializable value for a structural dump.
    ///
    /// NaN and infinities are kept. Values that cannot be captured (structured
    /// map keys, failing `Serialize` impls) become a text part describing the
    /// failure instead of aborting the call.
    pub fn value<T: Serialize + ?Sized>(value: &T) -> Self {
        Node::capture(value).map_or_else(
            |e| Self::Text(format!("<unserializable: {e}>")),
            Self::Value,
        )
    }

    /// The text a sniffed level name would be read from.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Value(_) => None,
        }
    }

    /// Appends this part to `message` with its single-space prefix.
    pub fn render_into(&self, message: &mut String) {
        message.push(' ');
        match self {
            Self::Text(s) | Self::Value(Node::Str(s)) => message.push_str(s),
            Self::Value(node) => inspect::write_node(message, node),
        }
    }
}

/// Joins parts into one message, each prefixed with a single space.
#[must_use]
pub fn assemble(parts: &[Part]) -> String {
    let mut message = String::new();
    for part in parts {
        part.render_into(&mut message);
    }
    message
}

impl From<&str> for Part {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Part {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Part {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Value> for Part {
    fn from(v: Value) -> Self {
        Self::Value(Node::from(v))
    }
}

impl From<&Value> for Part {
    fn from(v: &Value) -> Self {
        Self::Value(Node::from(v))
    }
}

impl From<Node> for Part {
    fn from(node: Node) -> Self {
        Self::Value(node)
    }
}

impl From<bool> for Part {
    fn from(v: bool) -> Self {
        Self::Value(Node::Bool(v))
    }
}

impl From<f64> for Part {
    fn from(v: f64) -> Self {
        Self::Value(Node::Float(v))
    }
}

macro_rules! impl_from_int {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Part {
                fn from(v: $ty) -> Self {
                    Self::Value(Node::$variant(v.into()))
                }
            }
        )*
    };
}

impl_from_int!(Int: i32, i64);
impl_from_int!(UInt: u32, u64);

impl From<usize> for Part {
    fn from(v: usize) -> Self {
        Self::value(&v)
    }
}

/// Builds a `Vec<Part>` from heterogeneous arguments.
///
/// ```
/// use sevlog::{Part, parts};
/// use serde_json::json;
///
/// let p = parts!["info", "user", json!({"id": 7})];
/// assert_eq!(p[0], Part::Text("info".into()));
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! parts {
    () => {
        ::std::vec::Vec::<$crate::Part>::new()
    };
    ($($part:expr),+ $(,)?) => {
        ::std::vec![$($crate::Part::from($part)),+]
    };
}
