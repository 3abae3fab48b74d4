//! The tree that structured message parts are dumped from.
//!
//! `serde_json::Value` cannot hold NaN or infinities, so serializable values are
//! captured into [`Node`] by a serializer of their own instead of going through
//! `serde_json::to_value`.

use serde::Serialize;
use serde::ser::{self, Impossible};
use serde_json::Value;
use std::fmt;

/// A structured value as the inspector sees it. Map entries keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    /// Any `f64`, non-finite values included.
    Float(f64),
    Str(String),
    Seq(Vec<Node>),
    Map(Vec<(String, Node)>),
}

impl Node {
    /// Captures any serializable value.
    ///
    /// # Errors
    /// Map keys that are not strings, numbers or booleans, 128-bit integers, and
    /// errors raised by the value's own `Serialize` impl.
    pub fn capture<T: Serialize + ?Sized>(value: &T) -> Result<Self, CaptureError> {
        value.serialize(NodeSerializer)
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_i64().map_or_else(
                || {
                    n.as_u64()
                        .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::UInt)
                },
                Self::Int,
            ),
            Value::String(s) => Self::Str(s.clone()),
            Value::Array(items) => Self::Seq(items.iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        super::inspect::write_node(&mut out, self);
        f.write_str(&out)
    }
}

/// Why a value could not be captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureError(String);

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for CaptureError {}

impl ser::Error for CaptureError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

struct NodeSerializer;

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = CaptureError;
    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = SeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = MapBuilder;

    fn serialize_bool(self, v: bool) -> Result<Node, CaptureError> {
        Ok(Node::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Node, CaptureError> {
        Ok(Node::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Node, CaptureError> {
        Ok(Node::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Node, CaptureError> {
        Ok(Node::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Node, CaptureError> {
        Ok(Node::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Node, CaptureError> {
        Ok(Node::UInt(u64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Node, CaptureError> {
        Ok(Node::UInt(u64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Node, CaptureError> {
        Ok(Node::UInt(u64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Node, CaptureError> {
        Ok(Node::UInt(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Node, CaptureError> {
        Ok(Node::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Node, CaptureError> {
        Ok(Node::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Node, CaptureError> {
        Ok(Node::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Node, CaptureError> {
        Ok(Node::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Node, CaptureError> {
        Ok(Node::Seq(
            v.iter().map(|b| Node::UInt(u64::from(*b))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Node, CaptureError> {
        Ok(Node::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Node, CaptureError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Node, CaptureError> {
        Ok(Node::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Node, CaptureError> {
        Ok(Node::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Node, CaptureError> {
        Ok(Node::Str(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Node, CaptureError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Node, CaptureError> {
        Ok(Node::Map(vec![(variant.to_string(), Node::capture(value)?)]))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, CaptureError> {
        Ok(SeqBuilder::new(None, len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, CaptureError> {
        Ok(SeqBuilder::new(None, len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, CaptureError> {
        Ok(SeqBuilder::new(None, len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, CaptureError> {
        Ok(SeqBuilder::new(Some(variant), len))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder, CaptureError> {
        Ok(MapBuilder::new(None, len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapBuilder, CaptureError> {
        Ok(MapBuilder::new(None, len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<MapBuilder, CaptureError> {
        Ok(MapBuilder::new(Some(variant), len))
    }
}

/// Wraps `node` as `{ variant: node }` for enum variants carrying data.
fn tag_variant(variant: Option<&'static str>, node: Node) -> Node {
    match variant {
        Some(name) => Node::Map(vec![(name.to_string(), node)]),
        None => node,
    }
}

struct SeqBuilder {
    variant: Option<&'static str>,
    items: Vec<Node>,
}

impl SeqBuilder {
    fn new(variant: Option<&'static str>, len: usize) -> Self {
        Self {
            variant,
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CaptureError> {
        self.items.push(Node::capture(value)?);
        Ok(())
    }

    fn finish(self) -> Node {
        tag_variant(self.variant, Node::Seq(self.items))
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Node;
    type Error = CaptureError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CaptureError> {
        self.push(value)
    }

    fn end(self) -> Result<Node, CaptureError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Node;
    type Error = CaptureError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CaptureError> {
        self.push(value)
    }

    fn end(self) -> Result<Node, CaptureError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Node;
    type Error = CaptureError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CaptureError> {
        self.push(value)
    }

    fn end(self) -> Result<Node, CaptureError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SeqBuilder {
    type Ok = Node;
    type Error = CaptureError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CaptureError> {
        self.push(value)
    }

    fn end(self) -> Result<Node, CaptureError> {
        Ok(self.finish())
    }
}

struct MapBuilder {
    variant: Option<&'static str>,
    entries: Vec<(String, Node)>,
    pending_key: Option<String>,
}

impl MapBuilder {
    fn new(variant: Option<&'static str>, len: usize) -> Self {
        Self {
            variant,
            entries: Vec::with_capacity(len),
            pending_key: None,
        }
    }

    fn insert<T: ?Sized + Serialize>(&mut self, key: String, value: &T) -> Result<(), CaptureError> {
        self.entries.push((key, Node::capture(value)?));
        Ok(())
    }

    fn finish(self) -> Node {
        tag_variant(self.variant, Node::Map(self.entries))
    }
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Node;
    type Error = CaptureError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), CaptureError> {
        self.pending_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CaptureError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| CaptureError("map value without a key".to_string()))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Node, CaptureError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = Node;
    type Error = CaptureError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CaptureError> {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Node, CaptureError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for MapBuilder {
    type Ok = Node;
    type Error = CaptureError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CaptureError> {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Node, CaptureError> {
        Ok(self.finish())
    }
}

/// Map keys become strings; scalars are rendered, anything structured is refused.
struct KeySerializer;

fn key_must_be_scalar() -> CaptureError {
    CaptureError("map key must be a string, number or boolean".to_string())
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = CaptureError;
    type SerializeSeq = Impossible<String, CaptureError>;
    type SerializeTuple = Impossible<String, CaptureError>;
    type SerializeTupleStruct = Impossible<String, CaptureError>;
    type SerializeTupleVariant = Impossible<String, CaptureError>;
    type SerializeMap = Impossible<String, CaptureError>;
    type SerializeStruct = Impossible<String, CaptureError>;
    type SerializeStructVariant = Impossible<String, CaptureError>;

    fn serialize_bool(self, v: bool) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<String, CaptureError> {
        Ok(Node::Float(f64::from(v)).to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<String, CaptureError> {
        Ok(Node::Float(v).to_string())
    }

    fn serialize_char(self, v: char) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, CaptureError> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_none(self) -> Result<String, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<String, CaptureError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<String, CaptureError> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, CaptureError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, CaptureError> {
        Err(key_must_be_scalar())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, CaptureError> {
        Err(key_must_be_scalar())
    }
}
