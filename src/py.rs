//! Python literal encoding.
//!
//! Every value the compiler emits goes through [`PyValue`]; rendering is total
//! and never fails, so bad input has to be rejected before a value is built.

use std::fmt::{self, Write as _};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PyValue {
    None,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
    List(Vec<PyValue>),
    Tuple(Vec<PyValue>),
    Call(PyCall),
}

/// `ident(k1=v1, k2=v2)`, keywords kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyCall {
    pub ident: String,
    pub kwargs: IndexMap<String, PyValue>,
}

impl PyCall {
    pub fn new(ident: impl Into<String>) -> Self {
        Self { ident: ident.into(), kwargs: IndexMap::new() }
    }

    /// Builder-style keyword argument. A repeated key keeps its first position.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<PyValue>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    pub fn extend(mut self, kwargs: IndexMap<String, PyValue>) -> Self {
        self.kwargs.extend(kwargs);
        self
    }
}

impl PyValue {
    pub fn str(s: impl Into<String>) -> Self {
        PyValue::Str(s.into())
    }

    pub fn float(x: f64) -> Self {
        PyValue::Float(OrderedFloat(x))
    }

    pub fn pair(a: PyValue, b: PyValue) -> Self {
        PyValue::Tuple(vec![a, b])
    }

    pub fn str_list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        PyValue::List(items.into_iter().map(|s| PyValue::str(s.as_ref())).collect())
    }

    pub fn opt_str(s: Option<&str>) -> Self {
        s.map(PyValue::str).unwrap_or(PyValue::None)
    }

    pub fn opt_int(x: Option<i64>) -> Self {
        x.map(PyValue::Int).unwrap_or(PyValue::None)
    }

    pub fn opt_bool(x: Option<bool>) -> Self {
        x.map(PyValue::Bool).unwrap_or(PyValue::None)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    pub fn render_into(&self, out: &mut String) {
        match self {
            PyValue::None => out.push_str("None"),
            PyValue::Bool(true) => out.push_str("True"),
            PyValue::Bool(false) => out.push_str("False"),
            PyValue::Int(i) => {
                let _ = write!(out, "{i}");
            }
            PyValue::Float(x) => render_float(x.0, out),
            PyValue::Str(s) => render_str(s, out),
            PyValue::List(items) => {
                out.push('[');
                render_joined(items, out);
                out.push(']');
            }
            PyValue::Tuple(items) => {
                out.push('(');
                render_joined(items, out);
                if items.len() == 1 {
                    out.push(',');
                }
                out.push(')');
            }
            PyValue::Call(call) => call.render_into(out),
        }
    }
}

impl PyCall {
    pub fn render_into(&self, out: &mut String) {
        out.push_str(&self.ident);
        out.push('(');
        for (i, (key, value)) in self.kwargs.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push('=');
            value.render_into(out);
        }
        out.push_str(")\n");
    }
}

impl fmt::Display for PyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn render_joined(items: &[PyValue], out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.render_into(out);
    }
}

/// Shortest round-trip form; `Debug` always keeps a `.0` or an exponent, so
/// Python reads the token back as a float regardless of locale.
fn render_float(x: f64, out: &mut String) {
    if x.is_nan() {
        out.push_str("float(\"nan\")");
    } else if x.is_infinite() {
        out.push_str(if x > 0.0 { "float(\"inf\")" } else { "-float(\"inf\")" });
    } else {
        let _ = write!(out, "{x:?}");
    }
}

/// Triple-quoted, trimmed. Backslashes and every `"` are escaped, so the
/// payload can never close the literal early.
fn render_str(s: &str, out: &mut String) {
    out.push_str("\"\"\"");
    for c in s.trim().chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' | '\t' => out.push(c),
            '\r' => out.push_str("\\r"),
            c if c.is_control() && (c as u32) < 0x100 => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push_str("\"\"\"");
}

impl From<bool> for PyValue {
    fn from(x: bool) -> Self {
        PyValue::Bool(x)
    }
}

impl From<i64> for PyValue {
    fn from(x: i64) -> Self {
        PyValue::Int(x)
    }
}

impl From<u32> for PyValue {
    fn from(x: u32) -> Self {
        PyValue::Int(i64::from(x))
    }
}

impl From<f64> for PyValue {
    fn from(x: f64) -> Self {
        PyValue::float(x)
    }
}

impl From<&str> for PyValue {
    fn from(x: &str) -> Self {
        PyValue::str(x)
    }
}

impl From<String> for PyValue {
    fn from(x: String) -> Self {
        PyValue::Str(x)
    }
}

impl From<PyCall> for PyValue {
    fn from(x: PyCall) -> Self {
        PyValue::Call(x)
    }
}

impl From<Vec<PyValue>> for PyValue {
    fn from(x: Vec<PyValue>) -> Self {
        PyValue::List(x)
    }
}
