//! Python literal formatting (`repr` conventions) for generated code.

use std::fmt::Write;

use crate::model::{BodyData, FieldMap, FieldValue, UploadedFile};

/// Values that can be written as a Python expression.
pub trait PyLiteral {
    fn write_py(&self, out: &mut String);

    fn to_py(&self) -> String {
        let mut out = String::new();
        self.write_py(&mut out);
        out
    }
}

impl PyLiteral for str {
    fn write_py(&self, out: &mut String) {
        // repr() prefers single quotes unless that forces escaping.
        let quote = if self.contains('\'') && !self.contains('"') {
            '"'
        } else {
            '\''
        };
        out.push(quote);
        for c in self.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c if (c as u32) < 0x100 && c.is_control() => {
                    let _ = write!(out, "\\x{:02x}", c as u32);
                }
                c if c.is_control() => {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                }
                c => out.push(c),
            }
        }
        out.push(quote);
    }
}

impl PyLiteral for String {
    fn write_py(&self, out: &mut String) {
        self.as_str().write_py(out);
    }
}

impl PyLiteral for bool {
    fn write_py(&self, out: &mut String) {
        out.push_str(if *self { "True" } else { "False" });
    }
}

impl<T: PyLiteral> PyLiteral for [T] {
    fn write_py(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.write_py(out);
        }
        out.push(']');
    }
}

impl<T: PyLiteral> PyLiteral for Vec<T> {
    fn write_py(&self, out: &mut String) {
        self.as_slice().write_py(out);
    }
}

impl<V: PyLiteral> PyLiteral for FieldMap<V> {
    fn write_py(&self, out: &mut String) {
        write_dict(out, self.iter().map(|(k, v)| (k, v)));
    }
}

impl PyLiteral for FieldValue {
    fn write_py(&self, out: &mut String) {
        match self {
            FieldValue::Single(s) => s.write_py(out),
            FieldValue::Multiple(values) => values.write_py(out),
        }
    }
}

impl PyLiteral for BodyData {
    fn write_py(&self, out: &mut String) {
        match self {
            BodyData::Text(s) => s.write_py(out),
            BodyData::Fields(fields) => fields.write_py(out),
        }
    }
}

/// A `requests`/`httpx` file tuple: `('name', open('path', 'rb'))`.
impl PyLiteral for UploadedFile {
    fn write_py(&self, out: &mut String) {
        out.push('(');
        self.file_name.write_py(out);
        out.push_str(", open(");
        let path = self.path.to_string_lossy();
        str::write_py(&path, out);
        out.push_str(", 'rb'))");
    }
}

impl PyLiteral for serde_json::Value {
    fn write_py(&self, out: &mut String) {
        use serde_json::Value;
        match self {
            Value::Null => out.push_str("None"),
            Value::Bool(b) => b.write_py(out),
            Value::Number(n) => {
                let _ = write!(out, "{n}");
            }
            Value::String(s) => s.write_py(out),
            Value::Array(items) => items.write_py(out),
            Value::Object(map) => write_dict(out, map.iter().map(|(k, v)| (k.as_str(), v))),
        }
    }
}

fn write_dict<'a, V: PyLiteral + 'a>(out: &mut String, entries: impl Iterator<Item = (&'a str, &'a V)>) {
    out.push('{');
    for (i, (k, v)) in entries.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        k.write_py(out);
        out.push_str(": ");
        v.write_py(out);
    }
    out.push('}');
}
