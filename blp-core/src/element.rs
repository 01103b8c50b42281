use core::fmt::Write as _;

use chrono::NaiveDate;

use crate::Value;

/// Read-only view over one node of a vendor message tree.
///
/// A node is one of three shapes:
/// - complex: named children reachable through [`field`](Element::field) and
///   [`field_at`](Element::field_at);
/// - sequence: positional values reachable through [`value_at`](Element::value_at);
/// - scalar: a leaf whose payload is returned by [`scalar`](Element::scalar).
///
/// Implementations are expected to be cheap handles (`Clone`), so navigation
/// returns owned nodes rather than references.
pub trait Element: Clone + Sized {
    /// Name of this node within its parent.
    fn name(&self) -> &str;

    /// Named child lookup.
    fn field(&self, name: &str) -> Option<Self>;

    /// Number of named children.
    fn field_count(&self) -> usize;

    /// Named child by position.
    fn field_at(&self, index: usize) -> Option<Self>;

    /// Number of positional values.
    ///
    /// Sequences report their length, absent/null nodes report zero and any
    /// other node reports one (itself).
    fn value_count(&self) -> usize;

    /// Positional value, as an element.
    fn value_at(&self, index: usize) -> Option<Self>;

    /// Whether this node is a sequence.
    fn is_array(&self) -> bool;

    /// Scalar payload of a leaf. Non-leaf nodes yield [`Value::Missing`].
    fn scalar(&self) -> Value;

    /// Whether a named child exists.
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterate named children in delivery order.
    fn fields(&self) -> impl Iterator<Item = Self> + '_ {
        (0..self.field_count()).filter_map(move |i| self.field_at(i))
    }

    /// Iterate positional values in delivery order.
    fn values(&self) -> impl Iterator<Item = Self> + '_ {
        (0..self.value_count()).filter_map(move |i| self.value_at(i))
    }

    /// Named child rendered as text.
    fn field_as_string(&self, name: &str) -> Option<String> {
        match self.field(name)?.scalar() {
            Value::Missing => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }

    /// Named child as a calendar date.
    fn field_as_date(&self, name: &str) -> Option<NaiveDate> {
        let v = self.field(name)?.scalar();
        v.as_date().or_else(|| {
            v.as_str().and_then(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .or_else(|_| NaiveDate::parse_from_str(s, "%Y%m%d"))
                    .ok()
            })
        })
    }

    /// Render the subtree in the vendor's `name = { ... }` print layout.
    fn render(&self) -> String {
        let mut out = String::new();
        render_into(self, 0, &mut out);
        out
    }
}

fn render_into<E: Element>(e: &E, depth: usize, out: &mut String) {
    let pad = "    ".repeat(depth);
    if e.field_count() > 0 {
        let _ = writeln!(out, "{pad}{} = {{", e.name());
        for child in e.fields() {
            render_into(&child, depth + 1, out);
        }
        let _ = writeln!(out, "{pad}}}");
        return;
    }
    if e.is_array() {
        let _ = writeln!(out, "{pad}{}[] = {{", e.name());
        for v in e.values() {
            if v.field_count() > 0 {
                let _ = writeln!(out, "{pad}    {{");
                for child in v.fields() {
                    render_into(&child, depth + 2, out);
                }
                let _ = writeln!(out, "{pad}    }}");
            } else {
                let _ = writeln!(out, "{pad}    {}", quoted(&v.scalar()));
            }
        }
        let _ = writeln!(out, "{pad}}}");
        return;
    }
    let _ = writeln!(out, "{pad}{} = {}", e.name(), quoted(&e.scalar()));
}

fn quoted(v: &Value) -> String {
    match v {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}
