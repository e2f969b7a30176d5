use std::cmp::Reverse;

use crate::foundation::error::{MixelError, MixelResult};
use crate::script::value::{Value, ValueKind};

/// Render a value for joining or string sorting; arrays have no text form.
fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::Bool(b) => Some(b.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Str(s) => Some(s.to_string()),
        Value::Array(_) => None,
    }
}

#[derive(Clone, Debug, Default)]
/// Resizable tagged-value array, the payload behind
/// [`ArrayRef`](crate::script::value::ArrayRef) handles.
///
/// Cloning clones the element vector; string payloads stay shared-immutable
/// and array elements stay shared by handle. Index arguments here are plain
/// `usize` positions: the scripting glue resolves negative indices before
/// calling in.
pub struct ObjectArray {
    values: Vec<Value>,
}

impl ObjectArray {
    /// Empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Array owning the given elements.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Split `text` on `sep` and store every token, parsing per `kind`:
    /// `Int` and `Float` tokens parse leniently (unparseable tokens become
    /// zero), every other kind stores the raw token text.
    pub fn from_delimited(text: &str, sep: &str, kind: ValueKind) -> MixelResult<Self> {
        if sep.is_empty() {
            return Err(MixelError::bad_params("delimiter must be non-empty"));
        }
        let values = text
            .split(sep)
            .map(|token| match kind {
                ValueKind::Int => Value::Int(Value::from(token).coerce_int()),
                ValueKind::Float => Value::Float(Value::from(token).coerce_f64()),
                _ => Value::from(token),
            })
            .collect();
        Ok(Self { values })
    }

    /// Duplicate the elements in `start..end`; requires `start <= end <= len`.
    pub fn dup(&self, start: usize, end: usize) -> MixelResult<Self> {
        if start > end || end > self.values.len() {
            return Err(MixelError::bad_params(format!(
                "invalid dup range {start}..{end} for length {}",
                self.values.len()
            )));
        }
        Ok(Self {
            values: self.values[start..end].to_vec(),
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The elements, in order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Append one element.
    pub fn push(&mut self, v: Value) {
        self.values.push(v);
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    /// Remove and return the first element.
    pub fn shift(&mut self) -> Option<Value> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.remove(0))
    }

    /// The element at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    /// Replace the element at `idx`; out of range is an error.
    pub fn set(&mut self, idx: usize, v: Value) -> MixelResult<()> {
        let len = self.values.len();
        let slot = self.values.get_mut(idx).ok_or_else(|| {
            MixelError::bad_params(format!("index {idx} out of range for length {len}"))
        })?;
        *slot = v;
        Ok(())
    }

    /// Insert before `idx`; an index past the end appends.
    pub fn insert(&mut self, idx: usize, v: Value) {
        let idx = idx.min(self.values.len());
        self.values.insert(idx, v);
    }

    /// Remove and return the element at `idx`; out of range is an error.
    pub fn remove(&mut self, idx: usize) -> MixelResult<Value> {
        if idx >= self.values.len() {
            return Err(MixelError::bad_params(format!(
                "index {idx} out of range for length {}",
                self.values.len()
            )));
        }
        Ok(self.values.remove(idx))
    }

    /// Position of the first element equal to `v` (script value equality).
    pub fn index_of(&self, v: &Value) -> Option<usize> {
        self.values.iter().position(|e| e == v)
    }

    /// Position of the last element equal to `v` (script value equality).
    pub fn last_index_of(&self, v: &Value) -> Option<usize> {
        self.values.iter().rposition(|e| e == v)
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Concatenate the elements' text forms with `sep` between them.
    ///
    /// Array elements have no text form and are an error.
    pub fn join(&self, sep: &str) -> MixelResult<String> {
        let mut out = String::new();
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            let text = scalar_text(v).ok_or_else(|| {
                MixelError::bad_params("array elements cannot be joined into a string")
            })?;
            out.push_str(&text);
        }
        Ok(out)
    }

    /// Stable sort by each element's text form, optionally folding ASCII case.
    pub fn sort_as_str(&mut self, ascending: bool, ignore_case: bool) {
        let key = move |v: &Value| {
            let mut s = scalar_text(v).unwrap_or_default();
            if ignore_case {
                s.make_ascii_lowercase();
            }
            s
        };
        if ascending {
            self.values.sort_by_cached_key(key);
        } else {
            self.values.sort_by_cached_key(|v| Reverse(key(v)));
        }
    }

    /// Stable sort by each element coerced to an integer.
    pub fn sort_as_int(&mut self, ascending: bool) {
        if ascending {
            self.values.sort_by_key(Value::coerce_int);
        } else {
            self.values.sort_by_key(|v| Reverse(v.coerce_int()));
        }
    }

    /// Stable sort by each element coerced to a float, NaN ordered via
    /// [`f64::total_cmp`].
    pub fn sort_as_f64(&mut self, ascending: bool) {
        if ascending {
            self.values
                .sort_by(|a, b| a.coerce_f64().total_cmp(&b.coerce_f64()));
        } else {
            self.values
                .sort_by(|a, b| b.coerce_f64().total_cmp(&a.coerce_f64()));
        }
    }

    /// The numerically smallest element; ties keep the first occurrence.
    pub fn min(&self) -> Option<Value> {
        self.best_by(|candidate, best| candidate < best)
    }

    /// The numerically largest element; ties keep the first occurrence.
    pub fn max(&self) -> Option<Value> {
        self.best_by(|candidate, best| candidate > best)
    }

    fn best_by(&self, beats: impl Fn(f64, f64) -> bool) -> Option<Value> {
        let mut best: Option<(&Value, f64)> = None;
        for v in &self.values {
            let k = v.coerce_f64();
            match best {
                Some((_, bk)) if !beats(k, bk) => {}
                _ => best = Some((v, k)),
            }
        }
        best.map(|(v, _)| v.clone())
    }

    /// Sum of all elements: `Int` unless some element is a `Float`, then
    /// `Float`. Empty sums to `Int(0)`.
    pub fn sum(&self) -> Value {
        let mut int_sum: i64 = 0;
        let mut float_sum = 0.0;
        let mut saw_float = false;
        for v in &self.values {
            int_sum = int_sum.saturating_add(v.coerce_int());
            float_sum += v.coerce_f64();
            saw_float |= matches!(v, Value::Float(_));
        }
        if saw_float {
            Value::Float(float_sum)
        } else {
            Value::Int(int_sum)
        }
    }

    /// Arithmetic mean as a `Float`; empty averages to 0.
    pub fn avg(&self) -> Value {
        if self.values.is_empty() {
            return Value::Float(0.0);
        }
        let total: f64 = self.values.iter().map(Value::coerce_f64).sum();
        Value::Float(total / self.values.len() as f64)
    }

    /// Build from a JSON array; any other JSON shape is an error.
    pub fn from_json(json: &serde_json::Value) -> MixelResult<Self> {
        let serde_json::Value::Array(items) = json else {
            return Err(MixelError::bad_params("expected a json array"));
        };
        let values = items
            .iter()
            .map(Value::from_json)
            .collect::<MixelResult<Vec<_>>>()?;
        Ok(Self { values })
    }

    /// Convert to a JSON array; elements recurse and must be acyclic.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.values.iter().map(Value::to_json).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/array.rs"]
mod tests;
