use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::foundation::error::{MixelError, MixelResult};
use crate::script::array::ObjectArray;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Discriminant names for [`Value`] variants.
pub enum ValueKind {
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Immutable shared string.
    Str,
    /// Shared array handle.
    Array,
}

#[derive(Clone)]
/// Shared, mutable handle to an [`ObjectArray`].
///
/// Cloning shares the payload; two handles are equal when they point at the
/// same array object, never by contents. Single-threaded by construction
/// (`Rc<RefCell<..>>`), matching the host scripting engine's model.
pub struct ArrayRef(Rc<RefCell<ObjectArray>>);

impl ArrayRef {
    /// Wrap an array into a fresh shared handle.
    pub fn new(array: ObjectArray) -> Self {
        Self(Rc::new(RefCell::new(array)))
    }

    /// Immutably borrow the underlying array.
    ///
    /// # Panics
    /// Panics if the array is mutably borrowed, like [`RefCell::borrow`].
    pub fn borrow(&self) -> Ref<'_, ObjectArray> {
        self.0.borrow()
    }

    /// Mutably borrow the underlying array.
    ///
    /// # Panics
    /// Panics if the array is already borrowed, like [`RefCell::borrow_mut`].
    pub fn borrow_mut(&self) -> RefMut<'_, ObjectArray> {
        self.0.borrow_mut()
    }

    /// Handle identity: do both refs point at the same array object?
    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ArrayRef {
    // Identity only; arrays may contain themselves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayRef({:p})", Rc::as_ptr(&self.0))
    }
}

impl From<ObjectArray> for ArrayRef {
    fn from(array: ObjectArray) -> Self {
        Self::new(array)
    }
}

#[derive(Clone, Debug)]
/// Tagged script value.
///
/// Equality is the scripting engine's looseness: `Int` and `Float` compare
/// numerically across the two variants, strings compare by content, arrays by
/// handle identity. `Bool` only equals `Bool`.
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Immutable shared string.
    Str(Rc<str>),
    /// Shared array handle.
    Array(ArrayRef),
}

impl Value {
    /// The variant's kind tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Coerce to a boolean: numbers are `!= 0`, strings are `"true"` under
    /// ASCII case folding, array handles are always `true`.
    pub fn coerce_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => s.eq_ignore_ascii_case("true"),
            Value::Array(_) => true,
        }
    }

    /// Coerce to an integer: floats truncate, strings parse as an integer or
    /// (failing that) as a float to truncate, anything unparseable is 0.
    pub fn coerce_int(&self) -> i64 {
        match self {
            Value::Bool(b) => i64::from(*b),
            Value::Int(i) => *i,
            Value::Float(f) => *f as i64,
            Value::Str(s) => {
                let t = s.trim();
                t.parse::<i64>()
                    .unwrap_or_else(|_| t.parse::<f64>().unwrap_or(0.0) as i64)
            }
            Value::Array(_) => 0,
        }
    }

    /// Coerce to a float; unparseable strings are 0.0.
    pub fn coerce_f64(&self) -> f64 {
        match self {
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Str(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Value::Array(_) => 0.0,
        }
    }

    /// Strict string access; anything but `Str` is an error.
    pub fn as_str(&self) -> MixelResult<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(MixelError::bad_params(format!(
                "expected a string value, got {:?}",
                other.kind()
            ))),
        }
    }

    /// Strict array access; anything but `Array` is an error.
    pub fn as_array(&self) -> MixelResult<&ArrayRef> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(MixelError::bad_params(format!(
                "expected an array value, got {:?}",
                other.kind()
            ))),
        }
    }

    /// Convert a JSON value.
    ///
    /// Numbers become `Int` when representable as `i64`, otherwise `Float`;
    /// JSON arrays become fresh [`ObjectArray`] handles. JSON `null` and
    /// objects have no script representation and are an error.
    pub fn from_json(json: &serde_json::Value) -> MixelResult<Value> {
        match json {
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Int(i)),
                None => Ok(Value::Float(n.as_f64().unwrap_or(0.0))),
            },
            serde_json::Value::String(s) => Ok(Value::Str(Rc::from(s.as_str()))),
            serde_json::Value::Array(items) => {
                let values = items
                    .iter()
                    .map(Value::from_json)
                    .collect::<MixelResult<Vec<_>>>()?;
                Ok(Value::Array(ArrayRef::new(ObjectArray::from_values(values))))
            }
            serde_json::Value::Null => {
                Err(MixelError::bad_params("json null has no script value"))
            }
            serde_json::Value::Object(_) => {
                Err(MixelError::bad_params("json objects have no script value"))
            }
        }
    }

    /// Convert to JSON; arrays recurse and must be acyclic. Non-finite floats
    /// map to JSON `null`, which `serde_json` cannot represent as a number.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.to_string()),
            Value::Array(a) => a.borrow().to_json(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(Rc::from(v))
    }
}

impl From<ArrayRef> for Value {
    fn from(v: ArrayRef) -> Self {
        Value::Array(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/value.rs"]
mod tests;
