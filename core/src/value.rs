//! Value types for YOGA attributes.
//!
//! Values are the atomic data stored in element attributes. They are weakly
//! typed on the way in (whatever the request body decoded to) and checked
//! against the element type's attribute definitions before they are stored.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A value that can be stored in an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// List of values.
    List(Vec<Value>),
    /// Nested structure keyed by string.
    Map(BTreeMap<String, Value>),
}

/// The shape of a value, as declared by an attribute definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    /// Accepts any shape.
    Any,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::List => "List",
            ValueKind::Map => "Map",
            ValueKind::Any => "Any",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as float. Int values are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as map reference if this is a Map value.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Numeric ordering against another value, `None` if either side is
    /// not a number. Int is compared exactly; mixed pairs go through f64.
    pub fn cmp_numeric(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            _ => self.as_float()?.partial_cmp(&other.as_float()?),
        }
    }

    /// Lower bound check. Values that are not comparable pass.
    pub fn gte(&self, bound: &Value) -> bool {
        self.cmp_numeric(bound) != Some(Ordering::Less)
    }

    /// Upper bound check. Values that are not comparable pass.
    pub fn lte(&self, bound: &Value) -> bool {
        self.cmp_numeric(bound) != Some(Ordering::Greater)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// Type alias for attribute storage.
pub type Attributes = HashMap<String, Value>;

/// Helper macro to create attribute maps.
#[macro_export]
macro_rules! attrs {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Int(42).kind(), ValueKind::Int);
        assert_eq!(Value::Float(3.5).kind(), ValueKind::Float);
        assert_eq!(Value::String("hello".into()).kind(), ValueKind::String);
        assert_eq!(Value::List(vec![]).kind(), ValueKind::List);
        assert_eq!(Value::Map(BTreeMap::new()).kind(), ValueKind::Map);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Int(2).as_float(), Some(2.0));
        assert_eq!(Value::String("hello".into()).as_str(), Some("hello"));
        assert_eq!(Value::Int(1).as_str(), None);
    }

    #[test]
    fn test_cmp_numeric() {
        assert_eq!(Value::Int(3).cmp_numeric(&Value::Float(2.5)), Some(Ordering::Greater));
        assert_eq!(
            Value::Int(i64::MAX).cmp_numeric(&Value::Int(i64::MAX - 1)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::Bool(true).cmp_numeric(&Value::Int(1)), None);
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(Value::Int(5).gte(&Value::Int(5)));
        assert!(Value::Float(5.5).lte(&Value::Int(6)));
        assert!(!Value::Int(7).lte(&Value::Float(6.5)));
        // Non-numeric comparisons never fail a bound
        assert!(Value::String("x".into()).gte(&Value::Int(1)));
    }

    #[test]
    fn test_display() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), Value::Int(1));
        let value = Value::List(vec![Value::Null, Value::Map(map)]);

        assert_eq!(value.to_string(), "[null, {\"a\": 1}]");
    }

    #[test]
    fn test_attrs_macro() {
        let empty: Attributes = attrs!();
        assert!(empty.is_empty());

        let attrs = attrs! {
            "color" => "red",
            "maximumOccupancy" => 100i64,
            "painted" => true,
        };
        assert_eq!(attrs.get("color"), Some(&Value::String("red".into())));
        assert_eq!(attrs.get("maximumOccupancy"), Some(&Value::Int(100)));
        assert_eq!(attrs.get("painted"), Some(&Value::Bool(true)));
    }
}
