use crate::core::number::es_string_to_number;
use indexmap::IndexMap;

/// An untyped runtime value as it arrives from a block argument.
///
/// `List` and `Object` are the composite shapes a block can hand over (list
/// contents, hacked or extension-provided records); everything the casting
/// layer does with them goes through their generic string form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(String),
    #[default]
    Undefined,
    Null,
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&value_to_string(self))
    }
}

/// Generic string conversion (`String(value)`).
pub fn value_to_string(val: &Value) -> String {
    match val {
        Value::Number(n) => {
            if n.is_nan() {
                "NaN".to_string()
            } else if n.is_infinite() {
                if n.is_sign_negative() {
                    "-Infinity".to_string()
                } else {
                    "Infinity".to_string()
                }
            } else {
                format_js_number(*n)
            }
        }
        Value::String(s) => s.clone(),
        Value::Boolean(b) => b.to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        // Array join: holes, null and undefined render as empty strings
        Value::List(items) => items
            .iter()
            .map(|item| if item.is_null_or_undefined() { String::new() } else { value_to_string(item) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Format a finite number the way the host runtime prints it: shortest
/// round-trip digits, exponent form outside `[1e-6, 1e21)`.
pub fn format_js_number(n: f64) -> String {
    // ToString(-0) is "0"
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{:e}", n);
        if let Some((mant, exp)) = s.split_once('e')
            && let Ok(exp_int) = exp.parse::<i32>()
        {
            return format!("{}e{:+}", mant, exp_int);
        }
        return s;
    }
    format!("{}", n)
}

/// Generic numeric conversion (`Number(value)`). May return NaN.
pub fn value_to_number(val: &Value) -> f64 {
    match val {
        Value::Number(n) => *n,
        Value::Boolean(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => es_string_to_number(s),
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        // ToPrimitive on a list goes through its joined string form
        Value::List(_) => es_string_to_number(&value_to_string(val)),
        Value::Object(_) => f64::NAN,
    }
}

/// Generic truthiness (`Boolean(value)`).
pub fn is_truthy(val: &Value) -> bool {
    match val {
        Value::Undefined | Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::List(_) | Value::Object(_) => true,
    }
}
