//! Dynamic field values and the record abstraction the table operates on.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

/// A reference to a related entity, already resolved to a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRef {
    pub id: Uuid,
    pub name: String,
}

impl LookupRef {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A dynamically typed cell value.
///
/// Records expose their fields through this type so the table never needs
/// to know the concrete row struct. Comparison and display rules live here
/// so sorting and rendering behave the same for every record type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Lookup(LookupRef),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Compare two non-null values of the same logical kind.
    ///
    /// Text and lookup names compare case-insensitively, with the raw
    /// string as a tiebreaker so the order stays total. Mismatched kinds
    /// fall back to comparing display strings.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => cmp_ci(a, b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Int(a), FieldValue::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Float(a), FieldValue::Int(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Lookup(a), FieldValue::Lookup(b)) => cmp_ci(&a.name, &b.name),
            (a, b) => cmp_ci(&a.to_string(), &b.to_string()),
        }
    }
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Float(n) => write!(f, "{n}"),
            FieldValue::Bool(b) => f.write_str(if *b { "yes" } else { "no" }),
            FieldValue::Date(d) => write!(f, "{}", d.format("%d-%m-%Y")),
            FieldValue::Lookup(l) => f.write_str(&l.name),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Float(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl From<LookupRef> for FieldValue {
    fn from(l: LookupRef) -> Self {
        FieldValue::Lookup(l)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}

/// A row the table can display.
///
/// Implementations map column keys to [`FieldValue`]s and declare which
/// strings participate in text search.
pub trait TableRecord: Clone + Send + Sync + 'static {
    /// Stable identity, used for element ids and the editing lock.
    fn id(&self) -> Uuid;

    /// The value behind a column key. Unknown keys return
    /// [`FieldValue::Null`].
    fn field(&self, key: &str) -> FieldValue;

    /// The strings a search term is matched against.
    fn search_text(&self) -> Vec<String>;
}
