use crate::{AsValue, Value};
use std::fmt::{self, Display};
use thiserror::Error;

/// Positional marker style used by a backend when rewriting `{name}`
/// placeholders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// `$1`, `$2`, ... (Postgres).
    Dollar,
    /// `?` for every parameter, ordering carried by the value tuple (MySQL).
    Question,
}

impl Placeholder {
    pub fn write(&self, out: &mut String, position: usize) {
        match self {
            Placeholder::Dollar => {
                let mut buffer = itoa::Buffer::new();
                out.push('$');
                out.push_str(buffer.format(position));
            }
            Placeholder::Question => out.push('?'),
        }
    }
}

/// Failures local to the translation step, surfaced before any driver call.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("the query template references `{{{name}}}` but no parameter with that name was supplied")]
    MissingParameter { name: String },
    #[error("query template error: {reason}")]
    Template { reason: String },
    #[error("batch row {row} has the keys [{found}], the first row has [{expected}]")]
    HeterogeneousBatch {
        row: usize,
        expected: String,
        found: String,
    },
    #[error("cannot assign parameter positions for a batch with no rows")]
    EmptyBatch,
}

/// Insertion-ordered mapping from parameter name to [`Value`].
///
/// Each name is assigned exactly one positional index, 1-based and in first
/// occurrence order. Setting an existing name again replaces its value but
/// keeps its original position, so index assignment is a pure function of
/// the key order and rendering the same map twice yields identical markers.
///
/// ```rust
/// use sluice_core::{params, Placeholder};
///
/// let params = params! { "foo" => "hello", "bar" => "world" };
/// let sql = params
///     .render("select * from t where a = {foo} and b = {bar}", Placeholder::Dollar)
///     .unwrap();
/// assert_eq!(sql, "select * from t where a = $1 and b = $2");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedParams {
    entries: Vec<(String, Value)>,
}

impl NamedParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, keeping the position of an already known name.
    pub fn set(&mut self, name: impl Into<String>, value: impl AsValue) -> &mut Self {
        let name = name.into();
        let value = value.as_value();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// 1-based positional index assigned to the name, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == name).map(|i| i + 1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Values ordered to match the positional markers: the value at tuple
    /// index `i - 1` corresponds to the marker with position `i`.
    pub fn as_tuple(&self) -> Vec<Value> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every `{name}` occurrence in the template with the assigned
    /// positional marker.
    ///
    /// A successful render contains no residual brace characters. There is no
    /// escape syntax: a lone `{` or `}` and an empty `{}` are template
    /// errors, a well formed `{name}` whose name was never set is a missing
    /// parameter error.
    pub fn render(&self, template: &str, placeholder: Placeholder) -> Result<String, ParamsError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find(['{', '}']) {
            if rest.as_bytes()[open] == b'}' {
                return Err(ParamsError::Template {
                    reason: "stray `}` without a matching `{`".into(),
                });
            }
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                return Err(ParamsError::Template {
                    reason: "unterminated `{` placeholder".into(),
                });
            };
            let name = &after[..close];
            if name.is_empty() || name.contains('{') {
                return Err(ParamsError::Template {
                    reason: format!("malformed placeholder `{{{}}}`", name),
                });
            }
            let position = self
                .position(name)
                .ok_or_else(|| ParamsError::MissingParameter { name: name.into() })?;
            placeholder.write(&mut out, position);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

impl<K, V> FromIterator<(K, V)> for NamedParams
where
    K: Into<String>,
    V: AsValue,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

impl Display for NamedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        f.write_str("{")?;
        for (name, value) in &self.entries {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}: {:?}", name, value)?;
        }
        f.write_str("}")
    }
}

/// Ordered, non-empty sequence of [`NamedParams`] for multi-row writes.
///
/// Positional indices are derived once from the first row's key order and
/// applied uniformly to every row. Construction validates that all rows
/// share the first row's key set and fails otherwise; rows may still list
/// their keys in a different order, values are looked up by name.
#[derive(Clone, Debug)]
pub struct NamedParamsBatch {
    rows: Vec<NamedParams>,
}

impl NamedParamsBatch {
    pub fn new(rows: impl IntoIterator<Item = NamedParams>) -> Result<Self, ParamsError> {
        let rows: Vec<NamedParams> = rows.into_iter().collect();
        let Some(first) = rows.first() else {
            return Err(ParamsError::EmptyBatch);
        };
        for (i, row) in rows.iter().enumerate().skip(1) {
            let homogeneous =
                row.len() == first.len() && first.names().all(|name| row.get(name).is_some());
            if !homogeneous {
                return Err(ParamsError::HeterogeneousBatch {
                    row: i,
                    expected: sorted_names(first),
                    found: sorted_names(row),
                });
            }
        }
        Ok(Self { rows })
    }

    /// The row whose key order drives the positional assignment.
    pub fn first(&self) -> &NamedParams {
        &self.rows[0]
    }

    pub fn rows(&self) -> &[NamedParams] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Render the template using the first row's positional assignment.
    pub fn render(&self, template: &str, placeholder: Placeholder) -> Result<String, ParamsError> {
        self.first().render(template, placeholder)
    }

    /// One ordered value tuple per row, all following the first row's key
    /// order.
    pub fn value_rows(&self) -> Vec<Vec<Value>> {
        let first = self.first();
        self.rows
            .iter()
            .map(|row| {
                first
                    .names()
                    // Key sets are validated at construction.
                    .map(|name| row.get(name).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<NamedParams>> for NamedParamsBatch {
    type Error = ParamsError;
    fn try_from(rows: Vec<NamedParams>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

fn sorted_names(params: &NamedParams) -> String {
    let mut names: Vec<&str> = params.names().collect();
    names.sort_unstable();
    names.join(", ")
}

/// Build a [`NamedParams`] from literal pairs.
///
/// ```rust
/// use sluice_core::params;
///
/// let params = params! { "id" => 7, "label" => "seven" };
/// assert_eq!(params.position("label"), Some(2));
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::NamedParams::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::NamedParams::new();
        $(params.set($name, $value);)+
        params
    }};
}
