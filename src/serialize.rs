//! Serialization of a resolved package into a bundler-ready JS expression.
//!
//! The wrapping of each string depends on the manifest field it came from:
//! `identifier` becomes a string literal, `headers` and `path` become
//! require() calls, `wppl` becomes a file read. The dispatch table is
//! closed; a string under any other key is a producer/consumer contract
//! violation.

use crate::error::PkgError;

/// The closed set of node shapes the serializer accepts. Built exclusively
/// from package descriptors, so the tree is always finite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Seq(Vec<Value>),
    Map(Vec<(String, Value)>),
    Str(String),
}

/// Renders `value` as a single-line JS expression. `key_context` is the
/// mapping key the value was found under, if any; sequences pass it through
/// unchanged while mappings replace it with each entry's own key.
pub fn stringify(value: &Value, key_context: Option<&str>) -> Result<String, PkgError> {
    match value {
        Value::Seq(items) => {
            let parts = items
                .iter()
                .map(|item| stringify(item, key_context))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(", ")))
        }
        Value::Map(entries) => {
            let parts = entries
                .iter()
                .map(|(key, item)| Ok(format!("{}: {}", key, stringify(item, Some(key))?)))
                .collect::<Result<Vec<_>, PkgError>>()?;
            Ok(format!("{{ {} }}", parts.join(", ")))
        }
        Value::Str(s) => match key_context {
            Some("identifier") => Ok(format!("\"{}\"", s)),
            Some("headers") | Some("path") => Ok(format!("require(\"{}\")", s)),
            Some("wppl") => Ok(format!("fs.readFileSync(\"{}\", \"utf8\")", s)),
            other => Err(PkgError::SerializationContract {
                key: other.map(str::to_string),
            }),
        },
    }
}
