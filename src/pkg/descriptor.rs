use crate::serialize::Value;
use std::path::PathBuf;

/// A loadable native JS module shipped by a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsModule {
    pub identifier: String,
    pub path: PathBuf,
}

/// The resolved result of one package lookup. The `headers` and `wppl`
/// lists always hold absolute paths, never manifest-relative names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub js: Option<JsModule>,
    pub headers: Vec<PathBuf>,
    pub wppl: Vec<PathBuf>,
}

impl PackageDescriptor {
    /// Bridges the descriptor into the serializer's value tree. The `js`
    /// key is omitted entirely when the package has no native module.
    pub fn to_value(&self) -> Value {
        let mut entries = Vec::new();

        if let Some(js) = &self.js {
            entries.push((
                "js".to_string(),
                Value::Map(vec![
                    (
                        "identifier".to_string(),
                        Value::Str(js.identifier.clone()),
                    ),
                    (
                        "path".to_string(),
                        Value::Str(js.path.to_string_lossy().into_owned()),
                    ),
                ]),
            ));
        }

        entries.push(("headers".to_string(), Value::Seq(paths_to_values(&self.headers))));
        entries.push(("wppl".to_string(), Value::Seq(paths_to_values(&self.wppl))));

        Value::Map(entries)
    }
}

fn paths_to_values(paths: &[PathBuf]) -> Vec<Value> {
    paths
        .iter()
        .map(|p| Value::Str(p.to_string_lossy().into_owned()))
        .collect()
}

/// Mangles a package name into a JS identifier by replacing the first
/// hyphen with an underscore. Only the first occurrence is substituted;
/// downstream consumers depend on this exact mangling.
pub fn sanitize_identifier(name: &str) -> String {
    name.replacen('-', "_", 1)
}
