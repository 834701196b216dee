use std::path::MAIN_SEPARATOR;

/// True iff `name` is a filesystem path reference rather than a bare
/// package name: it begins with the path separator (absolute), `./`, or
/// `../`. This is the same classification Node's require uses.
pub fn is_path_like(name: &str) -> bool {
    ["", ".", ".."]
        .iter()
        .any(|prefix| name.starts_with(&format!("{}{}", prefix, MAIN_SEPARATOR)))
}
