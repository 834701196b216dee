//! Package resolution: name-or-path → located directory → descriptor.

mod descriptor;
mod manifest;
mod path;
mod reader;
mod resolver;

pub use descriptor::{JsModule, PackageDescriptor};
pub use manifest::WebpplManifest;
pub use path::is_path_like;
pub use reader::{read, read_with};
pub use resolver::{pick_first_existing, resolve_candidates};
