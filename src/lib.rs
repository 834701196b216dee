//! Package resolution and bundler-expression generation for WebPPL
//! extension packages.
//!
//! A lookup turns a package name (or path) plus an ordered search-path list
//! into a [`PackageDescriptor`]: the package's native JS module, header
//! files, and WebPPL source files, all as absolute paths. [`stringify`]
//! then renders that descriptor as a single-line JS expression the
//! browserify-style bundler inlines into its output.
//!
//! All external effects (filesystem, native-module probing, environment
//! variables) sit behind injectable capability traits so lookups can be
//! tested hermetically.

pub mod env;
pub mod error;
pub mod fs;
pub mod module_loader;
pub mod pkg;
pub mod serialize;

pub use env::{global_pkg_dir, Environment, FixedEnvironment, SystemEnvironment};
pub use error::PkgError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use module_loader::{MockModuleLoader, ModuleLoader, RealModuleLoader};
pub use pkg::{is_path_like, read, read_with, JsModule, PackageDescriptor, WebpplManifest};
pub use serialize::{stringify, Value};
