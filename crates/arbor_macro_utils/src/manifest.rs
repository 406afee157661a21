use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::{Ident, Span};
use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for an `arbor` crate as seen from the
/// caller's Cargo.toml.
///
/// Derive macros emit absolute paths, and those paths must be valid from the
/// crate that invokes the macro.
///
/// # Example
///
/// ```rust
/// # use arbor_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("arbor_serial"));
/// ```
///
/// Reading the manifest is not cheap, callers should resolve a path once per
/// macro invocation and pass it around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `arbor_` and the caller depends on
///    the facade crate `arbor`, return `::arbor::short_name`
///    (e.g. `arbor_serial` -> `::arbor::serial`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// A crate referencing itself resolves to `::crate_name` as well, so the
/// crate root needs `extern crate self as crate_name;`.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Option<Document<Box<str>>>,
    pub modified_time: Option<SystemTime>,
}

const FACADE_NAME: &str = "arbor";
const CRATE_PREFIX: &str = "arbor_";

impl Manifest {
    fn get_manifest_path() -> Option<PathBuf> {
        env::var_os("CARGO_MANIFEST_DIR").map(|path| {
            let mut path = PathBuf::from(path);
            path.push("Cargo.toml");
            path
        })
    }

    fn get_manifest_modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    // An unreadable manifest behaves like one without dependencies.
    fn read_manifest(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?;
        Document::parse(text.into_boxed_str()).ok()
    }

    fn crate_root(name: &str) -> syn::Path {
        let mut path = syn::Path::from(Ident::new(name, Span::call_site()));
        path.leading_colon = Some(Default::default());
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::crate_root(name));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            let mut path = Self::crate_root(FACADE_NAME);
            path.segments.push(Ident::new(module, Span::call_site()).into());
            return Some(path);
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(manifest) = &self.manifest {
            for table in ["dependencies", "dev-dependencies"] {
                if let Some(Item::Table(deps)) = manifest.get(table)
                    && let Some(path) = Self::find_in_deps(deps, name)
                {
                    return path;
                }
            }
        }

        Self::crate_root(name)
    }

    /// Run `func` against the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when the file's modified time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::get_manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::get_manifest_modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use toml_edit::Document;

    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Some(Document::parse(Box::from(text)).unwrap()),
            modified_time: None,
        }
    }

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        format!("::{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\narbor_serial = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("arbor_serial")), "::arbor_serial");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dev-dependencies]\narbor = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("arbor_serial")), "::arbor::serial");
    }

    #[test]
    fn fallback() {
        let m = manifest("[package]\nname = \"x\"\n");
        assert_eq!(path_string(&m.get_crate_path("arbor_serial")), "::arbor_serial");
    }
}
