//! Category resolution — map a file name to a header category by extension.

use crate::error::ResolveError;
use crate::style::{self, HeaderStyle};
use std::fmt;
use std::path::Path;

/// C and C++ sources, headers and inline/include fragments.
pub const C_CPP_EXTENSIONS: &[&str] = &[
    ".c", ".cc", ".cpp", ".cxx", ".c++", ".h", ".hpp", ".hxx", ".h++", ".inl", ".ipp", ".inc",
];
pub const PYTHON_EXTENSIONS: &[&str] = &[".py", ".py3", ".pyw"];
pub const JAVA_EXTENSIONS: &[&str] = &[".java"];

/// Header category of a supported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CCpp,
    Python,
    Java,
}

impl Category {
    /// Look up an extension (with its leading dot). Matching is case-sensitive.
    pub fn from_extension(ext: &str) -> Option<Category> {
        if C_CPP_EXTENSIONS.contains(&ext) {
            Some(Category::CCpp)
        } else if PYTHON_EXTENSIONS.contains(&ext) {
            Some(Category::Python)
        } else if JAVA_EXTENSIONS.contains(&ext) {
            Some(Category::Java)
        } else {
            None
        }
    }

    /// Templates and detection strategy for this category.
    pub fn style(self) -> &'static HeaderStyle {
        match self {
            Category::CCpp => &style::C_CPP,
            Category::Python => &style::PYTHON,
            Category::Java => &style::JAVA,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::CCpp => "C/C++",
            Category::Python => "Python",
            Category::Java => "Java",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve the category of `filename`.
///
/// The extension is taken from the base name, so `dir.d/Makefile` has none and
/// neither does a dot-file such as `.bashrc`.
pub fn resolve(filename: Option<&Path>) -> Result<Category, ResolveError> {
    let path = filename.ok_or(ResolveError::NoFilename)?;
    let ext = extension_of(path).ok_or(ResolveError::NoExtension)?;
    Category::from_extension(&ext).ok_or(ResolveError::Unsupported(ext))
}

/// Extension including the leading dot, or `None` if the base name has none.
fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy();
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_name(name: &str) -> Result<Category, ResolveError> {
        resolve(Some(Path::new(name)))
    }

    #[test]
    fn every_c_cpp_extension_resolves() {
        for ext in C_CPP_EXTENSIONS {
            assert_eq!(resolve_name(&format!("src/main{ext}")), Ok(Category::CCpp), "{ext}");
        }
    }

    #[test]
    fn every_python_extension_resolves() {
        for ext in PYTHON_EXTENSIONS {
            assert_eq!(resolve_name(&format!("pkg/mod{ext}")), Ok(Category::Python), "{ext}");
        }
    }

    #[test]
    fn java_extension_resolves() {
        assert_eq!(resolve_name("com/acme/App.java"), Ok(Category::Java));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        assert_eq!(
            resolve_name("notes.txt"),
            Err(ResolveError::Unsupported(".txt".into()))
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            resolve_name("MAIN.C"),
            Err(ResolveError::Unsupported(".C".into()))
        );
        assert!(resolve_name("Script.PY").is_err());
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(resolve_name("archive.py.txt"), Err(ResolveError::Unsupported(".txt".into())));
        assert_eq!(resolve_name("gen.pb.h"), Ok(Category::CCpp));
    }

    #[test]
    fn missing_filename() {
        assert_eq!(resolve(None), Err(ResolveError::NoFilename));
    }

    #[test]
    fn missing_extension() {
        assert_eq!(resolve_name("Makefile"), Err(ResolveError::NoExtension));
        assert_eq!(resolve_name("dir.d/Makefile"), Err(ResolveError::NoExtension));
        assert_eq!(resolve_name(".bashrc"), Err(ResolveError::NoExtension));
    }

    #[test]
    fn trailing_dot_has_no_extension() {
        assert_eq!(resolve_name("weird."), Err(ResolveError::NoExtension));
    }

    #[test]
    fn status_messages() {
        assert_eq!(ResolveError::NoFilename.to_string(), "Filename does not exist");
        assert_eq!(ResolveError::NoExtension.to_string(), "Extension not found");
        assert_eq!(
            ResolveError::Unsupported(".txt".into()).to_string(),
            "Extension not supported"
        );
    }
}
