//! Call-site capture.
//!
//! Rust has no implicit `#function`, so every emission carries an explicit
//! [`CallSite`]. The [`call_site!`](crate::call_site) macro fills one in
//! from `file!()`, the enclosing function and `line!()`.

use serde::{Deserialize, Serialize};

/// Where an emission was made from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Source file path, as given by `file!()`
    pub file: String,
    /// Function or method name
    pub operation: String,
    /// Line number
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, operation: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            operation: operation.into(),
            line,
        }
    }

    /// Last path segment of the file.
    pub fn file_name(&self) -> &str {
        file_name(&self.file)
    }
}

/// Capture the current call site.
///
/// ```
/// let site = printer_core::call_site!();
/// assert!(site.file.ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), $crate::__function_name!(), line!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// Snapshot of the call site attached to a tracked log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceInfo {
    pub origin: String,
    pub operation: String,
    pub line: u32,
}

impl TraceInfo {
    pub fn capture(site: &CallSite) -> Self {
        Self {
            origin: site.file.clone(),
            operation: site.operation.clone(),
            line: site.line,
        }
    }

    /// `[Trace] ➞ main.rs ➞ run #42`
    pub fn render(&self, arrow: &str) -> String {
        format!(
            "[Trace] {arrow} {} {arrow} {} #{}",
            file_name(&self.origin),
            self.operation,
            self.line
        )
    }
}

/// Strip every directory from `path`.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
