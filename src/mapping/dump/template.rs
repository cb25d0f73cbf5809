//! Go source template for the mapping module.
//!
//! # Output
//!
//! ```go
//! // This file is generated by assetmap
//! // Containing all the assets mapping data for your router reverse lookup
//! // Better not to edit this.
//!
//! package assets
//!
//! var allAssetsMapping = map[string]string{
//! 	"images/logo.png": "images/fp0123...logo.png",
//! }
//! ```

use std::fmt::{self, Write};

use crate::mapping::{MappingError, MappingSet};

const GO_BANNER: &[&str] = &[
    "This file is generated by assetmap",
    "Containing all the assets mapping data for your router reverse lookup",
    "Better not to edit this.",
];

const GO_TABLE: &str = "allAssetsMapping";

/// Template for the generated module, owned by the module dumper.
#[derive(Debug, Clone)]
pub struct ModuleTemplate {
    banner: &'static [&'static str],
    table: &'static str,
}

impl ModuleTemplate {
    /// Go package with a package-level `map[string]string`.
    pub const fn go() -> Self {
        Self {
            banner: GO_BANNER,
            table: GO_TABLE,
        }
    }

    /// Render the module for `set`, using its module name and entry order.
    pub fn render(&self, set: &MappingSet) -> Result<String, MappingError> {
        let package = set
            .module_name()
            .ok_or_else(|| MappingError::Render("module name is not set".into()))?;
        if package.is_empty() || package.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(MappingError::Render(format!(
                "`{}` cannot be used as a package name",
                package.escape_debug()
            )));
        }

        let mut out = String::with_capacity(256 + set.len() * 96);
        self.write(&mut out, package, set)
            .map_err(|e| MappingError::Render(e.to_string()))?;
        Ok(out)
    }

    fn write(&self, out: &mut impl Write, package: &str, set: &MappingSet) -> fmt::Result {
        for line in self.banner {
            writeln!(out, "// {line}")?;
        }
        writeln!(out)?;
        writeln!(out, "package {package}")?;
        writeln!(out)?;
        writeln!(out, "var {} = map[string]string{{", self.table)?;
        for entry in set {
            writeln!(
                out,
                "\t{}: {},",
                go_quote(&entry.canonical),
                go_quote(&entry.fingerprinted)
            )?;
        }
        writeln!(out, "}}")
    }
}

/// Quote a string as a Go interpreted string literal.
fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(quoted, "\\x{:02x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
