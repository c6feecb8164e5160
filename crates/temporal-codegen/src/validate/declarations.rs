//! Declaration name uniqueness.
//!
//! Generated files that share a Go import path end up in the same Go
//! package, so their top-level names must be unique across all of them.

use std::collections::{HashMap, HashSet};

use crate::codegen::declarations;
use crate::diagnostic::GeneratorError;
use crate::ir::FileIR;

/// Rejects two generated declarations with the same name in one Go package.
pub fn validate_unique_declarations(files: &[FileIR]) -> Result<(), GeneratorError> {
    // Go import path -> declaration names
    let mut packages: HashMap<&str, HashSet<String>> = HashMap::new();

    for file in files.iter().filter(|f| !f.services.is_empty()) {
        let seen = packages.entry(&file.go_import_path.path).or_default();
        for name in declarations(file) {
            if seen.contains(&name) {
                return Err(GeneratorError::DuplicateDeclaration {
                    file: file.path.clone(),
                    name,
                });
            }
            seen.insert(name);
        }
    }

    Ok(())
}
