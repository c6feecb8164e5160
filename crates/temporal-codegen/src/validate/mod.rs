//! Validation of the loaded IR.

mod declarations;

use crate::diagnostic::GeneratorError;
use crate::ir::FileIR;

/// Validates every file selected for generation.
pub fn validate_files(files: &[FileIR]) -> Result<(), GeneratorError> {
    declarations::validate_unique_declarations(files)?;
    Ok(())
}
