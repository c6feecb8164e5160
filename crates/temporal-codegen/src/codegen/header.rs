//! File header: generator banner, source path and package clause.

use super::go_file::GoFile;
use crate::ir::{Comments, FileIR};
use crate::{EXECUTABLE, VERSION};

/// Writes the header of a generated file, up to and including the package
/// clause. Comments attached to the proto `syntax` and `package` statements
/// are carried over (license banners usually live there).
pub fn generate_header(g: &mut GoFile, file: &FileIR, protoc_version: &str) {
    leading_comments(g, &file.syntax_comments);

    g.p(format!("// Code generated by {}. DO NOT EDIT.", EXECUTABLE));
    g.p("// versions:");
    g.p(format!("// - {} v{}", EXECUTABLE, VERSION));
    let alignment = EXECUTABLE.len() - "protoc".len() + 1;
    g.p(format!("// - protoc{}{}", " ".repeat(alignment), protoc_version));
    if file.deprecated {
        g.p(format!("// {} is a deprecated file.", file.path));
    } else {
        g.p(format!("// source: {}", file.path));
    }
    g.blank();

    leading_comments(g, &file.package_comments);

    g.package(file.go_package_name());
    g.blank();
}

fn leading_comments(g: &mut GoFile, comments: &Comments) {
    for detached in &comments.leading_detached {
        g.comment(detached);
        g.blank();
    }
    if !comments.leading.is_empty() {
        g.comment(&comments.leading);
        g.blank();
    }
}
