//! Source comments, looked up by descriptor path.

use std::collections::HashMap;

use prost_types::FileDescriptorProto;

use crate::ir::Comments;

/// `FileDescriptorProto.package`.
pub const PACKAGE_PATH: i32 = 2;
/// `FileDescriptorProto.service`.
pub const SERVICE_PATH: i32 = 6;
/// `FileDescriptorProto.syntax`.
pub const SYNTAX_PATH: i32 = 12;
/// `ServiceDescriptorProto.method`.
pub const METHOD_PATH: i32 = 2;

/// Comments of one file, keyed by location path.
pub struct SourceComments {
    by_path: HashMap<Vec<i32>, Comments>,
}

impl SourceComments {
    pub fn new(file: &FileDescriptorProto) -> Self {
        let mut by_path = HashMap::new();

        let locations = file
            .source_code_info
            .as_ref()
            .map(|info| info.location.as_slice())
            .unwrap_or_default();
        for location in locations {
            by_path
                .entry(location.path.clone())
                .or_insert_with(|| Comments {
                    leading_detached: location.leading_detached_comments.clone(),
                    leading: location.leading_comments.clone().unwrap_or_default(),
                    trailing: location.trailing_comments.clone().unwrap_or_default(),
                });
        }

        Self { by_path }
    }

    pub fn get(&self, path: &[i32]) -> Comments {
        self.by_path.get(path).cloned().unwrap_or_default()
    }

    pub fn syntax(&self) -> Comments {
        self.get(&[SYNTAX_PATH])
    }

    pub fn package(&self) -> Comments {
        self.get(&[PACKAGE_PATH])
    }

    pub fn service(&self, service: usize) -> Comments {
        self.get(&[SERVICE_PATH, service as i32])
    }

    pub fn method(&self, service: usize, method: usize) -> Comments {
        self.get(&[SERVICE_PATH, service as i32, METHOD_PATH, method as i32])
    }
}
