//! Plugin request decoding.

use prost::Message;
use prost_reflect::DescriptorPool;
use prost_types::compiler::Version;

use crate::diagnostic::GeneratorError;

/// `google.protobuf.compiler.CodeGeneratorRequest`, with `proto_file` kept as
/// raw bytes so custom options survive until the descriptor pool decodes
/// them against the extensions it knows.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PluginRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: ::prost::alloc::vec::Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub compiler_version: Option<Version>,
    #[prost(bytes, repeated, tag = "15")]
    pub proto_file: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
struct RawFileDescriptorSet {
    #[prost(bytes, repeated, tag = "1")]
    pub file: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}

impl PluginRequest {
    /// Decodes a request read from stdin.
    pub fn decode_bytes(bytes: &[u8]) -> Result<Self, GeneratorError> {
        Self::decode(bytes).map_err(|e| GeneratorError::RequestDecode {
            message: e.to_string(),
        })
    }

    /// Builds a descriptor pool from every file in the request, in the
    /// topological order protoc sends them.
    pub fn descriptor_pool(&self) -> Result<DescriptorPool, GeneratorError> {
        let fds = RawFileDescriptorSet {
            file: self.proto_file.clone(),
        };
        DescriptorPool::decode(fds.encode_to_vec().as_slice()).map_err(|e| {
            GeneratorError::InvalidDescriptors {
                message: e.to_string(),
            }
        })
    }

    /// The protoc version as printed in generated headers.
    pub fn protoc_version(&self) -> String {
        protoc_version(self.compiler_version.as_ref())
    }
}

/// Formats a compiler version as `v<major>.<minor>.<patch>[-<suffix>]`, or
/// `(unknown)` when protoc did not send one.
pub fn protoc_version(version: Option<&Version>) -> String {
    let Some(v) = version else {
        return "(unknown)".to_string();
    };

    let mut out = format!(
        "v{}.{}.{}",
        v.major.unwrap_or_default(),
        v.minor.unwrap_or_default(),
        v.patch.unwrap_or_default()
    );
    if let Some(suffix) = v.suffix.as_deref().filter(|s| !s.is_empty()) {
        out.push('-');
        out.push_str(suffix);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(major: i32, minor: i32, patch: i32, suffix: &str) -> Version {
        Version {
            major: Some(major),
            minor: Some(minor),
            patch: Some(patch),
            suffix: Some(suffix.to_string()),
        }
    }

    #[test]
    fn test_protoc_version() {
        assert_eq!(protoc_version(None), "(unknown)");
        assert_eq!(protoc_version(Some(&version(4, 23, 2, ""))), "v4.23.2");
        assert_eq!(protoc_version(Some(&version(3, 21, 0, "rc1"))), "v3.21.0-rc1");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = PluginRequest::decode_bytes(&[0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, GeneratorError::RequestDecode { .. }));
    }

    #[test]
    fn test_decode_empty_request() {
        let request = PluginRequest::decode_bytes(&[]).unwrap();
        assert!(request.file_to_generate.is_empty());
        assert_eq!(request.protoc_version(), "(unknown)");
        assert!(request.descriptor_pool().is_ok());
    }

    #[test]
    fn test_descriptor_pool_rejects_invalid_files() {
        let request = PluginRequest {
            proto_file: vec![vec![0x0a]],
            ..Default::default()
        };
        let err = request.descriptor_pool().unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidDescriptors { .. }));
    }
}
