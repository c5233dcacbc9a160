//! JSON interchange for [`optio::Option`].
//!
//! Options use the array encoding: `None` is `[]`, `Some(v)` is `[v]`, at any depth and at any
//! field position inside a larger record. The helpers here dispatch statically on `T`; the
//! [`registry`] covers callers that only know the value type at runtime.

pub mod logger;
pub mod registry;

use std::{any::TypeId, fmt};

use optio::Option;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

pub use registry::{Codable, CodecRegistry, ErasedCodec};

#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
    /// No codec has been registered for the value type. `type_name` is `None` when the caller
    /// only had a [`TypeId`].
    Unregistered { type_id: TypeId, type_name: std::option::Option<&'static str> },
    /// A codec was handed an option over a different value type.
    TypeMismatch { expected: &'static str, found: &'static str },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Json(err) => write!(f, "{err}"),
            CodecError::Unregistered { type_name: Some(type_name), .. } => {
                write!(f, "no codec registered for `{type_name}`")
            }
            CodecError::Unregistered { type_id, type_name: None } => {
                write!(f, "no codec registered for the value type with {type_id:?}")
            }
            CodecError::TypeMismatch { expected, found } => {
                write!(f, "expected an option over `{expected}`, found one over `{found}`")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Json(err)
    }
}

pub fn to_string<T: Serialize>(option: &Option<T>) -> Result<String, CodecError> {
    Ok(serde_json::to_string(option)?)
}

pub fn to_string_pretty<T: Serialize>(option: &Option<T>) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(option)?)
}

pub fn to_value<T: Serialize>(option: &Option<T>) -> Result<Value, CodecError> {
    Ok(serde_json::to_value(option)?)
}

/// Serializes any value, pretty-printing when the `pretty_json` setting is on.
pub fn encode<S: Serialize + ?Sized>(value: &S) -> Result<String, CodecError> {
    let json = if optio_config::pretty_json() {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<Option<T>, CodecError> {
    Ok(serde_json::from_str(json)?)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<Option<T>, CodecError> {
    Ok(serde_json::from_value(value)?)
}
