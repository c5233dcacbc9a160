//! Codecs resolved per value type at runtime.
//!
//! Generic code should use [`crate::to_string`] and [`crate::from_str`], which dispatch
//! statically. The registry serves the boundary where only a [`TypeId`] or a
//! `&dyn AnyOption` is known. Codecs are memoized per value type in a sharded concurrent map;
//! the first use of a type inserts its codec under the shard's write lock, so concurrent first
//! uses agree on a single instance.

use std::{
    any::{self, TypeId},
    fmt,
    hash::BuildHasherDefault,
    sync::{Arc, OnceLock},
};

use dashmap::DashMap;
use derive_where::derive_where;
use optio::{AnyOption, Option};
use rustc_hash::FxHasher;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::CodecError;

type CodecMap = DashMap<TypeId, Arc<dyn ErasedCodec>, BuildHasherDefault<FxHasher>>;

/// Value types the registry can build a codec for.
pub trait Codable: Serialize + DeserializeOwned + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T> Codable for T where
    T: Serialize + DeserializeOwned + PartialEq + fmt::Debug + Send + Sync + 'static
{
}

/// Encode/decode for `Option<T>` with `T` erased.
pub trait ErasedCodec: Send + Sync {
    fn value_type_name(&self) -> &'static str;

    fn encode(&self, option: &dyn AnyOption) -> Result<Value, CodecError>;

    fn decode(&self, value: Value) -> Result<Box<dyn AnyOption>, CodecError>;
}

#[derive_where(Default, Clone, Copy, Debug)]
struct OptionCodec<T> {
    _value: std::marker::PhantomData<fn() -> T>,
}

impl<T: Codable> ErasedCodec for OptionCodec<T> {
    fn value_type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn encode(&self, option: &dyn AnyOption) -> Result<Value, CodecError> {
        let option = option.as_any().downcast_ref::<Option<T>>().ok_or_else(|| {
            CodecError::TypeMismatch {
                expected: self.value_type_name(),
                found: option.value_type_name(),
            }
        })?;
        Ok(serde_json::to_value(option)?)
    }

    fn decode(&self, value: Value) -> Result<Box<dyn AnyOption>, CodecError> {
        let option: Option<T> = serde_json::from_value(value)?;
        Ok(Box::new(option))
    }
}

pub struct CodecRegistry {
    codecs: OnceLock<CodecMap>,
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecRegistry {
    pub const fn new() -> Self {
        Self { codecs: OnceLock::new() }
    }

    /// The process-wide registry.
    pub fn global() -> &'static CodecRegistry {
        static GLOBAL: CodecRegistry = CodecRegistry::new();
        &GLOBAL
    }

    fn map(&self) -> &CodecMap {
        self.codecs.get_or_init(CodecMap::default)
    }

    /// The codec for `Option<T>`, constructing and caching it on first use.
    pub fn codec_for<T: Codable>(&self) -> Arc<dyn ErasedCodec> {
        let type_id = TypeId::of::<T>();
        if let Some(codec) = self.map().get(&type_id) {
            return Arc::clone(codec.value());
        }
        let entry = self.map().entry(type_id).or_insert_with(|| {
            tracing::debug!(value_type = any::type_name::<T>(), "constructing codec");
            Arc::new(OptionCodec::<T>::default())
        });
        Arc::clone(entry.value())
    }

    pub fn register<T: Codable>(&self) {
        self.codec_for::<T>();
    }

    /// The codec cached for a value type, if any.
    pub fn lookup(&self, value_type: TypeId) -> std::option::Option<Arc<dyn ErasedCodec>> {
        self.map()
            .get(&value_type)
            .map(|codec| Arc::clone(codec.value()))
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.map().contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    pub fn encode<T: Codable>(&self, option: &Option<T>) -> Result<Value, CodecError> {
        self.codec_for::<T>().encode(option)
    }

    /// Decodes statically, registering the codec for `T` so that [`CodecRegistry::decode_dyn`]
    /// can serve the same value type later.
    pub fn decode<T: Codable>(&self, value: Value) -> Result<Option<T>, CodecError> {
        self.register::<T>();
        crate::from_value(value)
    }

    /// Encodes an option whose value type has a registered codec.
    pub fn encode_dyn(&self, option: &dyn AnyOption) -> Result<Value, CodecError> {
        let codec = self
            .lookup(option.value_type_id())
            .ok_or_else(|| CodecError::Unregistered {
                type_id: option.value_type_id(),
                type_name: Some(option.value_type_name()),
            })?;
        codec.encode(option)
    }

    /// Decodes into the option type whose value type is `value_type`.
    pub fn decode_dyn(
        &self,
        value_type: TypeId,
        value: Value,
    ) -> Result<Box<dyn AnyOption>, CodecError> {
        let codec = self
            .lookup(value_type)
            .ok_or(CodecError::Unregistered { type_id: value_type, type_name: None })?;
        codec.decode(value)
    }
}
