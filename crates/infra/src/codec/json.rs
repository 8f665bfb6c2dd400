//! JSON codec over serde_json

use serde::de::DeserializeOwned;
use serde::Serialize;
use stash_core::Codec;
use stash_domain::{CacheError, Result};

/// Codec that encodes the record sequence as a JSON array
///
/// The encoded root is the sequence itself (`[{"key": .., "value": ..}]`),
/// never a keyed document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl<T> Codec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|err| CacheError::Encode(err.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|err| CacheError::Decode(err.to_string()))
    }
}
