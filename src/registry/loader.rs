use std::marker::PhantomData;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A game data asset stored as one RON file under `assets/data/`.
pub trait DataFile: Asset + TypePath + DeserializeOwned {
    /// Compound extension that routes the file to its loader, e.g. `tables.ron`.
    const EXTENSION: &'static str;
    /// Name used in logs and load errors.
    const LABEL: &'static str;
}

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{file} is empty")]
    Empty { file: &'static str },
    #[error("{file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Parse a data file body.
pub fn parse_data<T: DataFile>(bytes: &[u8]) -> Result<T, RonLoaderError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(RonLoaderError::Empty { file: T::LABEL });
    }
    ron::de::from_bytes::<T>(bytes).map_err(|source| RonLoaderError::Parse {
        file: T::LABEL,
        source,
    })
}

/// Asset loader for one `DataFile` type.
#[derive(TypePath)]
pub struct RonLoader<T: DataFile> {
    extensions: [&'static str; 1],
    _phantom: PhantomData<T>,
}

impl<T: DataFile> Default for RonLoader<T> {
    fn default() -> Self {
        Self {
            extensions: [T::EXTENSION],
            _phantom: PhantomData,
        }
    }
}

impl<T: DataFile> AssetLoader for RonLoader<T> {
    type Asset = T;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let asset = parse_data::<T>(&bytes)?;
        debug!("Parsed {} ({} bytes)", T::LABEL, bytes.len());
        Ok(asset)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}
