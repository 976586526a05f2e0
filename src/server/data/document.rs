//! Read-only configuration documents.
//!
//! Both documents degrade to empty when missing or malformed. The bot still starts,
//! but broadcasts reach no channel and nobody is authorized until the document is
//! fixed, so each failure is logged at error level.

use serde::de::DeserializeOwned;
use std::{io::ErrorKind, path::Path};

use crate::server::{
    error::AppError,
    model::{access::AllowedUser, channel::ChannelDocument},
};

pub struct DocumentRepository<'a> {
    users_file: &'a Path,
    channels_file: &'a Path,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(users_file: &'a Path, channels_file: &'a Path) -> Self {
        Self {
            users_file,
            channels_file,
        }
    }

    /// Loads the operator allow-list.
    ///
    /// # Returns
    /// - `Vec<AllowedUser>` - Parsed entries, empty if the document is missing or corrupt
    pub async fn load_allow_list(&self) -> Vec<AllowedUser> {
        match read_document::<Vec<AllowedUser>>(self.users_file).await {
            Ok(users) => {
                tracing::info!(
                    "Loaded {} allowed user(s) from {}",
                    users.len(),
                    self.users_file.display()
                );
                users
            }
            Err(e) => {
                tracing::error!(
                    "Allow-list {} is unreadable, no user will be authorized: {}",
                    self.users_file.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Loads the per-guild, per-category channel targets.
    ///
    /// # Returns
    /// - `ChannelDocument` - Parsed document, empty if missing or corrupt
    pub async fn load_channels(&self) -> ChannelDocument {
        match read_document::<ChannelDocument>(self.channels_file).await {
            Ok(document) => {
                tracing::info!(
                    "Loaded channel targets for {} guild(s) from {}",
                    document.guilds.len(),
                    self.channels_file.display()
                );
                document
            }
            Err(e) => {
                tracing::error!(
                    "Channel document {} is unreadable, broadcasts will reach no channel: {}",
                    self.channels_file.display(),
                    e
                );
                ChannelDocument::default()
            }
        }
    }
}

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            tracing::warn!("Document {} does not exist", path.display());
        }
        e
    })?;

    Ok(serde_json::from_slice(&bytes)?)
}
