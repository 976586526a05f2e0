use serenity::async_trait;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use crate::server::{
    data::backend::PollBackend,
    error::AppError,
    model::poll::PollDocument,
};

mod document;
mod poll;

/// In-memory poll backend recording every saved document.
///
/// `fail_saves` makes every subsequent `save` return an error without storing
/// anything, to check that failed writes leave the store unchanged.
#[derive(Default)]
pub struct MemoryBackend {
    initial: Option<PollDocument>,
    corrupt: bool,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
    saved: Mutex<Option<PollDocument>>,
}

impl MemoryBackend {
    pub fn with_document(document: PollDocument) -> Self {
        Self {
            initial: Some(document),
            ..Self::default()
        }
    }

    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn last_saved(&self) -> Option<PollDocument> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl PollBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<PollDocument>, AppError> {
        if self.corrupt {
            return Err(serde_json::from_str::<PollDocument>("{ not json")
                .unwrap_err()
                .into());
        }
        Ok(self.initial.clone())
    }

    async fn save(&self, document: &PollDocument) -> Result<(), AppError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("disk full").into());
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.saved.lock().unwrap() = Some(document.clone());
        Ok(())
    }
}
