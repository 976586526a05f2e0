use std::path::PathBuf;
use tempfile::TempDir;

use crate::{
    builder::{CHANNELS_FILE, POLLS_FILE, USERS_FILE},
    error::TestError,
};

/// Test environment holding a temporary directory for the bot's documents.
///
/// The directory and everything in it is deleted when the context is dropped, so
/// keep the context alive for the whole test.
pub struct TestContext {
    dir: TempDir,

    /// Path of the allow-list document (may not exist).
    pub users_file: PathBuf,

    /// Path of the channel target document (may not exist).
    pub channels_file: PathBuf,

    /// Path of the poll store (may not exist).
    pub polls_file: PathBuf,
}

impl TestContext {
    /// Creates an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no documents written
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;

        Ok(Self {
            users_file: dir.path().join(USERS_FILE),
            channels_file: dir.path().join(CHANNELS_FILE),
            polls_file: dir.path().join(POLLS_FILE),
            dir,
        })
    }

    /// Path of `file_name` inside the test directory.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// Reads a document back as JSON.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed document
    /// - `Err(TestError)` - File missing or not valid JSON
    pub fn read_json(&self, file_name: &str) -> Result<serde_json::Value, TestError> {
        let contents = std::fs::read_to_string(self.path(file_name))?;
        Ok(serde_json::from_str(&contents)?)
    }
}
