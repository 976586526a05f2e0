use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// File name of the allow-list document inside the test directory.
pub const USERS_FILE: &str = "users.json";
/// File name of the channel target document inside the test directory.
pub const CHANNELS_FILE: &str = "channels.json";
/// File name of the poll store inside the test directory.
pub const POLLS_FILE: &str = "polls.json";

/// Builder for creating test contexts with pre-populated documents.
///
/// Documents that are not configured are not written, so the code under test sees
/// a missing file. Use [`TestBuilder::with_raw`] to place arbitrary bytes, for
/// example a corrupt document.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_users(factory::allow_list::create_allow_list(&[1, 2]))
///     .build()?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// File name and contents, written in insertion order during `build()`.
    files: Vec<(&'static str, FileContents)>,
}

enum FileContents {
    Json(Value),
    Raw(String),
}

impl TestBuilder {
    /// Creates a new test builder with no documents configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the allow-list document.
    pub fn with_users(self, users: Value) -> Self {
        self.with_file(USERS_FILE, FileContents::Json(users))
    }

    /// Writes the channel target document.
    pub fn with_channels(self, channels: Value) -> Self {
        self.with_file(CHANNELS_FILE, FileContents::Json(channels))
    }

    /// Writes the poll store.
    pub fn with_polls(self, polls: Value) -> Self {
        self.with_file(POLLS_FILE, FileContents::Json(polls))
    }

    /// Writes `contents` verbatim to `file_name`.
    ///
    /// # Arguments
    /// - `file_name` - One of [`USERS_FILE`], [`CHANNELS_FILE`], [`POLLS_FILE`] or any other name
    /// - `contents` - Bytes to write, not validated
    pub fn with_raw(self, file_name: &'static str, contents: impl Into<String>) -> Self {
        self.with_file(file_name, FileContents::Raw(contents.into()))
    }

    fn with_file(mut self, file_name: &'static str, contents: FileContents) -> Self {
        self.files.retain(|(name, _)| *name != file_name);
        self.files.push((file_name, contents));
        self
    }

    /// Builds the test context and writes the configured documents.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Temporary directory with the documents in place
    /// - `Err(TestError::Io)` - Failed to create the directory or a file
    /// - `Err(TestError::Json)` - Failed to serialize a document
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (file_name, contents) in self.files {
            let contents = match contents {
                FileContents::Json(value) => serde_json::to_string_pretty(&value)?,
                FileContents::Raw(raw) => raw,
            };
            std::fs::write(context.path(file_name), contents)?;
        }

        Ok(context)
    }
}
