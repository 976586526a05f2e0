//! Transport-independent outgoing message.
//!
//! Services render into `OutgoingMessage`; the Discord transport converts it into
//! Serenity builders. Keeping this type free of Serenity builders lets tests inspect
//! exactly what would have been sent.

/// Visual style of a rendered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyleKind {
    Primary,
    Secondary,
}

/// One button in the message's action row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub custom_id: String,
    pub label: String,
    pub style: ButtonStyleKind,
}

/// Content plus an optional single row of buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub content: String,
    pub buttons: Vec<ButtonSpec>,
    /// Role and `@everyone` mentions in `content` notify members. User mentions never do.
    pub ping_roles: bool,
}
