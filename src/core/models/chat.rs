//! Chat notification settings

use serde::{Deserialize, Serialize};

/// Channel placeholder expanded to the scanned server's name at post time
pub const SERVER_NAME_PLACEHOLDER: &str = "${servername}";

/// Incoming-webhook settings for posting scan summaries to a chat channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Incoming webhook URL
    pub hook_url: String,

    /// Channel to post to: `#name` or the server-name placeholder
    pub channel: String,

    /// Emoji used as the poster's icon
    pub icon_emoji: String,

    /// Name the message is posted as
    pub auth_user: String,

    /// Users mentioned in every message
    pub notify_users: Vec<String>,

    /// Message text template
    pub text: String,

    /// Whether chat notification is used for this run.
    ///
    /// A disabled block is never validated.
    #[serde(skip)]
    pub use_this_time: bool,
}

impl ChatConfig {
    /// Whether the channel has an accepted form
    #[must_use]
    pub fn has_valid_channel_prefix(&self) -> bool {
        self.channel.starts_with('#') || self.channel == SERVER_NAME_PLACEHOLDER
    }
}
