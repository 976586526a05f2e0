use serenity::{
    all::{ChannelId, GuildId, MessageId, RoleId, UserId},
    async_trait,
};
use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use test_utils::serenity::create_test_role;
use tokio::time::Instant;

use crate::server::{
    error::AppError,
    model::{message::OutgoingMessage, target::ResolvedTarget},
    service::{
        fanout::FanoutBroadcaster,
        role::RoleNameResolver,
        transport::{role_names, MessageTransport, RoleDirectory},
    },
};


pub const GUILD: u64 = 1;
pub const PILOTS: u64 = 100;
pub const LOGI: u64 = 101;

/// Message transport recording every call instead of reaching Discord.
///
/// Sends and edits to a channel listed in `failing` return a transport error.
#[derive(Default)]
pub struct FakeTransport {
    failing: HashSet<ChannelId>,
    next_message_id: AtomicU64,
    sent: Mutex<Vec<(ChannelId, OutgoingMessage, Instant)>>,
    edited: Mutex<Vec<(ChannelId, MessageId, OutgoingMessage)>>,
}

impl FakeTransport {
    pub fn failing_on(channels: &[u64]) -> Self {
        Self {
            failing: channels.iter().map(|id| ChannelId::new(*id)).collect(),
            ..Self::default()
        }
    }

    /// Every attempted send, failed ones included.
    pub fn sent(&self) -> Vec<(ChannelId, OutgoingMessage)> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(channel_id, message, _)| (*channel_id, message.clone()))
            .collect()
    }

    /// Instant of each send call, in call order.
    pub fn send_times(&self) -> Vec<Instant> {
        self.sent.lock().unwrap().iter().map(|(_, _, at)| *at).collect()
    }

    pub fn edited(&self) -> Vec<(ChannelId, MessageId, OutgoingMessage)> {
        self.edited.lock().unwrap().clone()
    }

    fn check(&self, channel_id: ChannelId) -> Result<(), AppError> {
        if self.failing.contains(&channel_id) {
            return Err(serenity::Error::Other("Missing Access").into());
        }
        Ok(())
    }
}

#[async_trait]
impl MessageTransport for FakeTransport {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: &OutgoingMessage,
    ) -> Result<MessageId, AppError> {
        self.sent
            .lock()
            .unwrap()
            .push((channel_id, message.clone(), Instant::now()));
        self.check(channel_id)?;

        let id = self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(MessageId::new(channel_id.get() * 1000 + id))
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: &OutgoingMessage,
    ) -> Result<(), AppError> {
        self.check(channel_id)?;
        self.edited
            .lock()
            .unwrap()
            .push((channel_id, message_id, message.clone()));
        Ok(())
    }
}

/// Role directory serving fixed guild roles.
#[derive(Default)]
pub struct FakeRoleDirectory {
    guilds: HashMap<GuildId, HashMap<RoleId, String>>,
    unavailable: bool,
}

impl FakeRoleDirectory {
    /// Guild 1 with the "Pilots" and "Logistics" roles.
    pub fn with_default_roles() -> Self {
        let roles = vec![
            create_test_role(PILOTS, "Pilots", 0xFF0000, 2),
            create_test_role(LOGI, "Logistics", 0x00FF00, 1),
            create_test_role(GUILD, "@everyone", 0, 0),
        ];

        Self {
            guilds: HashMap::from([(GuildId::new(GUILD), role_names(roles))]),
            unavailable: false,
        }
    }

    /// Directory whose lookups always fail.
    pub fn unavailable() -> Self {
        Self {
            guilds: HashMap::new(),
            unavailable: true,
        }
    }
}

#[async_trait]
impl RoleDirectory for FakeRoleDirectory {
    async fn guild_role_names(
        &self,
        guild_id: GuildId,
    ) -> Result<HashMap<RoleId, String>, AppError> {
        if self.unavailable {
            return Err(serenity::Error::Other("roles unavailable").into());
        }
        Ok(self.guilds.get(&guild_id).cloned().unwrap_or_default())
    }
}

pub fn target(guild_id: u64, channel_id: u64, ping_role_ids: &[u64]) -> ResolvedTarget {
    ResolvedTarget {
        guild_id: GuildId::new(guild_id),
        channel_id: ChannelId::new(channel_id),
        ping_role_ids: ping_role_ids.iter().map(|id| RoleId::new(*id)).collect(),
    }
}

pub fn roles() -> RoleNameResolver {
    RoleNameResolver::new(Arc::new(FakeRoleDirectory::with_default_roles()))
}

/// Broadcaster over `transport` without pacing.
pub fn unpaced(transport: Arc<FakeTransport>) -> FanoutBroadcaster {
    FanoutBroadcaster::new(transport, Duration::ZERO)
}

pub fn sender() -> UserId {
    UserId::new(42)
}
