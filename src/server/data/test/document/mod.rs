use serenity::all::{ChannelId, RoleId, UserId};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::document::DocumentRepository;

mod load_allow_list;
mod load_channels;
