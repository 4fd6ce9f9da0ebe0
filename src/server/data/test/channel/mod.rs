use crate::server::{data::channel::ChannelRepository, model::channel::CreateChannelParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
