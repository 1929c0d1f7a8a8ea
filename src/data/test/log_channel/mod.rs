use crate::data::log_channel::LogChannelRepository;
use crate::model::log_channel::LogType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild;
mod upsert;
