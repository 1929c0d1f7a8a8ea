use crate::data::invite_use::InviteUseRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_recent;
