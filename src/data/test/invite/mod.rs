use crate::data::invite::InviteRepository;
use crate::model::invite::{CreateInviteParam, UpdateInviteParam};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod count_by_guild;
mod create;
mod delete;
mod get_by_code;
mod get_by_guild;
mod get_top_by_guild;
mod increment_uses;
mod update;
