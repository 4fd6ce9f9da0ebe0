use crate::server::{data::server::ServerRepository, model::server::CreateServerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all_with_relations;
mod get_by_id;
mod membership;
