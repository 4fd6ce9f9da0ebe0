use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::channel::{Channel, CreateChannelParams};

pub struct ChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a channel inside a server
    pub async fn create(&self, params: CreateChannelParams) -> Result<Channel, DbErr> {
        let entity = entity::channel::ActiveModel {
            name: ActiveValue::Set(params.name),
            topic: ActiveValue::Set(params.topic),
            owner_id: ActiveValue::Set(params.owner_id),
            server_id: ActiveValue::Set(params.server_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Channel::from_entity(entity))
    }

    /// Gets all channels of a server ordered by id
    pub async fn get_by_server_id(&self, server_id: i32) -> Result<Vec<Channel>, DbErr> {
        let channels = entity::prelude::Channel::find()
            .filter(entity::channel::Column::ServerId.eq(server_id))
            .order_by_asc(entity::channel::Column::Id)
            .all(self.db)
            .await?;

        Ok(channels.into_iter().map(Channel::from_entity).collect())
    }
}
