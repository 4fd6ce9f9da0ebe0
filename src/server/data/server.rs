//! Server data repository.
//!
//! Loads servers joined with their category and member rows, which is the base
//! collection the listing filters run over, and manages the membership set.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::server::{CreateServerParams, ServerWithRelations};

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a server without members
    pub async fn create(
        &self,
        params: CreateServerParams,
    ) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            owner_id: ActiveValue::Set(params.owner_id),
            category_id: ActiveValue::Set(params.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adds a user to a server's member set.
    ///
    /// # Returns
    /// - `Ok(true)` - User was added
    /// - `Ok(false)` - User already was a member, nothing changed
    /// - `Err(DbErr)` - Database error, e.g. unknown server or user
    pub async fn add_member(&self, server_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::ServerMember::find_by_id((server_id, user_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::server_member::ActiveModel {
            server_id: ActiveValue::Set(server_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a user from a server's member set, returning whether they were a member
    pub async fn remove_member(&self, server_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ServerMember::delete_by_id((server_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every server with its category and members, ordered by server id
    ///
    /// Runs two queries regardless of directory size: servers joined with their
    /// category, then the whole membership table.
    pub async fn get_all_with_relations(&self) -> Result<Vec<ServerWithRelations>, DbErr> {
        let servers = entity::prelude::Server::find()
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::server::Column::Id)
            .all(self.db)
            .await?;

        let members = entity::prelude::ServerMember::find()
            .order_by_asc(entity::server_member::Column::UserId)
            .all(self.db)
            .await?;
        let mut members_map = group_by_server(members);

        Ok(servers
            .into_iter()
            .map(|(server, category)| {
                let members = members_map.remove(&server.id).unwrap_or_default();
                ServerWithRelations {
                    server,
                    category,
                    members,
                }
            })
            .collect())
    }

    /// Gets a single server with its category and members
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServerWithRelations>, DbErr> {
        let Some((server, category)) = entity::prelude::Server::find_by_id(id)
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let members = entity::prelude::ServerMember::find()
            .filter(entity::server_member::Column::ServerId.eq(server.id))
            .order_by_asc(entity::server_member::Column::UserId)
            .all(self.db)
            .await?;

        Ok(Some(ServerWithRelations {
            server,
            category,
            members,
        }))
    }
}

fn group_by_server(
    members: Vec<entity::server_member::Model>,
) -> HashMap<i32, Vec<entity::server_member::Model>> {
    let mut members_map: HashMap<i32, Vec<entity::server_member::Model>> = HashMap::new();

    for member in members {
        members_map.entry(member.server_id).or_default().push(member);
    }

    members_map
}
