//! Server domain models and parameters.
//!
//! Provides the server record the listing filters operate on, the annotated listing item
//! they produce, and the parsed form of the listing query.

use std::collections::BTreeSet;

use sea_orm::DbErr;

use crate::model::server::ServerDto;

/// Server row joined with its category and membership rows.
///
/// Produced by the repository and converted into [`Server`] at the repository boundary.
#[derive(Debug, Clone)]
pub struct ServerWithRelations {
    pub server: entity::server::Model,
    pub category: Option<entity::category::Model>,
    pub members: Vec<entity::server_member::Model>,
}

/// A community space with an owner, a category, and a member set.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Name of the category the server belongs to.
    pub category: String,
    pub owner_id: i32,
    pub member_ids: BTreeSet<i32>,
}

impl Server {
    /// Converts the joined entity models into a server domain model.
    ///
    /// # Returns
    /// - `Ok(Server)` - Converted domain model
    /// - `Err(DbErr::RecordNotFound)` - The server's category row is missing
    pub fn from_with_relations(relations: ServerWithRelations) -> Result<Self, DbErr> {
        let ServerWithRelations {
            server,
            category,
            members,
        } = relations;

        let category = category.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Category {} of server {} not found",
                server.category_id, server.id
            ))
        })?;

        Ok(Self {
            id: server.id,
            name: server.name,
            description: server.description,
            category: category.name,
            owner_id: server.owner_id,
            member_ids: members.into_iter().map(|m| m.user_id).collect(),
        })
    }

    pub fn is_member(&self, user_id: i32) -> bool {
        self.member_ids.contains(&user_id)
    }

    pub fn member_count(&self) -> u64 {
        self.member_ids.len() as u64
    }
}

/// A server in a listing result, optionally annotated with its member count.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerListItem {
    pub server: Server,
    pub num_members: Option<u64>,
}

impl ServerListItem {
    /// Converts the listing item to a DTO for API responses.
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.server.id,
            name: self.server.name,
            description: self.server.description,
            category: self.server.category,
            num_members: self.num_members,
        }
    }
}

/// Listing query after boolean flags have been read and empty values dropped.
///
/// `qty` and `by_serverid` stay unparsed: whether they are valid integers is decided by
/// the filter step that consumes them, so their errors surface in step order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerListQuery {
    pub category: Option<String>,
    pub by_user: bool,
    pub with_num_members: bool,
    pub qty: Option<String>,
    pub by_serverid: Option<String>,
}

/// Parameters for creating a server.
#[derive(Debug, Clone)]
pub struct CreateServerParams {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub category_id: i32,
}
