//! Channel domain models and parameters.

/// A named sub-space within a server.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: i32,
    pub name: String,
    pub topic: String,
    pub owner_id: i32,
    pub server_id: i32,
}

impl Channel {
    /// Converts an entity model to a channel domain model at the repository boundary.
    pub fn from_entity(entity: entity::channel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            topic: entity.topic,
            owner_id: entity.owner_id,
            server_id: entity.server_id,
        }
    }
}

/// Parameters for creating a channel inside a server.
#[derive(Debug, Clone)]
pub struct CreateChannelParams {
    pub name: String,
    pub topic: String,
    pub owner_id: i32,
    pub server_id: i32,
}
