use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A server as returned by the listing endpoint.
///
/// `num_members` is only serialized when the caller asked for member counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Name of the category the server is listed under.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_members: Option<u64>,
}
