use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A server as returned by the listing endpoint.
///
/// `num_members` is only present in the JSON when the request asked for it with
/// `with_num_members=true`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    /// ID of the owning user.
    pub owner: i32,
    /// Name of the server's category.
    pub category: String,
    pub description: Option<String>,
    /// IDs of the users in the server's membership set.
    pub member: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_members: Option<u64>,
}

/// Raw query parameters of `GET /api/server/select`.
///
/// Every parameter is taken as an optional string so malformed numbers surface as
/// validation errors from the listing pipeline instead of extractor rejections.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerListQuery {
    /// Keep only servers whose category name matches exactly.
    pub category: Option<String>,
    /// Keep only the first `qty` servers.
    pub qty: Option<String>,
    /// `true` keeps only servers the caller is a member of. Requires login.
    pub by_user: Option<String>,
    /// Keep only the server with this ID.
    pub by_server_id: Option<String>,
    /// `true` adds `num_members` to every returned server.
    pub with_num_members: Option<String>,
}
