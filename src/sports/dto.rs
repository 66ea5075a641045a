use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A sport with its food lists decoded, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sport {
    pub sport: String,
    pub recommended_foods: Vec<String>,
    pub avoid_foods: Vec<String>,
}

/// Request body for sport creation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSportRequest {
    pub sport: String,
    pub recommended_foods: Vec<String>,
    pub avoid_foods: Vec<String>,
}

/// Request body for a full replacement of both food lists.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSportRequest {
    pub recommended_foods: Vec<String>,
    pub avoid_foods: Vec<String>,
}
