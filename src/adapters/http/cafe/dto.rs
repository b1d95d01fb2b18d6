//! HTTP DTOs for cafe endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::cafe::{Cafe, CafeDetails};
use crate::domain::foundation::OwnedByUser;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of create and update requests.
///
/// Every field is optional on the wire so that a missing name or capacity
/// surfaces as a validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CafeRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub avg_price: Option<f64>,
    pub capacity: Option<i64>,
    pub theme: Option<String>,
}

impl From<CafeRequest> for CafeDetails {
    fn from(req: CafeRequest) -> Self {
        CafeDetails {
            name: req.name.unwrap_or_default(),
            location: req.location,
            description: req.description,
            avg_price: req.avg_price,
            // Zero fails the capacity range check.
            capacity: req.capacity.unwrap_or(0),
            theme: req.theme,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CafeResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub avg_price: Option<f64>,
    pub capacity: i32,
    pub theme: Option<String>,
    pub created_at: String,
}

impl From<&Cafe> for CafeResponse {
    fn from(cafe: &Cafe) -> Self {
        Self {
            id: cafe.id().to_string(),
            owner_id: cafe.owner_id().to_string(),
            name: cafe.name().to_string(),
            location: cafe.location().map(str::to_string),
            description: cafe.description().map(str::to_string),
            avg_price: cafe.avg_price(),
            capacity: cafe.capacity(),
            theme: cafe.theme().map(str::to_string),
            created_at: cafe.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CafeCreatedResponse {
    pub success: bool,
    pub message: String,
    pub cafe_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CafeListResponse {
    pub success: bool,
    pub cafes: Vec<CafeResponse>,
}

impl CafeListResponse {
    pub fn new(cafes: &[Cafe]) -> Self {
        Self {
            success: true,
            cafes: cafes.iter().map(CafeResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CafeDetailResponse {
    pub success: bool,
    pub cafe: CafeResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct CafeUpdatedResponse {
    pub success: bool,
    pub message: String,
    pub cafe: CafeResponse,
}
