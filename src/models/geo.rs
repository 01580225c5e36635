use crate::geo::RegionEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegionResponse {
    pub code: String,
    pub name: String,
    pub name_ar: String,
    pub home_fee: i64,
    pub desk_fee: i64,
}

impl From<&RegionEntry> for RegionResponse {
    fn from(entry: &RegionEntry) -> Self {
        Self {
            code: entry.code.to_string(),
            name: entry.name.to_string(),
            name_ar: entry.name_ar.to_string(),
            home_fee: entry.home_fee,
            desk_fee: entry.desk_fee,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegionFeesResponse {
    pub home_fee: i64,
    pub desk_fee: i64,
}
