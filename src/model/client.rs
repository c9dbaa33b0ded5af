use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ClientDto {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate: f64,
}

/// Body for both creating and updating a client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SaveClientDto {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Defaults to 75 when omitted.
    pub hourly_rate: Option<f64>,
}
