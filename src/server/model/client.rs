//! Client domain models and parameters.

use crate::model::client::{ClientDto, SaveClientDto};
use crate::model::invoice::DEFAULT_HOURLY_RATE;

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate: f64,
}

impl Client {
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            hourly_rate: entity.hourly_rate,
        }
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            company_id: self.company_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            hourly_rate: self.hourly_rate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveClientParams {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate: f64,
}

impl SaveClientParams {
    pub fn from_dto(dto: SaveClientDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email,
            phone: dto.phone,
            hourly_rate: dto.hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE),
        }
    }
}
