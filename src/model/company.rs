use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AddressDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl AddressDto {
    /// Non-empty address parts joined with `", "`.
    pub fn one_line(&self) -> String {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.zip_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BankingDto {
    pub bank_name: Option<String>,
    pub account_holder: Option<String>,
    pub account_number: Option<String>,
    pub branch_code: Option<String>,
    pub account_type: Option<String>,
}

/// Company details supplied at employer registration and on the settings page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CompanyDataDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_number: Option<String>,
    pub vat_number: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub address: AddressDto,
    #[serde(default)]
    pub banking: BankingDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CompanyDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_number: Option<String>,
    pub vat_number: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub address: AddressDto,
    pub banking: BankingDto,
    pub owner_id: i32,
}

/// A company with its owner and employees, as listed on `/api/companies`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CompanyDetailDto {
    pub company: CompanyDto,
    pub owner: Option<UserDto>,
    pub employees: Vec<UserDto>,
}
