//! Company domain models and parameters.

use crate::{
    model::company::{AddressDto, BankingDto, CompanyDataDto, CompanyDetailDto, CompanyDto},
    server::model::user::{normalize_email, User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
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

impl Company {
    pub fn from_entity(entity: entity::company::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            registration_number: entity.registration_number,
            vat_number: entity.vat_number,
            industry: entity.industry,
            size: entity.size,
            address: AddressDto {
                street: entity.street,
                city: entity.city,
                state: entity.state,
                zip_code: entity.zip_code,
                country: entity.country,
            },
            banking: BankingDto {
                bank_name: entity.bank_name,
                account_holder: entity.account_holder,
                account_number: entity.account_number,
                branch_code: entity.branch_code,
                account_type: entity.account_type,
            },
            owner_id: entity.owner_id,
        }
    }

    pub fn into_dto(self) -> CompanyDto {
        CompanyDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            registration_number: self.registration_number,
            vat_number: self.vat_number,
            industry: self.industry,
            size: self.size,
            address: self.address,
            banking: self.banking,
            owner_id: self.owner_id,
        }
    }
}

/// Company with owner and employees loaded.
#[derive(Debug, Clone)]
pub struct CompanyWithMembers {
    pub company: Company,
    pub owner: Option<User>,
    pub employees: Vec<User>,
}

impl CompanyWithMembers {
    pub fn into_dto(self) -> CompanyDetailDto {
        CompanyDetailDto {
            company: self.company.into_dto(),
            owner: self.owner.map(|owner| owner.into_dto(None)),
            employees: self
                .employees
                .into_iter()
                .map(|employee| employee.into_dto(None))
                .collect(),
        }
    }
}

/// Validated company details for create and update.
#[derive(Debug, Clone)]
pub struct SaveCompanyParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_number: Option<String>,
    pub vat_number: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub address: AddressDto,
    pub banking: BankingDto,
}

impl SaveCompanyParams {
    pub fn from_dto(dto: CompanyDataDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            phone: dto.phone.trim().to_string(),
            registration_number: dto.registration_number,
            vat_number: dto.vat_number,
            industry: dto.industry,
            size: dto.size,
            address: dto.address,
            banking: dto.banking,
        }
    }
}
