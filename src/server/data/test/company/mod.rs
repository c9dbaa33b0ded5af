use crate::{
    model::company::{AddressDto, BankingDto},
    server::{data::company::CompanyRepository, model::company::SaveCompanyParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod email_taken;
mod search;
mod update;

fn company_params(name: &str, email: &str) -> SaveCompanyParams {
    SaveCompanyParams {
        name: name.to_string(),
        email: email.to_string(),
        phone: "021 555 0100".to_string(),
        registration_number: None,
        vat_number: None,
        industry: Some("Education".to_string()),
        size: None,
        address: AddressDto {
            city: Some("Cape Town".to_string()),
            ..Default::default()
        },
        banking: BankingDto::default(),
    }
}
