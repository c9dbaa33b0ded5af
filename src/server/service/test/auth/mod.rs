use crate::{
    model::{
        company::CompanyDataDto,
        user::{JoinCompanyDto, LoginDto, ProfileDto, RegisterDto, Role},
    },
    server::{
        error::{auth::AuthError, AppError},
        service::auth::{token::JwtKeys, AuthService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod join_company;
mod login;
mod register;

const SECRET: &str = "service-test-secret";

fn register_dto(email: &str, role: Role) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        password: "secret123".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        role,
        profile: ProfileDto::default(),
        company_data: None,
    }
}

fn company_data(email: &str) -> CompanyDataDto {
    CompanyDataDto {
        name: "Acme Tutoring".to_string(),
        email: email.to_string(),
        phone: "021 555 0100".to_string(),
        registration_number: None,
        vat_number: None,
        industry: None,
        size: None,
        address: Default::default(),
        banking: Default::default(),
    }
}
