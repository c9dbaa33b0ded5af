use crate::{
    model::user::{ProfileDto, Role},
    server::{
        data::user::UserRepository,
        model::{
            company::SaveCompanyParams,
            user::{CreateUserParams, UpdateProfileParams},
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_with_company;
mod find_by_email;
mod get_by_company;
mod join_company;
mod update_profile;

fn employee_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        role: Role::Employee,
        profile: ProfileDto::default(),
    }
}
