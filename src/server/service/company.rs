//! Company directory, details and membership.

use sea_orm::DatabaseConnection;

use crate::{
    model::{company::CompanyDataDto, user::Role},
    server::{
        data::{company::CompanyRepository, user::UserRepository},
        error::AppError,
        model::{
            company::{Company, CompanyWithMembers, SaveCompanyParams},
            user::User,
        },
    },
};

pub struct CompanyService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All companies ordered by name, each with owner and employees.
    pub async fn get_all(&self) -> Result<Vec<CompanyWithMembers>, AppError> {
        let companies = CompanyRepository::new(self.db).get_all().await?;

        let mut result = Vec::with_capacity(companies.len());
        for company in companies {
            result.push(self.with_members(company).await?);
        }

        Ok(result)
    }

    /// # Returns
    /// - `Ok(CompanyWithMembers)` - Company with owner and employees
    /// - `Err(AppError::NotFound)` - No such company
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<CompanyWithMembers, AppError> {
        let company = self.find(id).await?;

        self.with_members(company).await
    }

    /// Case-insensitive substring search over company name and email.
    pub async fn search(&self, query: &str) -> Result<Vec<Company>, AppError> {
        Ok(CompanyRepository::new(self.db).search(query).await?)
    }

    /// Replaces a company's details. Ownership is checked by the caller.
    ///
    /// # Returns
    /// - `Ok(Company)` - Updated company
    /// - `Err(AppError::BadRequest)` - Missing name/email or email used by another company
    /// - `Err(AppError::NotFound)` - No such company
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, dto: CompanyDataDto) -> Result<Company, AppError> {
        let company_repo = CompanyRepository::new(self.db);

        let params = SaveCompanyParams::from_dto(dto);
        if params.name.is_empty() || params.email.is_empty() {
            return Err(AppError::BadRequest(
                "Company name and email are required".to_string(),
            ));
        }
        if company_repo.email_taken(&params.email, Some(id)).await? {
            return Err(AppError::BadRequest(
                "Company already exists with this email".to_string(),
            ));
        }

        company_repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
    }

    /// Users with the employee role who belong to the company.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Employees ordered by name
    /// - `Err(AppError::NotFound)` - No such company
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_employees(&self, company_id: i32) -> Result<Vec<User>, AppError> {
        let company = self.find(company_id).await?;

        self.employees_of(&company).await
    }

    async fn find(&self, id: i32) -> Result<Company, AppError> {
        CompanyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
    }

    async fn employees_of(&self, company: &Company) -> Result<Vec<User>, AppError> {
        let members = UserRepository::new(self.db)
            .get_by_company(company.id)
            .await?;

        Ok(members
            .into_iter()
            .filter(|user| user.role == Role::Employee)
            .collect())
    }

    async fn with_members(&self, company: Company) -> Result<CompanyWithMembers, AppError> {
        let owner = UserRepository::new(self.db)
            .find_by_id(company.owner_id)
            .await?;
        let employees = self.employees_of(&company).await?;

        Ok(CompanyWithMembers {
            company,
            owner,
            employees,
        })
    }
}
