//! Invoice generation and lifecycle.
//!
//! Invoices are built from a company's completed sessions that have not been billed yet.
//! Generating one stores it as a draft and flags its sessions as invoiced; from there it
//! can be sent, marked paid, printed or deleted by the user who created it.

pub mod document;

use chrono::{NaiveDate, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    model::invoice::{
        build_line_items, due_date_for, filter_invoices, generated_invoice_number,
        invoice_number_for, CreateInvoiceDto, GenerateInvoiceDto, InvoiceDto, InvoiceStatsDto,
        InvoiceStatus, InvoiceTotals,
    },
    server::{
        data::{
            client::ClientRepository, company::CompanyRepository, event::EventRepository,
            invoice::InvoiceRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            company::Company,
            invoice::{CreateInvoiceParams, Invoice, InvoiceDraft},
            user::User,
        },
        service::client::ClientService,
        util::period::month_bounds,
    },
};

/// Attempts at drawing a free random number for a manual invoice.
const MANUAL_NUMBER_ATTEMPTS: usize = 20;

pub struct InvoiceService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> InvoiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the invoice for a client's completed, unbilled sessions in a month without
    /// storing anything.
    ///
    /// # Returns
    /// - `Ok(InvoiceDraft)` - Draft with items and totals (items may be empty)
    /// - `Err(AppError::BadRequest)` - Invalid month or actor without a company
    /// - `Err(AppError::NotFound)` - Client missing or outside the actor's company
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn preview(
        &self,
        actor: &User,
        client_id: i32,
        year: i32,
        month: u32,
    ) -> Result<InvoiceDraft, AppError> {
        let (start, end) = month_bounds(year, month)?;
        let company = self.company_of(actor).await?;
        let client = ClientService::new(self.db)
            .find_in_company(company.id, client_id)
            .await?;

        let events = EventRepository::new(self.db)
            .get_completed_for_company(company.id, start, end, Some(&client.name), true)
            .await?;

        let items = build_line_items(&events, &client.name, year, month, Some(client.hourly_rate));
        let totals = InvoiceTotals::from_items(&items);
        let due_date = due_date_for(year, month)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid year {}", year)))?;

        Ok(InvoiceDraft {
            invoice_number: invoice_number_for(&client.name, year, month),
            company,
            year,
            month,
            date: Utc::now().date_naive(),
            due_date,
            items,
            totals,
            event_ids: events.iter().map(|event| event.id).collect(),
            client,
        })
    }

    /// Stores the month's invoice for a client as a draft and flags its sessions invoiced.
    ///
    /// A second invoice for the same client and month gets a `-2`, `-3`, ... suffix.
    ///
    /// # Returns
    /// - `Ok(Invoice)` - Stored invoice
    /// - `Err(AppError::BadRequest)` - No billable sessions, invalid month or no company
    /// - `Err(AppError::NotFound)` - Client missing or outside the actor's company
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn generate(&self, actor: &User, dto: GenerateInvoiceDto) -> Result<Invoice, AppError> {
        let draft = self
            .preview(actor, dto.client_id, dto.year, dto.month)
            .await?;
        if draft.items.is_empty() {
            return Err(AppError::BadRequest(
                "No completed events for this client and period".to_string(),
            ));
        }

        let invoice_number = self.free_generated_number(&draft.invoice_number).await?;

        let invoice = InvoiceRepository::new(self.db)
            .create(CreateInvoiceParams {
                user_id: actor.id,
                client_id: Some(draft.client.id),
                invoice_number,
                date: draft.date,
                due_date: draft.due_date,
                items: draft.items,
                totals: draft.totals,
                notes: clean_notes(dto.notes),
                event_ids: draft.event_ids,
            })
            .await?;

        Ok(invoice)
    }

    /// Stores an invoice entered by hand, computing totals from its items.
    ///
    /// # Returns
    /// - `Ok(Invoice)` - Stored draft invoice
    /// - `Err(AppError::BadRequest)` - No items or an invalid item
    /// - `Err(AppError::NotFound)` - Client missing or outside the actor's company
    /// - `Err(AppError::InternalErr)` - No free invoice number could be drawn
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, actor: &User, dto: CreateInvoiceDto) -> Result<Invoice, AppError> {
        if dto.items.is_empty() {
            return Err(AppError::BadRequest(
                "An invoice needs at least one item".to_string(),
            ));
        }
        for item in &dto.items {
            if item.description.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "Every item needs a description".to_string(),
                ));
            }
            if !item.hours.is_finite()
                || item.hours <= 0.0
                || !item.rate.is_finite()
                || item.rate < 0.0
            {
                return Err(AppError::BadRequest(
                    "Item hours must be positive and rates non-negative".to_string(),
                ));
            }
        }

        if let Some(client_id) = dto.client_id {
            let company_id = actor
                .company_id
                .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;
            ClientService::new(self.db)
                .find_in_company(company_id, client_id)
                .await?;
        }

        let today = Utc::now().date_naive();
        let items: Vec<_> = dto.items.into_iter().map(|item| item.into_item()).collect();
        let totals = InvoiceTotals::from_items(&items);
        let invoice_number = self.random_manual_number(today).await?;

        let invoice = InvoiceRepository::new(self.db)
            .create(CreateInvoiceParams {
                user_id: actor.id,
                client_id: dto.client_id,
                invoice_number,
                date: today,
                due_date: dto.due_date,
                items,
                totals,
                notes: clean_notes(dto.notes),
                event_ids: Vec::new(),
            })
            .await?;

        Ok(invoice)
    }

    /// The actor's invoices, newest first, as DTOs with effective status applied and
    /// filtered by status and search text.
    ///
    /// # Arguments
    /// - `status` - `all`, empty or absent for every status, else one status name
    /// - `search` - Case-insensitive text matched against number, client and notes
    ///
    /// # Returns
    /// - `Ok(Vec<InvoiceDto>)` - Matching invoices
    /// - `Err(AppError::BadRequest)` - Unknown status filter
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        actor: &User,
        status: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<InvoiceDto>, AppError> {
        let status = match status.map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(value) => Some(InvoiceStatus::parse(value).ok_or_else(|| {
                AppError::BadRequest(format!("Invalid status filter '{}'", value))
            })?),
        };

        let invoices = self.effective_dtos(actor, Utc::now().date_naive()).await?;

        Ok(filter_invoices(&invoices, status, search.unwrap_or_default()))
    }

    /// Count and amount per effective status over all of the actor's invoices.
    pub async fn stats(&self, actor: &User) -> Result<InvoiceStatsDto, AppError> {
        let today = Utc::now().date_naive();
        let invoices = self.effective_dtos(actor, today).await?;

        Ok(InvoiceStatsDto::from_invoices(&invoices, today))
    }

    /// # Returns
    /// - `Ok(Invoice)` - The actor's invoice
    /// - `Err(AppError::NotFound)` - No such invoice owned by the actor
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, actor: &User, id: i32) -> Result<Invoice, AppError> {
        InvoiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|invoice| invoice.user_id == actor.id)
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        self.get(actor, id).await?;

        if !InvoiceRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Marks an invoice as sent now. Paid invoices cannot be sent again.
    ///
    /// # Returns
    /// - `Ok(Invoice)` - Updated invoice
    /// - `Err(AppError::BadRequest)` - Invoice is not a draft or already sent
    /// - `Err(AppError::NotFound)` - No such invoice owned by the actor
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn send(&self, actor: &User, id: i32) -> Result<Invoice, AppError> {
        let invoice = self.get(actor, id).await?;
        if !matches!(invoice.status, InvoiceStatus::Draft | InvoiceStatus::Sent) {
            return Err(AppError::BadRequest(
                "Only draft or sent invoices can be sent".to_string(),
            ));
        }

        InvoiceRepository::new(self.db)
            .set_status(id, InvoiceStatus::Sent, Utc::now())
            .await?
            .ok_or_else(not_found)
    }

    pub async fn mark_paid(&self, actor: &User, id: i32) -> Result<Invoice, AppError> {
        self.get(actor, id).await?;

        InvoiceRepository::new(self.db)
            .set_status(id, InvoiceStatus::Paid, Utc::now())
            .await?
            .ok_or_else(not_found)
    }

    /// Printable HTML for one of the actor's invoices.
    ///
    /// # Returns
    /// - `Ok(String)` - Complete HTML page
    /// - `Err(AppError::BadRequest)` - Actor without a company
    /// - `Err(AppError::NotFound)` - No such invoice owned by the actor
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn document(&self, actor: &User, id: i32) -> Result<String, AppError> {
        let invoice = self.get(actor, id).await?;
        let company = self.company_of(actor).await?;
        let client = match invoice.client_id {
            Some(client_id) => ClientRepository::new(self.db).find_by_id(client_id).await?,
            None => None,
        };

        Ok(document::render_invoice(&company, client.as_ref(), &invoice))
    }

    async fn effective_dtos(&self, actor: &User, today: NaiveDate) -> Result<Vec<InvoiceDto>, AppError> {
        let invoices = InvoiceRepository::new(self.db).get_by_user(actor.id).await?;

        Ok(invoices
            .into_iter()
            .map(|invoice| invoice.into_dto(today))
            .collect())
    }

    async fn company_of(&self, actor: &User) -> Result<Company, AppError> {
        let no_company = || AppError::BadRequest("Join or register a company first".to_string());
        let company_id = actor.company_id.ok_or_else(no_company)?;

        CompanyRepository::new(self.db)
            .find_by_id(company_id)
            .await?
            .ok_or_else(no_company)
    }

    async fn free_generated_number(&self, base: &str) -> Result<String, AppError> {
        let invoice_repo = InvoiceRepository::new(self.db);
        if !invoice_repo.number_exists(base).await? {
            return Ok(base.to_string());
        }

        let mut sequence = 2;
        loop {
            let candidate = format!("{}-{}", base, sequence);
            if !invoice_repo.number_exists(&candidate).await? {
                return Ok(candidate);
            }
            sequence += 1;
        }
    }

    async fn random_manual_number(&self, today: NaiveDate) -> Result<String, AppError> {
        let invoice_repo = InvoiceRepository::new(self.db);

        for _ in 0..MANUAL_NUMBER_ATTEMPTS {
            let suffix = rand::rng().random_range(0..1000);
            let candidate = generated_invoice_number(today, suffix);
            if !invoice_repo.number_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(InternalError::InvoiceNumberExhausted(generated_invoice_number(today, 0)).into())
    }
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|notes| notes.trim().to_string())
        .filter(|notes| !notes.is_empty())
}

fn not_found() -> AppError {
    AppError::NotFound("Invoice not found".to_string())
}
