//! Typed data-access client for the Gaveta back office.
//!
//! One [`Api`] value per backend: it holds the base URL, the HTTP client and
//! the shared session store. Resource operations live in per-resource
//! `impl Api` blocks under `resources/`; composite records (quotations,
//! doctors, clinic records, cash boxes) are assembled from dependent fetches
//! with best-effort fallback, so `assemble`/list operations always produce a
//! value even when individual dependent fetches fail.

use std::sync::Arc;

pub use error::{ApiError, Result};
pub use model::{
    CashBox, CashBoxStatus, CashReconciliation, ClinicService, CommissionSummary, Consultation,
    ConsultationDetail, ConsultationFull, Doctor, DoctorCommission, DoctorFull, Expense, Movement,
    Product, Quotation, QuotationFull, QuotationPayment, QuotationService, ReportSummary, Sale,
    SaleLine, ServiceCommission, Specialty, User,
};
pub use session::{FileStorage, MemoryStorage, Session, SessionStorage, SessionStore};

mod error;
mod fanout;
mod http;
mod model;
mod resources;
mod session;

#[derive(Clone)]
pub struct Api {
    base_url: String,
    http: reqwest::Client,
    session: Arc<SessionStore>,
}

impl Api {
    /// Return a builder for `Api`.
    pub fn builder() -> ApiBuilder {
        ApiBuilder::default()
    }

    /// The shared session store (read by every request, written by
    /// login/logout and the 401 interceptor).
    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// The builder for `Api`.
#[derive(Default)]
pub struct ApiBuilder {
    base_url: String,
    storage: Option<Box<dyn SessionStorage>>,
    on_unauthorized: Option<Box<dyn Fn() + Send + Sync>>,
}

impl ApiBuilder {
    /// Backend base URL, e.g. `http://127.0.0.1:4000/api`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Where sessions persist between runs. Defaults to in-memory storage.
    pub fn storage(mut self, storage: impl SessionStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Hook fired whenever the backend answers 401 (the login-redirect
    /// collaborator in the browser build).
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Box::new(hook));
        self
    }

    /// Construct `Api`. Any session already present in storage is picked up.
    pub fn build(self) -> Api {
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::default()));
        Api {
            base_url: self.base_url,
            http: reqwest::Client::new(),
            session: Arc::new(SessionStore::new(storage, self.on_unauthorized)),
        }
    }
}
