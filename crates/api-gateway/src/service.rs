//! The company backend as seen by the handlers.

use async_trait::async_trait;
use company_proto::client::CompanyServiceClient;
use company_proto::{
    Company, CompanyId, CreateCompany, Empty, GetAllCompanyRequest, GetAllCompanyResponse,
};
use tonic::{Request, Response, Status};

/// Unary operations of `company_service.CompanyService`.
///
/// Handlers only talk to this trait, so tests can swap the gRPC client for an
/// in-process double.
#[async_trait]
pub trait CompanyService: Send + Sync + 'static {
    /// Create a company and return the stored record.
    async fn create(&self, request: Request<CreateCompany>) -> Result<Response<Company>, Status>;

    /// Fetch one company by id.
    async fn get(&self, request: Request<CompanyId>) -> Result<Response<Company>, Status>;

    /// List companies, optionally filtered by name.
    async fn get_all(
        &self,
        request: Request<GetAllCompanyRequest>,
    ) -> Result<Response<GetAllCompanyResponse>, Status>;

    /// Replace a company's fields.
    async fn update(&self, request: Request<Company>) -> Result<Response<Empty>, Status>;

    /// Delete a company by id.
    async fn delete(&self, request: Request<CompanyId>) -> Result<Response<Empty>, Status>;
}

/// [`CompanyService`] backed by the real gRPC client.
#[derive(Debug, Clone)]
pub struct GrpcCompanyService {
    client: CompanyServiceClient,
}

impl GrpcCompanyService {
    /// Wrap a connected (or lazily connecting) client.
    #[must_use]
    pub fn new(client: CompanyServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompanyService for GrpcCompanyService {
    async fn create(&self, request: Request<CreateCompany>) -> Result<Response<Company>, Status> {
        self.client.clone().create(request).await
    }

    async fn get(&self, request: Request<CompanyId>) -> Result<Response<Company>, Status> {
        self.client.clone().get(request).await
    }

    async fn get_all(
        &self,
        request: Request<GetAllCompanyRequest>,
    ) -> Result<Response<GetAllCompanyResponse>, Status> {
        self.client.clone().get_all(request).await
    }

    async fn update(&self, request: Request<Company>) -> Result<Response<Empty>, Status> {
        self.client.clone().update(request).await
    }

    async fn delete(&self, request: Request<CompanyId>) -> Result<Response<Empty>, Status> {
        self.client.clone().delete(request).await
    }
}
