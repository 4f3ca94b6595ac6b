//! Unary gRPC client for `company_service.CompanyService`.

use http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::{GrpcMethod, IntoRequest, Request, Response, Status};
use tonic_prost::ProstCodec;

use crate::{
    Company, CompanyId, CreateCompany, Empty, GetAllCompanyRequest, GetAllCompanyResponse,
};

/// Fully qualified proto service name.
pub const SERVICE_NAME: &str = "company_service.CompanyService";

/// Client for `company_service.CompanyService`.
///
/// Cheap to clone: clones share the underlying [`Channel`].
#[derive(Debug, Clone)]
pub struct CompanyServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl CompanyServiceClient {
    /// Wrap an existing channel.
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    /// `rpc Create(CreateCompany) returns (Company)`
    ///
    /// # Errors
    ///
    /// Returns the backend [`Status`] on failure.
    pub async fn create(
        &mut self,
        request: impl IntoRequest<CreateCompany>,
    ) -> Result<Response<Company>, Status> {
        self.unary(request.into_request(), "Create").await
    }

    /// `rpc Get(CompanyId) returns (Company)`
    ///
    /// # Errors
    ///
    /// Returns the backend [`Status`] on failure.
    pub async fn get(
        &mut self,
        request: impl IntoRequest<CompanyId>,
    ) -> Result<Response<Company>, Status> {
        self.unary(request.into_request(), "Get").await
    }

    /// `rpc GetAll(GetAllCompanyRequest) returns (GetAllCompanyResponse)`
    ///
    /// # Errors
    ///
    /// Returns the backend [`Status`] on failure.
    pub async fn get_all(
        &mut self,
        request: impl IntoRequest<GetAllCompanyRequest>,
    ) -> Result<Response<GetAllCompanyResponse>, Status> {
        self.unary(request.into_request(), "GetAll").await
    }

    /// `rpc Update(Company) returns (Empty)`
    ///
    /// # Errors
    ///
    /// Returns the backend [`Status`] on failure.
    pub async fn update(
        &mut self,
        request: impl IntoRequest<Company>,
    ) -> Result<Response<Empty>, Status> {
        self.unary(request.into_request(), "Update").await
    }

    /// `rpc Delete(CompanyId) returns (Empty)`
    ///
    /// # Errors
    ///
    /// Returns the backend [`Status`] on failure.
    pub async fn delete(
        &mut self,
        request: impl IntoRequest<CompanyId>,
    ) -> Result<Response<Empty>, Status> {
        self.unary(request.into_request(), "Delete").await
    }

    async fn unary<Req, Resp>(
        &mut self,
        mut request: Request<Req>,
        method: &'static str,
    ) -> Result<Response<Resp>, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        self.inner
            .ready()
            .await
            .map_err(|e| Status::unavailable(format!("service was not ready: {e}")))?;

        request
            .extensions_mut()
            .insert(GrpcMethod::new(SERVICE_NAME, method));

        self.inner
            .unary(request, method_path(method), ProstCodec::default())
            .await
    }
}

/// Build the HTTP/2 request path for a method, e.g. `/company_service.CompanyService/Get`.
fn method_path(method: &str) -> PathAndQuery {
    // Service and method names are ASCII identifiers, so this always parses.
    PathAndQuery::try_from(format!("/{SERVICE_NAME}/{method}"))
        .unwrap_or_else(|_| PathAndQuery::from_static("/"))
}
