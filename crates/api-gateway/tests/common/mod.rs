//! Shared fixtures: an in-memory company backend and request helpers.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use api_gateway::service::CompanyService;
use api_gateway::{build_router, AppState, Config};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use clap::Parser;
use company_proto::{
    Company, CompanyId, CreateCompany, Empty, GetAllCompanyRequest, GetAllCompanyResponse,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tonic::{Response, Status};
use tower::ServiceExt;

/// In-process [`CompanyService`] that stores companies in a map and counts calls.
///
/// When `fail_with` is set every call returns that status instead.
#[derive(Default)]
pub struct FakeCompanies {
    store: Mutex<BTreeMap<String, Company>>,
    calls: AtomicUsize,
    last_list: Mutex<Option<GetAllCompanyRequest>>,
    last_id: Mutex<Option<String>>,
    fail_with: Option<(tonic::Code, String)>,
}

impl FakeCompanies {
    pub fn failing(code: tonic::Code, message: &str) -> Self {
        Self {
            fail_with: Some((code, message.to_owned())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_list(&self) -> Option<GetAllCompanyRequest> {
        self.last_list.lock().unwrap().clone()
    }

    /// Company id carried by the most recent get, update or delete.
    pub fn last_id(&self) -> Option<String> {
        self.last_id.lock().unwrap().clone()
    }

    fn remember(&self, id: &str) {
        *self.last_id.lock().unwrap() = Some(id.to_owned());
    }

    fn enter(&self) -> Result<(), Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some((code, message)) => Err(Status::new(*code, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CompanyService for FakeCompanies {
    async fn create(
        &self,
        request: tonic::Request<CreateCompany>,
    ) -> Result<Response<Company>, Status> {
        self.enter()?;
        let CreateCompany { name } = request.into_inner();
        let mut store = self.store.lock().unwrap();
        if store.values().any(|c| c.name == name) {
            return Err(Status::already_exists(format!("company {name:?} exists")));
        }
        let company = Company {
            id: uuid::Uuid::new_v4().to_string(),
            name,
        };
        store.insert(company.id.clone(), company.clone());
        Ok(Response::new(company))
    }

    async fn get(&self, request: tonic::Request<CompanyId>) -> Result<Response<Company>, Status> {
        self.enter()?;
        let id = request.into_inner().id;
        self.remember(&id);
        self.store
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .map(Response::new)
            .ok_or_else(|| Status::not_found(format!("no company with id {id}")))
    }

    async fn get_all(
        &self,
        request: tonic::Request<GetAllCompanyRequest>,
    ) -> Result<Response<GetAllCompanyResponse>, Status> {
        self.enter()?;
        let req = request.into_inner();
        *self.last_list.lock().unwrap() = Some(req.clone());

        let store = self.store.lock().unwrap();
        let matching: Vec<Company> = store
            .values()
            .filter(|c| req.name.is_empty() || c.name.contains(&req.name))
            .cloned()
            .collect();
        let count = u32::try_from(matching.len()).unwrap();
        let companies = matching
            .into_iter()
            .skip(req.offset as usize)
            .take(req.limit as usize)
            .collect();
        Ok(Response::new(GetAllCompanyResponse { companies, count }))
    }

    async fn update(&self, request: tonic::Request<Company>) -> Result<Response<Empty>, Status> {
        self.enter()?;
        let company = request.into_inner();
        self.remember(&company.id);
        let mut store = self.store.lock().unwrap();
        match store.get_mut(&company.id) {
            Some(existing) => {
                existing.name = company.name;
                Ok(Response::new(Empty {}))
            }
            None => Err(Status::not_found("no such company")),
        }
    }

    async fn delete(&self, request: tonic::Request<CompanyId>) -> Result<Response<Empty>, Status> {
        self.enter()?;
        let id = request.into_inner().id;
        self.remember(&id);
        match self.store.lock().unwrap().remove(&id) {
            Some(_) => Ok(Response::new(Empty {})),
            None => Err(Status::not_found("no such company")),
        }
    }
}

/// Config with fixed values so the test run does not depend on the environment.
pub fn config(environment: &str) -> Config {
    Config::try_parse_from([
        "api-gateway",
        "--environment",
        environment,
        "--log-level",
        "info",
        "--log-format",
        "pretty",
        "--http-port",
        ":8090",
        "--company-service-host",
        "localhost",
        "--company-service-port",
        "5004",
    ])
    .unwrap()
}

pub fn app(backend: &Arc<FakeCompanies>) -> Router {
    app_in("develop", backend)
}

pub fn app_in(environment: &str, backend: &Arc<FakeCompanies>) -> Router {
    let companies: Arc<dyn CompanyService> = backend.clone();
    build_router(AppState {
        config: Arc::new(config(environment)),
        companies,
    })
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}
