use std::sync::Arc;

use reqwest::{Client, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use travessia_core::{
    PassengerSummary, Profile, User, UserId, Vessel, VesselId, VesselRecord, VesselRecordId,
    VesselRecordInput,
};
use web_api::{
    error::{ErrorDiscriminants, ErrorResponse},
    routes::v1::{
        passenger_summary::PassengerSummaryParams,
        report::ReportParams,
        user::UpdateProfile,
        vessel::VesselBody,
        vessel_record::VesselRecordsParams,
    },
};

use super::auth_helper::{ADMIN_EMAIL, AuthHelper};

pub static ADMIN_ID: &str = "admin-user";
pub static GUEST_ID: &str = "guest-user";

#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    pub error: ErrorDiscriminants,
    pub status: StatusCode,
    pub description: String,
}

#[derive(Clone)]
pub struct ApiClient {
    address: String,
    client: Client,
    current_token: Option<String>,
    auth: Arc<AuthHelper>,
}

impl ApiClient {
    pub fn new(address: String, auth: Arc<AuthHelper>) -> ApiClient {
        ApiClient {
            address,
            client: Client::new(),
            current_token: None,
            auth,
        }
    }

    pub fn auth(&self) -> &AuthHelper {
        &self.auth
    }

    pub fn login_admin(&mut self) {
        self.current_token = Some(self.auth.token(ADMIN_ID, Some(ADMIN_EMAIL)));
    }

    pub fn login_guest(&mut self) {
        self.login_as(GUEST_ID, "guest@travessia.test");
    }

    pub fn login_as(&mut self, sub: &str, email: &str) {
        self.current_token = Some(self.auth.token(sub, Some(email)));
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.current_token = Some(token.into());
    }

    pub fn logout(&mut self) {
        self.current_token = None;
    }

    pub async fn do_request<T: Serialize, S: Serialize, R: AsRef<str>>(
        &self,
        path: R,
        method: Method,
        body: T,
        url_parameters: Option<S>,
    ) -> reqwest::Response {
        let path = path.as_ref();
        let mut request = match method {
            Method::GET => self.client.get(self.url_with_params(path, url_parameters)),
            Method::POST => self.client.post(self.url(path)).json(&body),
            Method::DELETE => self.client.delete(self.url(path)),
            Method::PUT => self.client.put(self.url(path)).json(&body),
            _ => unimplemented!(),
        };

        if let Some(token) = &self.current_token {
            request = request.bearer_auth(token);
        }

        request.send().await.unwrap()
    }

    async fn send<T: Serialize, S: Serialize, O: DeserializeOwned, R: AsRef<str>>(
        &self,
        path: R,
        method: Method,
        body: T,
        url_parameters: Option<S>,
    ) -> Result<O, Error> {
        let response = self.do_request(path, method, body, url_parameters).await;
        if response.status().is_success() {
            let text = response.text().await.unwrap();
            match serde_json::from_str::<O>(&text) {
                Ok(v) => Ok(v),
                Err(e) => panic!("failed to deserialize response, err: {e:?}, body: {text}"),
            }
        } else {
            Err(handle_request_failure(response).await)
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.address, route)
    }

    fn url_with_params<T: Serialize>(&self, path: &str, parameters: Option<T>) -> String {
        match parameters {
            Some(p) => {
                let params = serde_qs::to_string(&p).unwrap();
                format!("{}/{}?{}", self.address, path, params)
            }
            None => format!("{}/{}", self.address, path),
        }
    }

    pub async fn get_user(&self) -> Result<User, Error> {
        self.send("user", Method::GET, (), None::<()>).await
    }
    pub async fn get_users(&self) -> Result<Vec<User>, Error> {
        self.send("users", Method::GET, (), None::<()>).await
    }
    pub async fn update_user_profile(&self, id: &UserId, profile: Profile) -> Result<User, Error> {
        self.send(
            format!("users/{id}/profile"),
            Method::PUT,
            UpdateProfile { profile },
            None::<()>,
        )
        .await
    }
    pub async fn get_vessels(&self) -> Result<Vec<Vessel>, Error> {
        self.send("vessels", Method::GET, (), None::<()>).await
    }
    pub async fn create_vessel(&self, name: &str) -> Result<Vessel, Error> {
        self.send(
            "vessels",
            Method::POST,
            VesselBody { name: name.into() },
            None::<()>,
        )
        .await
    }
    pub async fn update_vessel(&self, id: VesselId, name: &str) -> Result<Vessel, Error> {
        self.send(
            format!("vessels/{id}"),
            Method::PUT,
            VesselBody { name: name.into() },
            None::<()>,
        )
        .await
    }
    pub async fn delete_vessel(&self, id: VesselId) -> Result<(), Error> {
        self.send(format!("vessels/{id}"), Method::DELETE, (), None::<()>)
            .await
    }
    pub async fn get_vessel_records(
        &self,
        params: VesselRecordsParams,
    ) -> Result<Vec<VesselRecord>, Error> {
        self.send("vessel_records", Method::GET, (), Some(params))
            .await
    }
    pub async fn create_vessel_record(
        &self,
        input: &VesselRecordInput,
    ) -> Result<VesselRecord, Error> {
        self.send("vessel_records", Method::POST, input, None::<()>)
            .await
    }
    pub async fn update_vessel_record(
        &self,
        id: VesselRecordId,
        input: &VesselRecordInput,
    ) -> Result<VesselRecord, Error> {
        self.send(
            format!("vessel_records/{id}"),
            Method::PUT,
            input,
            None::<()>,
        )
        .await
    }
    pub async fn delete_vessel_record(&self, id: VesselRecordId) -> Result<(), Error> {
        self.send(
            format!("vessel_records/{id}"),
            Method::DELETE,
            (),
            None::<()>,
        )
        .await
    }
    pub async fn get_passenger_summary(
        &self,
        params: PassengerSummaryParams,
    ) -> Result<PassengerSummary, Error> {
        self.send("passenger_summary", Method::GET, (), Some(params))
            .await
    }
    /// Returns the raw response as report bodies are binary.
    pub async fn get_report(&self, format: &str, params: ReportParams) -> reqwest::Response {
        self.do_request(format!("reports/{format}"), Method::GET, (), Some(params))
            .await
    }
}

pub async fn handle_request_failure(response: reqwest::Response) -> Error {
    let status = response.status();
    // Requests actix rejects before reaching a handler, such as unknown routes, do not carry
    // our error body.
    let text = response.text().await.unwrap();
    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(e) => Error {
            error: e.error,
            status,
            description: e.description,
        },
        Err(e) => {
            if status != StatusCode::NOT_FOUND {
                panic!("error response failed to deserialize, body: {text}, error: {e}");
            }
            Error {
                status,
                description: text,
                error: ErrorDiscriminants::Unexpected,
            }
        }
    }
}
