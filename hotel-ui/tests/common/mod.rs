// Shared helpers for hotel-ui integration tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use hotel_client::{ClientError, ClientResult, HotelApi, HttpClient, ObservedPosition};
use hotel_ui::App;
use hotel_ui::forms::SearchForm;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

type Reply = Result<Value, (u16, String)>;

/// In-memory transport answering canned JSON per path
#[derive(Clone, Default)]
pub struct StubClient {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    calls: Arc<Mutex<Vec<(String, Option<Value>)>>>,
}

impl StubClient {
    pub fn respond(&self, path: &str, body: Value) -> &Self {
        self.replies.lock().unwrap().insert(path.to_string(), Ok(body));
        self
    }

    pub fn fail(&self, path: &str, status: u16, message: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Err((status, message.to_string())));
        self
    }

    /// Requested paths with their JSON bodies, oldest first
    pub fn calls(&self) -> Vec<(String, Option<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    fn reply<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> ClientResult<T> {
        self.calls.lock().unwrap().push((path.to_string(), body));

        let reply = self.replies.lock().unwrap().get(path).cloned();
        match reply {
            Some(Ok(value)) => Ok(serde_json::from_value(value)?),
            Some(Err((404, message))) => Err(ClientError::NotFound(message)),
            Some(Err((400, message))) => Err(ClientError::Validation(message)),
            Some(Err((503, _))) => Err(ClientError::NotUpToDate),
            Some(Err((status, message))) => Err(ClientError::Server { status, message }),
            None => Err(ClientError::NotFound(path.to_string())),
        }
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.reply(path, None)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.reply(path, Some(body))
    }

    fn observed_position(&self) -> Option<ObservedPosition> {
        None
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// App over `stub` with the form prefilled for 2026-10-20
pub fn app(stub: &StubClient) -> App<StubClient> {
    App::new(HotelApi::new(stub.clone()))
        .unwrap()
        .with_form(SearchForm::new(date(2026, 10, 20)))
}
