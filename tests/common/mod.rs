#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use reqwest::{StatusCode, header::HeaderMap};
use serde_json::{Value, json};
use spotcat::{
    Result,
    management::{Clock, TokenManager},
    spotify::{Credentials, HttpResponse, Transport},
};

pub const TOKEN_URL: &str = "https://accounts.example.test/api/token";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub form: Vec<(String, String)>,
    pub headers: HeaderMap,
}

/// Transport that answers from queued responses and records every request.
///
/// POSTs are answered from the token queue, GETs from the resource queue.
/// Running out of queued responses panics, which makes an unexpected network
/// call fail the test.
#[derive(Default)]
pub struct ScriptedTransport {
    token_responses: Mutex<VecDeque<HttpResponse>>,
    resource_responses: Mutex<VecDeque<HttpResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_token(&self, status: u16, body: Value) -> &Self {
        self.token_responses
            .lock()
            .unwrap()
            .push_back(response(status, body));
        self
    }

    pub fn push_resource(&self, status: u16, body: Value) -> &Self {
        self.resource_responses
            .lock()
            .unwrap()
            .push_back(response(status, body));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn token_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.method == "POST").count()
    }

    fn record(&self, method: &'static str, url: &str, form: &[(&str, &str)], headers: HeaderMap) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            form: form
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            headers,
        });
    }
}

impl Transport for ScriptedTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        headers: HeaderMap,
    ) -> Result<HttpResponse> {
        self.record("POST", url, form, headers);
        let next = self.token_responses.lock().unwrap().pop_front();
        Ok(next.expect("unexpected call to the token endpoint"))
    }

    async fn get(&self, url: &str, headers: HeaderMap) -> Result<HttpResponse> {
        self.record("GET", url, &[], headers);
        let next = self.resource_responses.lock().unwrap().pop_front();
        Ok(next.expect("unexpected resource request"))
    }
}

fn response(status: u16, body: Value) -> HttpResponse {
    HttpResponse::new(
        StatusCode::from_u16(status).expect("valid status code"),
        body,
    )
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(ManualClock {
            now: Mutex::new(now),
        })
    }

    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now += TimeDelta::seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn credentials() -> Credentials {
    Credentials::new(Some("id1".to_string()), Some("secret1".to_string())).unwrap()
}

pub fn token_body(access_token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": expires_in,
    })
}

pub fn manager(
    transport: &Arc<ScriptedTransport>,
    clock: &Arc<ManualClock>,
) -> TokenManager<ScriptedTransport> {
    TokenManager::with_clock(
        Arc::clone(transport),
        credentials(),
        TOKEN_URL,
        Arc::clone(clock) as Arc<dyn Clock>,
    )
}
