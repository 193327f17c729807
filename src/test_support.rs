use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::fetcher::RateSource;

/// Replays scripted responses keyed by the `date` query value and records every URL asked for.
#[derive(Default)]
pub struct ScriptedSource {
    responses: HashMap<String, Value>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn with(mut self, date: &str, response: Value) -> Self {
        self.responses.insert(date.to_string(), response);
        self
    }

    /// Same as `with`, from raw JSON text so numbers keep their exact spelling.
    pub fn with_body(self, date: &str, body: &str) -> Self {
        let response = serde_json::from_str(body).unwrap();
        self.with(date, response)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl RateSource for &ScriptedSource {
    async fn fetch(&self, url: &str) -> Option<Value> {
        self.requested.lock().unwrap().push(url.to_string());
        let date = url.rsplit("date=").next()?;
        self.responses.get(date).cloned()
    }
}
