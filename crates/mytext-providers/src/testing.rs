//! In-memory adapter for tests: replays a script and records every call.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mytext_core::{Credentials, Prompt};

use crate::error::ProviderError;
use crate::traits::ProviderAdapter;

pub(crate) struct ScriptedAdapter {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    /// Returned once the script runs out.
    then: Result<String, ProviderError>,
    calls: Mutex<Vec<Call>>,
}

#[derive(Clone, Debug)]
pub(crate) struct Call {
    pub model: String,
    pub prompt: String,
}

impl ScriptedAdapter {
    pub fn scripted(steps: Vec<Result<String, ProviderError>>, then: Result<String, ProviderError>) -> Self {
        Self {
            script: Mutex::new(steps.into()),
            then,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always_ok(text: &str) -> Self {
        Self::scripted(Vec::new(), Ok(text.to_string()))
    }

    pub fn always_fail(error: ProviderError) -> Self {
        Self::scripted(Vec::new(), Err(error))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn models(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.model).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedAdapter {
    async fn complete(
        &self,
        prompt: &Prompt,
        _credentials: &Credentials,
        model: &str,
        _timeout: Duration,
    ) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(Call {
            model: model.to_string(),
            prompt: prompt.text().to_string(),
        });
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.then.clone())
    }

    fn display_name(&self) -> &str {
        "Scripted"
    }
}
