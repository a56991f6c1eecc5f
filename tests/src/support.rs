#![cfg(test)]
//! Fakes standing in for the orchestrator and the HTTP probes.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use deckhand_common::error::StackError;
use deckhand_common::model::{IpContext, ServiceStatus};
use deckhand_core::orchestrator::Orchestrator;
use deckhand_core::probe::EgressProbe;

/// Orchestrator fed with a scripted sequence of service counts. The last
/// entry repeats once the script runs out.
pub struct FakeOrchestrator {
    script: Vec<ServiceStatus>,
    polls: Mutex<usize>,
}

impl FakeOrchestrator {
    pub fn with_script(script: Vec<ServiceStatus>) -> Self {
        assert!(!script.is_empty(), "the script needs at least one entry");
        Self {
            script,
            polls: Mutex::new(0),
        }
    }

    /// How many times the poller asked for counts.
    pub fn polls(&self) -> usize {
        *self.polls.lock().unwrap()
    }
}

#[async_trait]
impl Orchestrator for FakeOrchestrator {
    async fn list_services(&self) -> Result<ServiceStatus, StackError> {
        let mut polls = self.polls.lock().unwrap();
        let status = self.script[(*polls).min(self.script.len() - 1)];
        *polls += 1;
        Ok(status)
    }

    async fn start_all(&self) -> Result<(), StackError> {
        Ok(())
    }

    async fn stop_all(&self) -> Result<(), StackError> {
        Ok(())
    }

    async fn teardown_all(&self) -> Result<(), StackError> {
        Ok(())
    }

    async fn exec_in(&self, _container: &str, _argv: &[&str]) -> Result<String, StackError> {
        Err(StackError::Orchestrator {
            command: "exec".to_string(),
            detail: "not scripted".to_string(),
        })
    }
}

/// What a scripted endpoint answers.
#[derive(Clone)]
pub enum Answer {
    Body(&'static str),
    Fail(&'static str),
}

/// Probe answering from a per-endpoint script, with a fallback for
/// endpoints the test does not care about. Every fetch is logged so
/// tests can assert on short-circuiting.
pub struct ScriptedProbe {
    context: IpContext,
    answers: HashMap<&'static str, Answer>,
    fallback: Answer,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    pub fn new(context: IpContext, fallback: Answer) -> Self {
        Self {
            context,
            answers: HashMap::new(),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn answer(mut self, endpoint: &'static str, answer: Answer) -> Self {
        self.answers.insert(endpoint, answer);
        self
    }

    /// Endpoints fetched, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EgressProbe for ScriptedProbe {
    fn context(&self) -> IpContext {
        self.context
    }

    async fn fetch(&self, endpoint: &str, _timeout: Duration) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(endpoint.to_string());

        match self.answers.get(endpoint).unwrap_or(&self.fallback) {
            Answer::Body(body) => Ok((*body).to_string()),
            Answer::Fail(reason) => Err(anyhow::anyhow!("{reason}")),
        }
    }
}
