#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hilly_rizz::clients::{CompletionProvider, MessageSender};
use hilly_rizz::core::config::AppConfig;
use hilly_rizz::core::models::OutboundMessage;
use hilly_rizz::errors::NotifyError;
use tracing::subscriber::DefaultGuard;

/// Completion provider that returns a fixed candidate list and records prompts.
pub struct FakeCompletions {
    choices: Vec<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeCompletions {
    pub fn with_choices(choices: &[&str]) -> Self {
        Self {
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionProvider for FakeCompletions {
    async fn complete(&self, prompt: &str) -> Result<Vec<String>, NotifyError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.choices.clone())
    }
}

/// Message sender that replays scripted outcomes and records every message.
///
/// Unscripted sends succeed with `SM<n>` identifiers.
pub struct FakeSender {
    script: Mutex<VecDeque<Option<String>>>,
    pub sent: Mutex<Vec<OutboundMessage>>,
}

impl FakeSender {
    pub fn ok() -> Self {
        Self::scripted(&[])
    }

    /// `None` entries succeed; `Some(msg)` entries fail with a Twilio error.
    pub fn scripted(failures: &[Option<&str>]) -> Self {
        Self {
            script: Mutex::new(failures.iter().map(|f| f.map(str::to_string)).collect()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for FakeSender {
    async fn send(&self, message: &OutboundMessage) -> Result<String, NotifyError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        let n = sent.len();
        match self.script.lock().unwrap().pop_front().flatten() {
            Some(msg) => Err(NotifyError::TwilioError(msg)),
            None => Ok(format!("SM{n}")),
        }
    }
}

pub fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

pub fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let vars = env_map(pairs);
    AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

pub const BASE_ENV: [(&str, &str); 6] = [
    ("OPENAI_API_KEY", "sk-test"),
    ("TWILIO_ACCOUNT_SID", "AC123"),
    ("TWILIO_AUTH_TOKEN", "token"),
    ("TWILIO_FROM_PHONE_NUMBER", "+15550000000"),
    ("TWILIO_TO_PHONE_NUMBER_ONE", "+15551111111"),
    ("TWILIO_TO_PHONE_NUMBER_TWO", "+15552222222"),
];

pub fn legacy_config() -> AppConfig {
    config_from(&BASE_ENV)
}

pub fn independent_config() -> AppConfig {
    let mut pairs = BASE_ENV.to_vec();
    pairs.push(("DELIVERY_POLICY", "independent"));
    config_from(&pairs)
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes this thread's events into the capture until the guard drops.
    pub fn set_default(&self) -> DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
