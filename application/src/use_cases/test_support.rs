//! Scripted model client shared by use case tests

use crate::ports::model_client::{ModelClient, ModelClientError};
use async_trait::async_trait;
use heartmend_domain::{AgentIdentity, ImageAttachment, TeamLeader};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub system_instruction: String,
    pub user_text: String,
    pub image_mime: Option<String>,
    /// Specialist calls that had finished when this call started
    pub finished_before: usize,
}

impl RecordedCall {
    pub fn is_leader(&self) -> bool {
        self.system_instruction == TeamLeader::system_instruction()
    }
}

type Reply = Result<String, ModelClientError>;
type Responder = dyn Fn(Option<AgentIdentity>, &str) -> Reply + Send + Sync;

pub(crate) struct ScriptedClient {
    responder: Box<Responder>,
    calls: Mutex<Vec<RecordedCall>>,
    finished: AtomicUsize,
}

impl ScriptedClient {
    /// `responder` receives the specialist identity (`None` for the team
    /// leader) and the user text.
    pub fn new(
        responder: impl Fn(Option<AgentIdentity>, &str) -> Reply + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
            finished: AtomicUsize::new(0),
        }
    }

    pub fn always_ok() -> Self {
        Self::new(|identity, _| Ok(advice_for(identity)))
    }

    pub fn always_failing() -> Self {
        Self::new(|_, _| Err(transport("403 Forbidden")))
    }

    pub fn failing_for(failing: AgentIdentity) -> Self {
        Self::new(move |identity, _| match identity {
            Some(identity) if identity == failing => Err(transport("500 Internal Server Error")),
            other => Ok(advice_for(other)),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn leader_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.is_leader())
            .collect()
    }
}

pub(crate) fn transport(message: &str) -> ModelClientError {
    ModelClientError::Transport(message.to_string())
}

fn advice_for(identity: Option<AgentIdentity>) -> String {
    match identity {
        Some(identity) => format!("advice from {}", identity.as_str()),
        None => "team summary".to_string(),
    }
}

fn identity_for(system_instruction: &str) -> Option<AgentIdentity> {
    AgentIdentity::ALL
        .into_iter()
        .find(|id| id.system_instruction() == system_instruction)
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<String, ModelClientError> {
        let identity = identity_for(system_instruction);
        if identity.is_some() {
            tokio::task::yield_now().await;
        }

        self.calls.lock().unwrap().push(RecordedCall {
            system_instruction: system_instruction.to_string(),
            user_text: user_text.to_string(),
            image_mime: image.map(|i| i.mime_type().to_string()),
            finished_before: self.finished.load(Ordering::SeqCst),
        });

        let result = (self.responder)(identity, user_text);
        if identity.is_some() {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
        result
    }
}
