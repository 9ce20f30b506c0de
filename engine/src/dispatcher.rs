use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use model::{Command, CommandEnvelope, Subject, WorkerState};
use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::{oneshot, Mutex};

use crate::deps::WorkerDeps;
use crate::worker::{self, WorkerHandle};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("worker did not acknowledge command: {0}")]
    NoAck(String),
}

/// Registry of one worker per subject. Finds or lazily spawns a worker on
/// `start`, and serialises every command through that worker's channel.
pub struct Dispatcher {
    deps: Arc<WorkerDeps>,
    workers: Mutex<HashMap<Subject, WorkerHandle>>,
}

impl Dispatcher {
    pub fn new(deps: Arc<WorkerDeps>) -> Self {
        Self {
            deps,
            workers: Mutex::new(HashMap::new()),
        }
    }

    async fn get_or_spawn(&self, subject: Subject) -> tokio::sync::mpsc::Sender<CommandEnvelope> {
        let mut workers = self.workers.lock().await;
        let handle = workers
            .entry(subject)
            .or_insert_with(|| worker::spawn(subject, self.deps.clone()));
        handle.cmd_tx.clone()
    }

    pub async fn start(&self, subject: Subject, min: Decimal, max: Decimal) -> Result<(), EngineError> {
        let tx = self.get_or_spawn(subject).await;
        self.send(&tx, subject, Command::Start { min, max, reply: None }).await
    }

    pub async fn update(&self, subject: Subject, min: Decimal, max: Decimal) -> Result<(), EngineError> {
        let tx = self.get_or_spawn(subject).await;
        self.send(&tx, subject, Command::Update { min, max, reply: None }).await
    }

    pub async fn stop(&self, subject: Subject) -> Result<(), EngineError> {
        let tx = {
            let workers = self.workers.lock().await;
            workers.get(&subject).map(|h| h.cmd_tx.clone())
        };
        let Some(tx) = tx else {
            return Ok(());
        };
        self.send(&tx, subject, Command::Stop { reply: None }).await
    }

    pub async fn shutdown(&self, subject: Subject) -> Result<(), EngineError> {
        let tx = {
            let mut workers = self.workers.lock().await;
            workers.remove(&subject).map(|h| h.cmd_tx)
        };
        let Some(tx) = tx else {
            return Ok(());
        };
        self.send(&tx, subject, Command::Shutdown { reply: None }).await
    }

    async fn send(
        &self,
        tx: &tokio::sync::mpsc::Sender<CommandEnvelope>,
        subject: Subject,
        command: Command,
    ) -> Result<(), EngineError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let command = with_reply(command, reply_tx);
        tx.send(CommandEnvelope { subject, command })
            .await
            .map_err(|e| EngineError::NoAck(e.to_string()))?;
        reply_rx
            .await
            .map_err(|e| EngineError::NoAck(e.to_string()))?;
        Ok(())
    }

    pub async fn is_running(&self, subject: Subject) -> bool {
        let workers = self.workers.lock().await;
        workers
            .get(&subject)
            .map(|h| h.running.load(Ordering::SeqCst))
            .unwrap_or(false)
    }

    pub async fn list(&self) -> Vec<WorkerState> {
        let workers = self.workers.lock().await;
        workers
            .values()
            .map(|h| {
                let (min, max) = *h.current_bounds.lock();
                WorkerState {
                    subject: h.subject,
                    running: h.running.load(Ordering::SeqCst),
                    last_heartbeat: *h.last_heartbeat.lock(),
                    current_min: min,
                    current_max: max,
                }
            })
            .collect()
    }
}

fn with_reply(command: Command, reply_tx: oneshot::Sender<model::CommandAck>) -> Command {
    match command {
        Command::Start { min, max, .. } => Command::Start { min, max, reply: Some(reply_tx) },
        Command::Update { min, max, .. } => Command::Update { min, max, reply: Some(reply_tx) },
        Command::Stop { .. } => Command::Stop { reply: Some(reply_tx) },
        Command::Shutdown { .. } => Command::Shutdown { reply: Some(reply_tx) },
    }
}
