use rust_decimal::Decimal;
use tokio::sync::oneshot;

/// Acknowledgement sent back over a command's reply channel.
#[derive(Debug)]
pub struct CommandAck(pub Result<(), String>);

/// A command sent to a single subject's worker.
#[derive(Debug)]
pub enum Command {
    Start {
        min: Decimal,
        max: Decimal,
        reply: Option<oneshot::Sender<CommandAck>>,
    },
    Update {
        min: Decimal,
        max: Decimal,
        reply: Option<oneshot::Sender<CommandAck>>,
    },
    Stop {
        reply: Option<oneshot::Sender<CommandAck>>,
    },
    Shutdown {
        reply: Option<oneshot::Sender<CommandAck>>,
    },
}

/// A command addressed to a specific subject, as carried by the dispatcher.
#[derive(Debug)]
pub struct CommandEnvelope {
    pub subject: crate::Subject,
    pub command: Command,
}
