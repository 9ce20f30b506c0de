use rust_decimal::Decimal;

use model::Subject;

use crate::error::QueueError;

/// A durable start-analysis command as stored on the queue:
/// `detect-as:<min>:<max>:<subject>`.
#[derive(Debug, Clone, PartialEq)]
pub struct StartRecord {
    pub min: Decimal,
    pub max: Decimal,
    pub subject: Subject,
}

impl StartRecord {
    pub fn format(&self) -> String {
        format!(
            "detect-as:{:.2}:{:.2}:{}",
            self.min, self.max, self.subject
        )
    }

    pub fn parse(raw: &str) -> Result<Self, QueueError> {
        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() != 4 || parts[0] != "detect-as" {
            return Err(QueueError::BadCommand(raw.to_string()));
        }

        let min: Decimal = parts[1]
            .parse()
            .map_err(|_| QueueError::BadCommand(raw.to_string()))?;
        let max: Decimal = parts[2]
            .parse()
            .map_err(|_| QueueError::BadCommand(raw.to_string()))?;
        let subject: Subject = parts[3]
            .parse()
            .map_err(|_| QueueError::BadCommand(raw.to_string()))?;

        Ok(Self { min, max, subject })
    }
}
