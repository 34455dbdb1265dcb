use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Delivery queue a telegram is sent through.
///
/// Has no default variant, so an "undefined" type can never reach the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelegramType {
    Standard,
    Recruitment,
}

impl TelegramType {
    pub fn as_str(self) -> &'static str {
        match self {
            TelegramType::Standard => "standard",
            TelegramType::Recruitment => "recruitment",
        }
    }
}

impl fmt::Display for TelegramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TelegramType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(TelegramType::Standard),
            "recruitment" => Ok(TelegramType::Recruitment),
            "" => Err(Error::Validation("telegram type is undefined".to_string())),
            other => Err(Error::Validation(format!(
                "unknown telegram type {other:?} (expected \"standard\" or \"recruitment\")"
            ))),
        }
    }
}

/// A queued telegram as reported by `GET /telegrams`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telegram {
    pub recipient: String,
    pub id: String,
}

/// Queued telegrams grouped by queue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramList {
    #[serde(default)]
    pub recruitment: Vec<Telegram>,
    #[serde(default)]
    pub standard: Vec<Telegram>,
}

impl TelegramList {
    pub fn len(&self) -> usize {
        self.recruitment.len() + self.standard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTelegram {
    pub sender: String,
    pub recipient: String,
    pub id: String,
    #[serde(rename = "secret_key")]
    pub secret: String,
    pub tg_type: TelegramType,
}

impl NewTelegram {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        id: impl Into<String>,
        secret: impl Into<String>,
        tg_type: TelegramType,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            id: id.into(),
            secret: secret.into(),
            tg_type,
        }
    }
}

/// Removes a queued telegram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTelegram {
    pub recipient: String,
    pub id: String,
}

impl DeleteTelegram {
    pub fn new(recipient: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            id: id.into(),
        }
    }
}
