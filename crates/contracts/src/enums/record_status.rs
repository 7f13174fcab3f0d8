use serde::{Deserialize, Serialize};

/// Статус записи справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RecordStatus::Active => "ACTIVE",
            RecordStatus::Inactive => "INACTIVE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RecordStatus::Active => "启用",
            RecordStatus::Inactive => "停用",
        }
    }

    pub fn all() -> Vec<RecordStatus> {
        vec![RecordStatus::Active, RecordStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Result<Self, String> {
        match code {
            "ACTIVE" => Ok(RecordStatus::Active),
            "INACTIVE" => Ok(RecordStatus::Inactive),
            _ => Err(format!("Unknown record status: {}", code)),
        }
    }
}
