//! Wallet Model

use serde::{Deserialize, Serialize};

/// Student wallet
///
/// The wallet service also echoes the stored password; it is dropped on
/// deserialization and never kept client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(default)]
    pub id: Option<i64>,
    pub roll_number: String,
    pub student_name: String,
    pub balance: f64,
}
