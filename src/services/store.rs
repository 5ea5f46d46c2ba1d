use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A logged expense with server-assigned identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedExpense {
    pub id: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "loggedAt")]
    pub logged_at: DateTime<Utc>,
}

/// Process-local expense log.
///
/// Keeps logged expenses in memory for the lifetime of the process; the
/// recommendation and extraction pipelines never read from it.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: RwLock<Vec<LoggedExpense>>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an expense and return it with its assigned id and timestamp.
    pub async fn insert(
        &self,
        category: String,
        amount: f64,
        description: String,
    ) -> LoggedExpense {
        let expense = LoggedExpense {
            id: Uuid::new_v4().to_string(),
            category,
            amount,
            description,
            logged_at: Utc::now(),
        };

        self.expenses.write().await.push(expense.clone());
        expense
    }

    /// List logged expenses in insertion order, up to `limit` entries.
    pub async fn list(&self, limit: usize) -> Vec<LoggedExpense> {
        self.expenses
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn count(&self) -> usize {
        self.expenses.read().await.len()
    }
}
