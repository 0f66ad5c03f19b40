use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use greybot_models::{FunctionCall, Message};

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO‑8601 UTC
    turn_id: Uuid,
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arguments: Option<&'a str>,
}

/// Append-only JSONL transcript of every turn the relay serves.
///
/// Shared between concurrent requests; writes are serialised so lines never interleave.
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Mutex<Option<fs::File>>,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current UTC time.
    pub async fn new(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir).await?;

        let now: DateTime<Utc> = Utc::now();
        let filename = format!("greybot-{}.jsonl", now.format("%Y-%m-%d-%H%M%S"));
        let file_path = log_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;

        Ok(Self {
            file_path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a conversation message.
    pub async fn log_message(&self, turn_id: Uuid, message: &Message) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            turn_id,
            role: message.role.as_str(),
            content: &message.content,
            name: message.name.as_deref(),
            arguments: None,
        };
        self.write_entry(&entry).await;
    }

    /// Append the function call the model selected.
    pub async fn log_function_call(&self, turn_id: Uuid, call: &FunctionCall) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            turn_id,
            role: "assistant",
            content: "",
            name: Some(&call.name),
            arguments: Some(&call.arguments),
        };
        self.write_entry(&entry).await;
    }

    async fn write_entry(&self, entry: &LogEntry<'_>) {
        let json = match serde_json::to_string(entry) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("[Logging error] {}", e);
                return;
            }
        };

        let mut guard = self.file.lock().await;
        if let Some(file) = guard.as_mut() {
            let line = format!("{}\n", json);
            if let Err(e) = file.write_all(line.as_bytes()).await {
                eprintln!("[Logging error] {}", e);
            } else if let Err(e) = file.flush().await {
                eprintln!("[Logging error] {}", e);
            }
        }
    }

    /// Close the logger. Called on graceful shutdown.
    pub async fn shutdown(&self) {
        if let Some(file) = self.file.lock().await.take() {
            // Ensure data is flushed
            let _ = file.sync_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_logs_one_line_per_entry() {
        let temp_dir = TempDir::new().unwrap();
        let logger = ConversationLogger::new(temp_dir.path()).await.unwrap();
        let turn_id = Uuid::new_v4();

        logger.log_message(turn_id, &Message::user("Is 8.8.8.8 malicious?")).await;
        logger
            .log_function_call(
                turn_id,
                &FunctionCall {
                    name: "get_ip_data".to_string(),
                    arguments: r#"{"ip":"8.8.8.8"}"#.to_string(),
                },
            )
            .await;
        logger
            .log_message(turn_id, &Message::function_result("get_ip_data", "{}"))
            .await;
        logger.shutdown().await;

        let contents = std::fs::read_to_string(logger.file_path()).unwrap();
        let lines: Vec<serde_json::Value> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["role"], "user");
        assert_eq!(lines[1]["name"], "get_ip_data");
        assert_eq!(lines[1]["arguments"], r#"{"ip":"8.8.8.8"}"#);
        assert_eq!(lines[2]["role"], "function");
        assert_eq!(lines[2]["turn_id"], turn_id.to_string());
    }

    #[tokio::test]
    async fn test_writes_after_shutdown_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let logger = ConversationLogger::new(temp_dir.path()).await.unwrap();
        logger.shutdown().await;

        logger.log_message(Uuid::new_v4(), &Message::user("late")).await;

        let contents = std::fs::read_to_string(logger.file_path()).unwrap();
        assert!(contents.is_empty());
    }
}
