use anyhow::Result;
use colored::*;
use std::io::{self, Write};

use crate::commands::Output;
use crate::error::EngineError;

/// Pretty-print `bytes` if they hold JSON. Object keys keep the order the
/// server sent them in.
pub fn pretty_json(bytes: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

pub async fn render(output: Output) -> Result<()> {
    match output {
        Output::Json(body) => {
            let bytes = body.bytes().await?;
            let mut stdout = io::stdout().lock();
            match pretty_json(&bytes) {
                Some(pretty) => writeln!(stdout, "{}", pretty)?,
                None => stdout.write_all(&bytes)?,
            }
            stdout.flush()?;
        }
        Output::Raw(body) => {
            body.copy_to(&mut tokio::io::stdout()).await?;
        }
        Output::Version(info) => {
            println!("{} {}", "Server version:".green(), info.version);
            if let Some(server_type) = info.server_type {
                println!("{} {}", "Server type:".green(), server_type);
            }
        }
        Output::Schema(schema) => {
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Output::Consistency(report) => {
            if report.is_consistent {
                println!("{}", "Metadata is consistent".green());
            } else {
                println!(
                    "{} {} inconsistent object(s)",
                    "Warning:".yellow(),
                    report.inconsistent_objects.len()
                );
                for object in &report.inconsistent_objects {
                    println!(
                        "  {} {}: {}",
                        "-".yellow(),
                        object.object_type,
                        object.reason.as_deref().unwrap_or("no reason given")
                    );
                    println!("    {}", object.definition);
                }
            }
        }
    }
    Ok(())
}

/// Text shown for a failed command. Server error bodies are kept exactly as
/// received so they can be read against the server's own documentation.
pub fn error_report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<EngineError>() {
        Some(EngineError::Status { status, body }) => format!(
            "{} server responded with status {}\n{}",
            "Error:".red(),
            status,
            body
        ),
        _ => format!("{} {:#}", "Error:".red(), err),
    }
}

pub fn display_error(err: &anyhow::Error) {
    eprintln!("{}", error_report(err));
}
