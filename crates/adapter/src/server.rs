//! Line server for the adapter
//!
//! Reads commands from any async byte stream and writes replies back, one JSON
//! object per line. A single loop owns the session, so every mutating call is
//! serialized.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::core::GameStore;
use crate::session::Session;
use crate::types::{MAX_TEAMS, MIN_TEAMS};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    pub save_path: PathBuf,
    pub dictionary_path: PathBuf,
    /// Teams for a new game, within `[MIN_TEAMS, MAX_TEAMS]`
    pub teams: usize,
    /// Resume the saved game at startup when one exists
    pub resume: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("wordgrid_game.json"),
            dictionary_path: PathBuf::from("word_list.txt"),
            teams: MIN_TEAMS,
            resume: false,
        }
    }
}

impl AdapterConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup; unset or unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let save_path = non_empty("WORDGRID_SAVE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.save_path);
        let dictionary_path = non_empty("WORDGRID_DICTIONARY")
            .map(PathBuf::from)
            .unwrap_or(defaults.dictionary_path);
        let teams = non_empty("WORDGRID_TEAMS")
            .and_then(|s| s.parse::<usize>().ok())
            .map(|n| n.clamp(MIN_TEAMS, MAX_TEAMS))
            .unwrap_or(defaults.teams);
        let resume = non_empty("WORDGRID_RESUME")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.resume);

        Self {
            save_path,
            dictionary_path,
            teams,
            resume,
        }
    }
}

/// Serve `session` until `reader` reaches end of input
pub async fn run<S, R, W>(session: &mut Session<S>, reader: R, mut writer: W) -> Result<()>
where
    S: GameStore + Clone,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("read command")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        for reply in session.handle_line(line) {
            let mut out = serde_json::to_string(&reply)?;
            out.push('\n');
            writer
                .write_all(out.as_bytes())
                .await
                .context("write reply")?;
        }
        writer.flush().await?;
    }
    debug!("input closed");
    Ok(())
}

/// Serve `session` over stdin/stdout
pub async fn serve_stdio<S: GameStore + Clone>(session: &mut Session<S>) -> Result<()> {
    info!("serving on stdio");
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run(session, stdin, stdout).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use crate::core::{Dictionary, MemoryStore};
    use crate::protocol::ServerMessage;

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("WORDGRID_SAVE_PATH", "/tmp/save.json"),
            ("WORDGRID_TEAMS", "9"),
            ("WORDGRID_RESUME", "TRUE"),
        ]
        .into_iter()
        .collect();
        let config = AdapterConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.save_path, PathBuf::from("/tmp/save.json"));
        assert_eq!(config.dictionary_path, PathBuf::from("word_list.txt"));
        assert_eq!(config.teams, MAX_TEAMS);
        assert!(config.resume);
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(AdapterConfig::from_lookup(|_| None), AdapterConfig::default());

        let config = AdapterConfig::from_lookup(|k| {
            (k == "WORDGRID_TEAMS").then(|| "lots".to_string())
        });
        assert_eq!(config.teams, 2);
    }

    #[tokio::test]
    async fn test_run_answers_each_line() {
        let mut session = Session::new(
            Arc::new(Dictionary::from_words(["CAT"])),
            MemoryStore::new(),
        );
        let input: &[u8] = b"{\"type\":\"new_game\",\"seq\":1}\n\n{\"type\":\"observe\",\"seq\":2}\n";
        let mut output = Vec::new();

        run(&mut session, input, &mut output).await.unwrap();

        let replies: Vec<ServerMessage> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0], ServerMessage::ack(Some(1)));
        match &replies[1] {
            ServerMessage::Observation(obs) => {
                assert_eq!(obs.seq, Some(2));
                assert_eq!(obs.record.scores, vec![0, 0]);
                assert!(obs.placed.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
