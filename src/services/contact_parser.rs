//! services/contact_parser.rs
//! Convierte el texto de la lista de contactos (`nombre,correo` por línea)
//! en registros "pending".

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::recipient_model::RecipientRecord;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read contact list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Contact list is not valid UTF-8 text (invalid byte at offset {offset})")]
    NotText { offset: usize },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactParser {
    /// Descarta la primera línea no vacía (fila de encabezados).
    pub skip_header: bool,
}

impl ContactParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    /// Las líneas en blanco se ignoran. Una línea sin coma produce un registro con
    /// correo vacío; las líneas mal formadas nunca son error.
    pub fn parse_str(&self, content: &str) -> Vec<RecipientRecord> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .skip(usize::from(self.skip_header))
            .map(parse_line)
            .collect()
    }

    pub fn parse_bytes(&self, content: &[u8]) -> Result<Vec<RecipientRecord>, ParseError> {
        let text = std::str::from_utf8(content).map_err(|e| ParseError::NotText {
            offset: e.valid_up_to(),
        })?;
        Ok(self.parse_str(text))
    }

    pub async fn parse_file(&self, path: &Path) -> Result<Vec<RecipientRecord>, ParseError> {
        let content = tokio::fs::read(path).await.map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_bytes(&content)
    }
}

fn parse_line(line: &str) -> RecipientRecord {
    match line.split_once(',') {
        Some((name, email)) => RecipientRecord::new(name, email),
        None => RecipientRecord::new(line, ""),
    }
}
