// src/file/mod.rs
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::config::ItemRecord;
use crate::error::LoadError;

pub mod export;

/// Where the catalog JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(PathBuf),
    Url(String),
}

impl CatalogSource {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            CatalogSource::Url(value.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(value))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

/// Reads the whole catalog, in source order, without transforming it.
pub fn load(source: &CatalogSource) -> Result<Vec<ItemRecord>, LoadError> {
    let content = match source {
        CatalogSource::Path(path) => fs::read_to_string(path)?,
        CatalogSource::Url(url) => reqwest::blocking::get(url)?
            .error_for_status()?
            .text()?,
    };

    let items = parse_catalog(&content)?;
    warn_duplicate_ids(&items);
    Ok(items)
}

pub fn parse_catalog(content: &str) -> Result<Vec<ItemRecord>, LoadError> {
    Ok(serde_json::from_str(content)?)
}

fn warn_duplicate_ids(items: &[ItemRecord]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(&item.id) {
            tracing::warn!(id = %item.id, "Duplicate item id in catalog");
        }
    }
}

/// A catalog load running on a background thread.
///
/// Exactly one result is ever delivered; there is no timeout and no retry.
#[derive(Debug)]
pub struct CatalogLoader {
    receiver: Receiver<Result<Vec<ItemRecord>, LoadError>>,
}

impl CatalogLoader {
    /// `on_done` runs on the loader thread after the result is sent, typically
    /// to wake the UI.
    pub fn spawn<F>(source: CatalogSource, on_done: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            tracing::debug!(%source, "Loading catalog");
            let result = load(&source);
            // The receiver is gone if the app was closed or a newer load replaced this one
            if sender.send(result).is_ok() {
                on_done();
            }
        });

        Self { receiver }
    }

    /// The load result once available. A loader whose thread died without
    /// answering reports an I/O error.
    pub fn poll(&self) -> Option<Result<Vec<ItemRecord>, LoadError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "catalog loader stopped without a result",
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ItemId;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const CATALOG: &str = r#"[
        {"id": 1, "nome": "A", "cpu": "i5", "ram": "8GB", "uso_indicado": ["Estudo"]},
        {"id": 2, "nome": "B", "cpu": "i7", "ram": "16GB", "uso_indicado": ["Jogos"]}
    ]"#;

    #[test]
    fn test_source_parse() {
        assert_eq!(
            CatalogSource::parse("https://example.com/data.json"),
            CatalogSource::Url("https://example.com/data.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse(" data/notebooks.json "),
            CatalogSource::Path(PathBuf::from("data/notebooks.json"))
        );
    }

    #[test]
    fn test_parse_keeps_order() {
        let items = parse_catalog(CATALOG).unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![ItemId::Number(1), ItemId::Number(2)]);
        assert_eq!(items[1].cpu().as_deref(), Some("i7"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_catalog(r#"{"id": 1}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_record_without_name_still_loads() {
        use crate::comparison::{self, LABEL_COLUMN};
        use crate::config::Settings;
        use crate::state::Selection;
        use crate::ui::catalog::render;

        let items = parse_catalog(
            r#"[
                {"id": 1, "nome": "A", "cpu": "i5", "uso_indicado": ["Estudo"]},
                {"id": 2, "cpu": "i7", "uso_indicado": ["Jogos"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "");

        let view = render(&items, &Selection::default(), &Settings::default());
        assert_eq!(view.cards[1].name, "");
        assert_eq!(view.cards[1].specs[0], ("Processador", "i7".to_string()));

        let table = comparison::build(&items).unwrap();
        assert_eq!(table.header_row(), vec![LABEL_COLUMN, "A", ""]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notebooks.json");
        fs::write(&path, CATALOG).unwrap();

        let items = load(&CatalogSource::Path(path)).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&CatalogSource::Path(dir.path().join("missing.json")));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_loader_delivers_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notebooks.json");
        fs::write(&path, CATALOG).unwrap();

        let (done_tx, done_rx) = mpsc::channel();
        let loader = CatalogLoader::spawn(CatalogSource::Path(path), move || {
            let _ = done_tx.send(());
        });
        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();

        let items = loader.poll().unwrap().unwrap();
        assert_eq!(items.len(), 2);
    }
}
