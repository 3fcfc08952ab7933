// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};
use tokio::{fs, time::sleep};
use tracing::{error, info, instrument, warn};
use url::Url;

use crate::catalog::{parse_records, Record};

const MAX_RETRIES: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Where the catalog CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(Url),
    Local(PathBuf),
}

impl CatalogSource {
    /// `http`/`https` URLs are fetched; anything else is treated as a path.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => CatalogSource::Remote(url),
            _ => CatalogSource::Local(PathBuf::from(raw)),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Remote(url) => write!(f, "{}", url),
            CatalogSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch the raw catalog text.
pub async fn load_text(client: &Client, source: &CatalogSource) -> Result<String> {
    match source {
        CatalogSource::Remote(url) => fetch_remote(client, url).await,
        CatalogSource::Local(path) => read_local(path).await,
    }
}

/// Fetch and parse the catalog. Retrieval failures are logged and yield an
/// empty catalog so the page still renders.
#[instrument(level = "info", skip(client, source), fields(source = %source))]
pub async fn load_records(client: &Client, source: &CatalogSource) -> Vec<Record> {
    match load_text(client, source).await {
        Ok(text) => {
            let records = parse_records(&text);
            info!(records = records.len(), bytes = text.len(), "loaded catalog");
            records
        }
        Err(e) => {
            error!("error loading products from {}: {:#}", source, e);
            Vec::new()
        }
    }
}

async fn read_local(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("reading catalog file {}", path.display()))
}

async fn fetch_remote(client: &Client, url: &Url) -> Result<String> {
    let mut attempt = 0;
    loop {
        attempt += 1;

        let resp = client.get(url.as_str()).send().await;
        match resp {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < MAX_RETRIES => {
                    warn!(attempt, error = %e, "reading catalog body failed, retrying");
                    sleep(RETRY_DELAY).await;
                }
                Err(e) => return Err(e).with_context(|| format!("reading body of {}", url)),
            },
            Ok(resp) => {
                // a bad status will not improve on retry
                return Err(anyhow::anyhow!("HTTP error {} fetching {}", resp.status(), url));
            }
            Err(e) if attempt < MAX_RETRIES => {
                warn!(attempt, error = %e, "catalog request failed, retrying");
                sleep(RETRY_DELAY).await;
            }
            Err(e) => return Err(e).with_context(|| format!("fetching {}", url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,dealshelf=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    #[test]
    fn source_kind_follows_scheme() {
        assert!(matches!(
            CatalogSource::parse("https://example.com/products.csv"),
            CatalogSource::Remote(_)
        ));
        assert_eq!(
            CatalogSource::parse("products.csv"),
            CatalogSource::Local(PathBuf::from("products.csv"))
        );
        assert_eq!(
            CatalogSource::parse("/srv/shop/products.csv"),
            CatalogSource::Local(PathBuf::from("/srv/shop/products.csv"))
        );
        assert!(matches!(
            CatalogSource::parse("file:///tmp/x.csv"),
            CatalogSource::Local(_)
        ));
    }

    #[tokio::test]
    async fn loads_local_file() -> Result<()> {
        init_test_logging();
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "id,name,isNew\n1,\"Lamp, Desk\",true\n\n2,Mug,false\n")?;

        let source = CatalogSource::Local(tmp.path().to_path_buf());
        let records = load_records(&Client::new(), &source).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get_str("name"), Some("Lamp, Desk"));
        assert!(records[0].flag("isNew"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_empty() {
        init_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogSource::Local(dir.path().join("does-not-exist.csv"));

        assert!(load_text(&Client::new(), &source).await.is_err());
        assert!(load_records(&Client::new(), &source).await.is_empty());
    }
}
