//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::SiteConfig;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<SiteConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<SiteConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for events to keep flowing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Config file change detected, reloading");
                        match load_config(&path) {
                            Ok(new_config) => {
                                let _ = tx.send(new_config);
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "Failed to reload config, keeping current configuration");
                            }
                        }
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn next_named(
        rx: &mut mpsc::UnboundedReceiver<SiteConfig>,
        name: &str,
    ) -> Option<SiteConfig> {
        let wait = async {
            while let Some(config) = rx.recv().await {
                if config.site.name == name {
                    return Some(config);
                }
            }
            None
        };
        tokio::time::timeout(Duration::from_secs(10), wait).await.ok().flatten()
    }

    #[tokio::test]
    async fn file_change_sends_validated_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[site]\nname = \"Uno Digit\"\n").unwrap();

        let (watcher, mut rx) = ConfigWatcher::new(&path);
        let _watcher = watcher.run().unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        std::fs::write(&path, "[site]\nname = \"Uno Labs\"\n[rate_limit]\nburst_size = 3\n").unwrap();
        let config = next_named(&mut rx, "Uno Labs").await.expect("no reload after write");
        assert_eq!(config.rate_limit.burst_size, 3);

        std::fs::write(&path, "[site]\nname = \"Broken\"\nurl = \"ftp://unodigit.com.au\"\n").unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;
        while let Ok(config) = rx.try_recv() {
            assert_ne!(config.site.name, "Broken");
        }
    }
}
