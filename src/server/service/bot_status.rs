//! Shared, per-bot connection status.
//!
//! Written by the serenity event handlers and the latency probe, read by the health
//! endpoints. Bots are keyed by name and iterate in name order.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::server::model::bot::BotStatus;

#[derive(Clone, Default)]
pub struct BotStatusRegistry {
    statuses: Arc<RwLock<BTreeMap<String, BotStatus>>>,
}

impl BotStatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bot with an initial, disconnected status.
    ///
    /// Registering an already known bot resets its status.
    pub async fn register(&self, name: &str) {
        self.statuses
            .write()
            .await
            .insert(name.to_string(), BotStatus::default());
    }

    /// Marks the bot as ready and online with the guild count from the `READY` event.
    pub async fn mark_ready(&self, name: &str, guilds: usize) {
        self.update(name, |status| {
            status.ready = true;
            status.online = true;
            status.guilds = guilds;
        })
        .await;
    }

    pub async fn set_online(&self, name: &str, online: bool) {
        self.update(name, |status| status.online = online).await;
    }

    pub async fn set_guilds(&self, name: &str, guilds: usize) {
        self.update(name, |status| status.guilds = guilds).await;
    }

    pub async fn set_latency(&self, name: &str, latency: Option<Duration>) {
        self.update(name, |status| status.latency = latency).await;
    }

    /// Most recent gateway latency of a bot.
    pub async fn latency(&self, name: &str) -> Option<Duration> {
        self.statuses
            .read()
            .await
            .get(name)
            .and_then(|status| status.latency)
    }

    /// Copy of every registered bot's status, ordered by name.
    pub async fn snapshot(&self) -> BTreeMap<String, BotStatus> {
        self.statuses.read().await.clone()
    }

    /// Updates for unregistered bots are dropped.
    async fn update(&self, name: &str, apply: impl FnOnce(&mut BotStatus)) {
        if let Some(status) = self.statuses.write().await.get_mut(name) {
            apply(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the status lifecycle of a single bot.
    ///
    /// Expected: registered offline, ready after mark_ready, offline after disconnect
    #[tokio::test]
    async fn tracks_bot_lifecycle() {
        let registry = BotStatusRegistry::new();
        registry.register("Bumbles").await;

        assert_eq!(registry.snapshot().await["Bumbles"], BotStatus::default());

        registry.mark_ready("Bumbles", 4).await;
        registry.set_latency("Bumbles", Some(Duration::from_millis(42))).await;
        registry.set_online("Bumbles", false).await;

        let snapshot = registry.snapshot().await;
        let status = &snapshot["Bumbles"];
        assert!(status.ready);
        assert!(!status.online);
        assert_eq!(status.guilds, 4);
        assert_eq!(
            registry.latency("Bumbles").await,
            Some(Duration::from_millis(42))
        );
    }

    /// Tests updating a bot that was never registered.
    ///
    /// Expected: update ignored, snapshot stays empty
    #[tokio::test]
    async fn ignores_unregistered_bots() {
        let registry = BotStatusRegistry::new();

        registry.mark_ready("Ghost", 1).await;

        assert!(registry.snapshot().await.is_empty());
        assert_eq!(registry.latency("Ghost").await, None);
    }

    /// Tests snapshot ordering with several bots.
    ///
    /// Expected: bots listed in name order
    #[tokio::test]
    async fn snapshot_is_ordered_by_name() {
        let registry = BotStatusRegistry::new();
        registry.register("DiscoCowboy").await;
        registry.register("Bumbles").await;

        let names: Vec<String> = registry.snapshot().await.into_keys().collect();

        assert_eq!(names, vec!["Bumbles", "DiscoCowboy"]);
    }
}
