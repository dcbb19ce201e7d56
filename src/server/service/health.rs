//! Health, readiness and status reports of the running bots.

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::{
    model::api::{
        BotStatusDto, CheckDto, EndpointsDto, HealthChecksDto, HealthDto, ReadyDto,
        ServiceInfoDto, StatusDto, UptimeDto,
    },
    server::{model::bot::BotStatus, service::bot_status::BotStatusRegistry},
};

pub const SERVICE_NAME: &str = "Burl-Fret Discord Bots";

/// Gateway latency at or above which a bot is considered unhealthy.
pub const LATENCY_THRESHOLD: Duration = Duration::from_millis(1000);

pub struct HealthService<'a> {
    statuses: &'a BotStatusRegistry,
    started_at: DateTime<Utc>,
}

impl<'a> HealthService<'a> {
    /// Creates a new HealthService instance.
    ///
    /// # Arguments
    /// - `statuses` - Status registry of the running bots
    /// - `started_at` - Process start time used for uptime
    pub fn new(statuses: &'a BotStatusRegistry, started_at: DateTime<Utc>) -> Self {
        Self {
            statuses,
            started_at,
        }
    }

    /// Evaluates the health of all bots at `now`.
    ///
    /// # Returns
    /// - `(true, HealthDto)` - Every bot is ready and online, and no known gateway
    ///   latency reaches the threshold
    /// - `(false, HealthDto)` - No bot is registered, or a check failed
    pub async fn health(&self, now: DateTime<Utc>) -> (bool, HealthDto) {
        let uptime = self.uptime_seconds(now);
        let timestamp = format_timestamp(now);
        let statuses = self.statuses.snapshot().await;

        if statuses.is_empty() {
            return (
                false,
                HealthDto {
                    status: "unhealthy".to_string(),
                    reason: Some("No bots registered".to_string()),
                    uptime,
                    timestamp,
                    checks: None,
                    bots: None,
                },
            );
        }

        let bots = to_dtos(&statuses);
        let bots_healthy = bots.values().all(|bot| bot.ready && bot.online);
        let latency_healthy = statuses
            .values()
            .filter_map(|status| status.latency)
            .all(|latency| latency < LATENCY_THRESHOLD);
        let healthy = bots_healthy && latency_healthy;

        let dto = HealthDto {
            status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
            reason: None,
            uptime,
            timestamp,
            checks: Some(HealthChecksDto {
                bots: CheckDto::from(bots_healthy),
                latency: CheckDto::from(latency_healthy),
            }),
            bots: Some(bots),
        };

        (healthy, dto)
    }

    /// Whether at least one bot is registered and all bots have received `READY`.
    pub async fn readiness(&self) -> (bool, ReadyDto) {
        let statuses = self.statuses.snapshot().await;
        let ready = !statuses.is_empty() && statuses.values().all(|status| status.ready);

        let dto = ReadyDto {
            status: if ready { "ready" } else { "not ready" }.to_string(),
            bots: to_dtos(&statuses),
        };

        (ready, dto)
    }

    pub async fn status(&self, now: DateTime<Utc>) -> StatusDto {
        let seconds = self.uptime_seconds(now);
        let statuses = self.statuses.snapshot().await;

        StatusDto {
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime: UptimeDto {
                seconds,
                formatted: format_uptime(seconds),
            },
            bots: to_dtos(&statuses),
            timestamp: format_timestamp(now),
        }
    }

    /// Static description of the service and the configured bots.
    pub fn service_info(bot_names: &[String]) -> ServiceInfoDto {
        ServiceInfoDto {
            service: SERVICE_NAME.to_string(),
            bots: bot_names.to_vec(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: EndpointsDto {
                health: "/health".to_string(),
                ready: "/ready".to_string(),
                status: "/status".to_string(),
            },
        }
    }

    fn uptime_seconds(&self, now: DateTime<Utc>) -> u64 {
        (now - self.started_at).num_seconds().max(0) as u64
    }
}

/// A bot that is not ready reports itself offline without guilds or ping.
fn to_dto(status: &BotStatus) -> BotStatusDto {
    BotStatusDto {
        ready: status.ready,
        online: status.ready && status.online,
        guilds: if status.ready { status.guilds } else { 0 },
        ping: status
            .latency
            .filter(|_| status.ready)
            .map(|latency| latency.as_millis() as u64),
    }
}

fn to_dtos(statuses: &BTreeMap<String, BotStatus>) -> BTreeMap<String, BotStatusDto> {
    statuses
        .iter()
        .map(|(name, status)| (name.clone(), to_dto(status)))
        .collect()
}

fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Formats seconds as `{h}h {m}m {s}s`.
pub fn format_uptime(seconds: u64) -> String {
    format!(
        "{}h {}m {}s",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
