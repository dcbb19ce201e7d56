use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDto {
    pub error: String,
}

/// Connection status of one bot as reported by the health endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BotStatusDto {
    pub ready: bool,
    pub online: bool,
    pub guilds: usize,
    /// Gateway heartbeat latency in milliseconds, `null` when unknown.
    pub ping: Option<u64>,
}

/// `pass` or `fail`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckDto {
    Pass,
    Fail,
}

impl From<bool> for CheckDto {
    fn from(passed: bool) -> Self {
        if passed {
            CheckDto::Pass
        } else {
            CheckDto::Fail
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthChecksDto {
    pub bots: CheckDto,
    pub latency: CheckDto,
}

/// Body of `GET /health`.
///
/// `reason` is only present when no bot is registered, in which case `checks` and
/// `bots` are omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthDto {
    /// `healthy` or `unhealthy`.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Process uptime in seconds.
    pub uptime: u64,
    /// RFC 3339 time of the check.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecksDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bots: Option<BTreeMap<String, BotStatusDto>>,
}

/// Body of `GET /ready`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReadyDto {
    /// `ready` or `not ready`.
    pub status: String,
    pub bots: BTreeMap<String, BotStatusDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UptimeDto {
    pub seconds: u64,
    /// `{h}h {m}m {s}s`
    pub formatted: String,
}

/// Body of `GET /status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusDto {
    pub service: String,
    pub version: String,
    pub uptime: UptimeDto,
    pub bots: BTreeMap<String, BotStatusDto>,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EndpointsDto {
    pub health: String,
    pub ready: String,
    pub status: String,
}

/// Body of `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfoDto {
    pub service: String,
    pub bots: Vec<String>,
    pub version: String,
    pub endpoints: EndpointsDto,
}
