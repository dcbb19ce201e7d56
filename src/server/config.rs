use crate::server::{
    error::{config::ConfigError, AppError},
    model::bot::BotProfile,
};

const DEFAULT_PORT: u16 = 3000;

/// Static description of a bot this build knows how to run.
struct KnownBot {
    /// Key used in `ENABLED_BOTS` and as environment variable prefix (upper-cased).
    key: &'static str,
    name: &'static str,
    default_prefix: &'static str,
    color: u32,
}

const KNOWN_BOTS: &[KnownBot] = &[
    KnownBot {
        key: "bumbles",
        name: "Bumbles",
        default_prefix: "!",
        color: 0x5865F2,
    },
    KnownBot {
        key: "discocowboy",
        name: "DiscoCowboy",
        default_prefix: "?",
        color: 0x57F287,
    },
];

/// Configuration of one bot instance.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub profile: BotProfile,
    pub token: String,
    /// Discord application id of the bot, never zero.
    pub client_id: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port of the health server.
    pub port: u16,
    /// Enabled bots in `ENABLED_BOTS` order.
    pub bots: Vec<BotConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable
    /// or `None` when it is unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let bots = enabled_bots(&lookup)?
            .into_iter()
            .map(|bot| bot_config(bot, &lookup))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { port, bots })
    }
}

fn enabled_bots(lookup: &impl Fn(&str) -> Option<String>) -> Result<Vec<&'static KnownBot>, ConfigError> {
    let Some(value) = lookup("ENABLED_BOTS") else {
        return Ok(KNOWN_BOTS.iter().collect());
    };

    let mut bots: Vec<&'static KnownBot> = Vec::new();
    for key in value.split(',').map(|key| key.trim().to_lowercase()) {
        if key.is_empty() {
            continue;
        }

        let bot = KNOWN_BOTS
            .iter()
            .find(|bot| bot.key == key)
            .ok_or_else(|| ConfigError::UnknownBot(key.clone()))?;

        if !bots.iter().any(|enabled| enabled.key == bot.key) {
            bots.push(bot);
        }
    }

    if bots.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: "ENABLED_BOTS".to_string(),
            value,
            reason: "no bot enabled".to_string(),
        });
    }

    Ok(bots)
}

fn bot_config(
    bot: &KnownBot,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<BotConfig, ConfigError> {
    let env_prefix = bot.key.to_uppercase();
    let required = |suffix: &str| {
        let name = format!("{}_{}", env_prefix, suffix);
        lookup(&name)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingEnvVar(name))
    };

    let token = required("TOKEN")?;
    let client_id_var = format!("{}_CLIENT_ID", env_prefix);
    let raw_client_id = required("CLIENT_ID")?;
    let client_id = match raw_client_id.trim().parse::<u64>() {
        Ok(id) if id != 0 => id,
        _ => {
            return Err(ConfigError::InvalidEnvVar {
                name: client_id_var,
                value: raw_client_id,
                reason: "expected a non-zero Discord application id".to_string(),
            })
        }
    };

    let prefix_var = format!("{}_PREFIX", env_prefix);
    let prefix = match lookup(&prefix_var) {
        Some(prefix) if prefix.trim().is_empty() => {
            return Err(ConfigError::InvalidEnvVar {
                name: prefix_var,
                value: prefix,
                reason: "prefix must not be empty".to_string(),
            })
        }
        Some(prefix) => prefix.trim().to_string(),
        None => bot.default_prefix.to_string(),
    };

    Ok(BotConfig {
        profile: BotProfile {
            name: bot.name.to_string(),
            prefix,
            color: bot.color,
        },
        token,
        client_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const CREDENTIALS: &[(&str, &str)] = &[
        ("BUMBLES_TOKEN", "bumbles-token"),
        ("BUMBLES_CLIENT_ID", "111"),
        ("DISCOCOWBOY_TOKEN", "cowboy-token"),
        ("DISCOCOWBOY_CLIENT_ID", "222"),
    ];

    /// Tests loading with only credentials set.
    ///
    /// Expected: both bots with default prefixes and colors, default port
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(CREDENTIALS)).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.bots.len(), 2);
        assert_eq!(config.bots[0].profile.name, "Bumbles");
        assert_eq!(config.bots[0].profile.prefix, "!");
        assert_eq!(config.bots[0].profile.color, 0x5865F2);
        assert_eq!(config.bots[0].token, "bumbles-token");
        assert_eq!(config.bots[1].profile.name, "DiscoCowboy");
        assert_eq!(config.bots[1].profile.prefix, "?");
        assert_eq!(config.bots[0].client_id, 111);
        assert_eq!(config.bots[1].client_id, 222);
    }

    /// Tests enabling a single bot with a custom prefix and port.
    ///
    /// Expected: only that bot, overrides applied, other bot's credentials not needed
    #[test]
    fn applies_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ENABLED_BOTS", " DiscoCowboy ,discocowboy"),
            ("DISCOCOWBOY_TOKEN", "cowboy-token"),
            ("DISCOCOWBOY_CLIENT_ID", "222"),
            ("DISCOCOWBOY_PREFIX", "$"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.bots.len(), 1);
        assert_eq!(config.bots[0].profile.prefix, "$");
    }

    /// Tests an enabled bot without a token.
    ///
    /// Expected: Err(MissingEnvVar) naming the variable
    #[test]
    fn requires_token() {
        let result = Config::from_lookup(lookup(&[
            ("ENABLED_BOTS", "bumbles"),
            ("BUMBLES_CLIENT_ID", "111"),
        ]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "BUMBLES_TOKEN"));
    }

    /// Tests an unknown bot name in ENABLED_BOTS.
    ///
    /// Expected: Err(UnknownBot)
    #[test]
    fn rejects_unknown_bot() {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("ENABLED_BOTS", "bumbles,marvin"));

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(result, Err(ConfigError::UnknownBot(name)) if name == "marvin"));
    }

    /// Tests invalid port, empty prefix, empty bot list and malformed client ids.
    ///
    /// Expected: Err(InvalidEnvVar) for each
    #[test]
    fn rejects_invalid_values() {
        for (name, value) in [
            ("PORT", "eighty"),
            ("BUMBLES_PREFIX", "  "),
            ("ENABLED_BOTS", " , "),
            ("BUMBLES_CLIENT_ID", "bumbles"),
            ("DISCOCOWBOY_CLIENT_ID", "0"),
        ] {
            let mut vars = CREDENTIALS.to_vec();
            vars.push((name, value));

            let result = Config::from_lookup(lookup(&vars));

            assert!(
                matches!(&result, Err(ConfigError::InvalidEnvVar { name: rejected, .. }) if rejected == name),
                "expected {} to be rejected",
                name
            );
        }
    }
}
