use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::new);

pub struct Config {
    pub port: u16,
    /// RoomとUserレコードの有効期限（秒）。書き込みのたびに巻き直される
    pub entity_ttl_secs: u64,
}

impl Config {
    fn new() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);
        let entity_ttl_secs = env::var("ENTITY_TTL_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(24 * 60 * 60);
        Self {
            port,
            entity_ttl_secs,
        }
    }
}
