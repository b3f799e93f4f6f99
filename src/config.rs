use std::env;

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub bind_address: String,
    pub seed: bool,
}

impl Config {
    pub fn load() -> Result<Config, Error> {
        dotenvy::dotenv().ok();

        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name = env::var("ADSPACE_DB").unwrap_or_else(|_| "adspace".to_string());
        let bind_address =
            env::var("ADSPACE_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let seed = match env::var("ADSPACE_SEED") {
            Ok(value) => parse_flag(&value).ok_or(Error::InvalidConfiguration {
                name: "ADSPACE_SEED",
                value,
            })?,
            Err(_) => false,
        };

        Ok(Config {
            mongodb_uri,
            database_name,
            bind_address,
            seed,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
