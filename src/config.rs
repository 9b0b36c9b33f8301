use std::{
	net::{IpAddr, Ipv4Addr},
	str::FromStr,
};

use tracing::level_filters::LevelFilter;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{name} is not valid: {value:?}")]
	Invalid { name: &'static str, value: String },
}

/// Application configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub database_max_connections: u32,
	pub host: IpAddr,
	pub port: u16,
	/// Bearer tokens accepted for post and category writes.
	pub admin_tokens: Vec<String>,
	pub log_level: LevelFilter,
	/// Export traces and metrics over OTLP.
	pub otlp: bool,
}

impl Config {
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, Error> {
		Ok(Self {
			database_url: lookup("DATABASE_URL").ok_or(Error::Missing("DATABASE_URL"))?,
			database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
			host: parse_or(&lookup, "HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
			port: parse_or(&lookup, "PORT", 3000)?,
			admin_tokens: lookup("ADMIN_TOKENS")
				.map(|tokens| {
					tokens
						.split(',')
						.map(str::trim)
						.filter(|token| !token.is_empty())
						.map(String::from)
						.collect()
				})
				.unwrap_or_default(),
			log_level: parse_or(&lookup, "LOG_LEVEL", LevelFilter::INFO)?,
			otlp: parse_or(&lookup, "OTLP_ENABLED", false)?,
		})
	}
}

fn parse_or<T: FromStr>(
	lookup: &impl Fn(&'static str) -> Option<String>,
	name: &'static str,
	default: T,
) -> Result<T, Error> {
	match lookup(name) {
		None => Ok(default),
		Some(value) => value
			.trim()
			.parse()
			.map_err(|_| Error::Invalid { name, value }),
	}
}
