#![warn(clippy::pedantic)]

mod config;
mod entity;
mod error;
mod extract;
mod openapi;
mod ratelimit;
mod route;
mod service;
mod store;
#[cfg(test)]
mod test;
mod trace;

use std::{net::SocketAddr, sync::Arc};

use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{extract::FromRef, Extension};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_governor::GovernorLayer;
use tower_http::{
	compression::CompressionLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};

use crate::{
	config::Config,
	extract::AdminTokens,
	service::{CategoryService, CommentService, PostService},
	store::{PgStore, Store},
};

pub type Database = sqlx::PgPool;
pub type AppState = State;

/// The shared application state.
///
/// Handlers pull out the piece they need with [`axum::extract::State`].
#[derive(Clone, FromRef)]
pub struct State {
	pub posts: PostService,
	pub comments: CommentService,
	pub categories: CategoryService,
	pub admin: AdminTokens,
}

impl State {
	pub fn new(store: Arc<dyn Store>, admin: AdminTokens) -> Self {
		Self {
			posts: PostService::new(store.clone()),
			comments: CommentService::new(store.clone()),
			categories: CategoryService::new(store),
			admin,
		}
	}
}

/// Builds the router with documentation and HTTP middleware, without rate
/// limiting.
pub fn app(state: State) -> axum::Router {
	aide::gen::extract_schemas(true);

	let mut api = OpenApi::default();

	ApiRouter::new()
		.merge(route::routes())
		.nest_api_service("/docs", route::docs::routes())
		.finish_api_with(&mut api, openapi::docs)
		.layer(Extension(Arc::new(api)))
		.layer(
			ServiceBuilder::new()
				.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
				.layer(TraceLayer::new_for_http())
				.layer(PropagateRequestIdLayer::x_request_id())
				.layer(CompressionLayer::new()),
		)
		.with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	dotenvy::dotenv().ok();

	let config = Config::from_env()?;
	let _guard = trace::init_tracing_subscriber(&config)?;

	let database = PgPoolOptions::new()
		.max_connections(config.database_max_connections)
		.connect(&config.database_url)
		.await?;

	sqlx::migrate!().run(&database).await?;

	if config.admin_tokens.is_empty() {
		tracing::warn!("ADMIN_TOKENS is empty, post and category writes will be rejected");
	}

	let state = State::new(
		Arc::new(PgStore::new(database)),
		AdminTokens::new(config.admin_tokens.iter().cloned()),
	);

	let governor = ratelimit::default().ok_or("invalid rate limit quota")?;

	ratelimit::cleanup_old_limits(&[&governor]);

	let app = app(state).layer(GovernorLayer { config: governor });

	let address = SocketAddr::from((config.host, config.port));
	let listener = tokio::net::TcpListener::bind(address).await?;

	tracing::info!("listening on {}", address);

	axum::serve(
		listener,
		app.into_make_service_with_connect_info::<SocketAddr>(),
	)
	.await?;

	Ok(())
}
