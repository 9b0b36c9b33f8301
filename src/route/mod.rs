use aide::axum::ApiRouter;

use crate::{error, service, AppState};

pub mod category;
pub mod comment;
pub mod docs;
pub mod model;
pub mod post;

pub type RouteError = error::RouteError<service::Error>;

pub fn routes() -> ApiRouter<AppState> {
	ApiRouter::new()
		.nest(
			"/api/v1/posts",
			post::routes().merge(comment::routes()),
		)
		.nest("/api/categories", category::routes())
}
