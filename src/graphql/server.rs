use anyhow::Result;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{self, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::info;

use super::schema::FolioSchema;

/// Serves the schema over HTTP: POST / executes GraphQL, GET / is GraphiQL.
pub async fn run_server(schema: FolioSchema, bind: &str, port: u16) -> Result<()> {
    let app = Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)));

    let listener = TcpListener::bind((bind, port)).await?;
    info!("listening on http://{}:{}", bind, port);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphiql() -> impl IntoResponse {
    response::Html(GraphiQLSource::build().endpoint("/").finish())
}
