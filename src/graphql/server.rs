use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, post_service},
};
use tokio::net::TcpListener;

use super::schema::BlogSchema;
use crate::error::Result;

/// Routes `POST /` to the schema and, when enabled, `GET /` to GraphiQL.
pub fn router(schema: BlogSchema, graphiql: bool) -> Router {
    let service = GraphQL::new(schema);
    if graphiql {
        Router::new().route("/", get(graphiql_page).post_service(service))
    } else {
        Router::new().route("/", post_service(service))
    }
}

async fn graphiql_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Binds `host:port` and serves until Ctrl-C.
pub async fn run_server(schema: BlogSchema, graphiql: bool, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    serve(listener, router(schema, graphiql)).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("GraphQL server ready at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
