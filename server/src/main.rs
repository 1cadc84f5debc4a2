#![recursion_limit = "256"]

use leptos::prelude::*;
use std::sync::Arc;

use app::content::Content;
use app::context::Context;
use app::mailer::ContactMailer;

mod config;
mod feeds;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/api/{*fn_name}";

#[tokio::main]
async fn main() {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("invalid configuration: {error:#}");
            std::process::exit(1);
        }
    };
    let content = match Content::load(&config.content_dir) {
        Ok(content) => content,
        Err(error) => {
            log::error!("could not load the site content: {error}");
            std::process::exit(1);
        }
    };
    let mailer = match build_mailer(&config.smtp) {
        Ok(mailer) => mailer,
        Err(error) => {
            log::error!("could not set up the contact mailer: {error}");
            std::process::exit(1);
        }
    };

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let ctx = Context {
        leptos_options: leptos_options.clone(),
        content: Arc::new(content),
        mailer,
    };
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || {
            provide_context(ctx.content.clone());
            provide_context(ctx.mailer.clone());
        }
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler)
            .post(leptos_server_fn_axum_handler);
    let json_feed_method_router = axum::routing::get(feeds::json::handler);
    let rss_feed_method_router = axum::routing::get(feeds::rss::handler);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .route(feeds::json::URL_PATH, json_feed_method_router)
        .route(feeds::rss::URL_PATH, rss_feed_method_router)
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        // We could also pass the context to file_and_error_handler
        .fallback(leptos_axum::file_and_error_handler::<Context, _>(app::shell))
        .with_state(ctx);

    // run our app with hyper
    // `axum::Server` is a re-export of `hyper::Server`
    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

fn build_mailer(smtp: &config::SmtpConfig) -> app::mailer::Result<ContactMailer> {
    match &smtp.relay {
        Some(relay) => {
            log::info!("delivering contact messages through {}", relay);
            ContactMailer::relay(relay, &smtp.username, &smtp.password, &smtp.from, &smtp.to)
        }
        None => {
            log::warn!(
                "FOLIO_SMTP_RELAY is not set, delivering to {}:{} without TLS",
                smtp.local_host,
                smtp.local_port,
            );
            ContactMailer::local(&smtp.local_host, smtp.local_port, &smtp.from, &smtp.to)
        }
    }
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || {
        provide_context(ctx.content.clone());
        provide_context(ctx.mailer.clone());
    };
    leptos_axum::handle_server_fns_with_context(additional_context, request)
        .await
}
