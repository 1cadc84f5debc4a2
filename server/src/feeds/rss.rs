use axum::response::IntoResponse;

use super::metadata::{link, BLOG_PATH, COPYRIGHT, DESCRIPTION, LANGUAGE, TITLE};
use app::context::Context;

pub const URL_PATH: &str = "/blog/feed.rss";

// Articles live on external platforms, so each entry links straight to its
// canonical URL. Content accessors are total; nothing here can fail.
pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<Context>,
) -> axum::response::Response {
    let items = ctx
        .content
        .articles()
        .iter()
        .map(|article| {
            let mut entry = rss::Item::default();
            entry.set_title(article.title.clone());
            entry.set_link(article.link.clone());
            entry.set_pub_date(article.date.format("%Y-%m-%d").to_string());
            entry.set_categories(vec![rss::Category {
                name: article.category.clone(),
                domain: None,
            }]);
            entry.set_description(article.description.clone());
            entry
        })
        .collect::<Vec<rss::Item>>();

    let channel = rss::ChannelBuilder::default()
        .title(TITLE)
        .link(link(BLOG_PATH))
        .description(DESCRIPTION)
        .language(String::from(LANGUAGE))
        .copyright(String::from(COPYRIGHT))
        .items(items)
        .build();
    (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/rss+xml")],
        channel.to_string(),
    )
        .into_response()
}
