pub const FEED_NAME: &str = "feed.json";

use super::metadata::{link, BLOG_PATH, DESCRIPTION, LANGUAGE, TITLE};
use app::context::Context;

pub const URL_PATH: &str = "/blog/feed.json";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<Context>,
) -> axum::Json<json_feed_model::Feed> {
    let mut feed = json_feed_model::Feed::new();
    feed.set_title(TITLE);
    feed.set_home_page_url(link(BLOG_PATH));
    feed.set_feed_url(link(format!("{}/{}", BLOG_PATH, FEED_NAME).as_str()));
    feed.set_description(DESCRIPTION);
    feed.set_language(LANGUAGE);
    let mut items: Vec<json_feed_model::Item> = vec![];
    for article in ctx.content.articles() {
        let mut entry = json_feed_model::Item::new();
        entry.set_id(article.id.to_string());
        entry.set_url(article.link.clone());
        entry.set_title(article.title.clone());
        entry.set_content_text(article.description.clone());
        entry.set_date_published(article.date.format("%Y-%m-%d").to_string());
        entry.set_tags(vec![article.category.clone()]);
        items.push(entry);
    }
    feed.set_items(items);

    axum::Json(feed)
}
