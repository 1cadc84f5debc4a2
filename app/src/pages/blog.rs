use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::Article;

// Articles are published on external platforms; the cards link out instead
// of routing to a detail page.
#[component]
pub fn Index() -> impl IntoView {
    let articles = Resource::new_blocking(|| (), move |_| async { get_articles().await });

    view! {
        <Title text="Blog"/>
        <main class="blog">
            <header class="page-header">
                <h1 class="text-gradient">"Blog"</h1>
                <p>"Writing on machine learning, computer vision, and the craft around them."</p>
            </header>
            {move || match articles.get() {
                None => leptos::either::EitherOf3::A(view! { <p>{"Loading…"}</p> }.into_view()),
                Some(Ok(list)) => leptos::either::EitherOf3::B(view! {
                    <div class="card-grid">
                        {list
                            .into_iter()
                            .map(|article| view! { <ArticleCard article/> })
                            .collect_view()}
                    </div>
                }.into_view()),
                Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                    <p>{format!("Could not load the page: {}", err.to_string())}</p>
                }.into_view()),
            }}
        </main>
    }
}

#[server(GetArticles, "/api", "GetJson", "articles")]
pub async fn get_articles() -> Result<Vec<Article>, ServerFnError> {
    let content = expect_context::<std::sync::Arc<crate::content::Content>>();
    Ok(content.articles().to_vec())
}

#[component]
fn ArticleCard(article: Article) -> impl IntoView {
    view! {
        <article class="card">
            <img src=article.cover_image alt=article.title.clone()/>
            <div class="card-body">
                <span class="card-category">{article.category}</span>
                <h2>{article.title}</h2>
                <p>{article.description}</p>
                <p class="card-meta">
                    <img class="author" src=article.author_image alt=article.author.clone()/>
                    {article.author}
                    " · "
                    {article.date.format("%b %-d, %Y").to_string()}
                    " · "
                    {article.read_time}
                    " min read"
                </p>
                <a href=article.link target="_blank" rel="noopener noreferrer">
                    "Read Article"
                </a>
            </div>
        </article>
    }
}
