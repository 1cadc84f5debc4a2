use leptos::prelude::*;
use leptos_meta::Title;
use serde::{Deserialize, Serialize};

use crate::components::SocialIcons;
use crate::content::{Article, Project, SocialLink};
use crate::motion::{interpolate, use_scroll_offset};
use crate::slideshow::{Slideshow, CROSS_FADE, SLIDE_INTERVAL};

/// Everything the landing page needs, fetched in one round trip.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct HomeContent {
    pub projects: Vec<Project>,
    pub featured: Vec<Project>,
    pub articles: Vec<Article>,
    pub social_links: Vec<SocialLink>,
}

#[component]
pub fn Index() -> impl IntoView {
    let content = Resource::new_blocking(|| (), move |_| async { get_home_content().await });

    view! {
        <Title text="Home"/>
        <main class="home">
            {move || match content.get() {
                None => leptos::either::EitherOf3::A(view! { <p>{"Loading…"}</p> }.into_view()),
                Some(Ok(content)) => leptos::either::EitherOf3::B(view! {
                    <Hero projects=content.projects social_links=content.social_links/>
                    <FeaturedProjects projects=content.featured/>
                    <ArticlesPreview articles=content.articles/>
                }.into_view()),
                Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                    <p>{format!("Could not load the page: {}", err.to_string())}</p>
                }.into_view()),
            }}
        </main>
    }
}

#[server(GetHomeContent, "/api", "GetJson", "home")]
pub async fn get_home_content() -> Result<HomeContent, ServerFnError> {
    let content = expect_context::<std::sync::Arc<crate::content::Content>>();
    Ok(HomeContent {
        projects: content.projects().to_vec(),
        featured: content.featured_projects().to_vec(),
        articles: content.articles().to_vec(),
        social_links: content.social_links().to_vec(),
    })
}

#[component]
fn Hero(projects: Vec<Project>, social_links: Vec<SocialLink>) -> impl IntoView {
    let scroll = use_scroll_offset();

    // The whole section drifts down and fades out as the visitor scrolls
    // into the rest of the page.
    let drift = move || {
        let y = interpolate(&[0.0, 500.0], &[0.0, 100.0], scroll.get());
        let opacity = interpolate(&[0.0, 300.0], &[1.0, 0.0], scroll.get());
        format!("transform: translateY({y}px); opacity: {opacity}")
    };

    let has_slides = !projects.is_empty();

    view! {
        <section class="hero" style=drift>
            <div class="hero-backdrop">
                <div class="hero-grid-pattern"/>
                <div class="hero-accent top-right"/>
                <div class="hero-accent bottom-left"/>
            </div>
            <div class="hero-inner">
                <div class="hero-copy">
                    <span class="hero-badge">"AI Engineer & ML Enthusiast"</span>
                    <h1>
                        <span class="text-gradient">"Building the Future"</span>
                        <br/>
                        "with Artificial Intelligence"
                    </h1>
                    <p>
                        "Passionate about artificial intelligence and machine learning, \
                         specializing in computer vision and natural language processing."
                    </p>
                    <div class="hero-actions">
                        <a href="/projects" class="btn btn-primary">"View Projects"</a>
                        <a href="/about" class="btn btn-secondary">"About Me"</a>
                        <a href="/contact" class="btn btn-surface">"Get in Touch"</a>
                    </div>
                    <HeroStats/>
                    <SocialIcons links=social_links/>
                </div>
                {has_slides.then(move || view! { <ProjectSlideshow projects/> })}
            </div>
            <div class="hero-scroll-cue" class:hidden=move || { scroll.get() > 100.0 }>
                <span>{"\u{2193}"}</span>
            </div>
        </section>
    }
}

#[component]
fn HeroStats() -> impl IntoView {
    const STATS: [(&str, &str); 4] = [
        ("2+", "Months Experience"),
        ("10+", "Projects"),
        ("5+", "Kaggle Competitions"),
        ("3+", "AI Specializations"),
    ];

    view! {
        <div class="hero-stats">
            {STATS
                .into_iter()
                .map(|(figure, label)| view! {
                    <div class="stat-card">
                        <div class="stat-figure">{figure}</div>
                        <div class="stat-label">{label}</div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Cycles through the deck every five seconds with a cross-fade; the dots
/// jump straight to a slide, pre-empting whatever the timer had pending.
#[component]
fn ProjectSlideshow(projects: Vec<Project>) -> impl IntoView {
    let deck = StoredValue::new(projects);
    let slideshow = RwSignal::new(Slideshow::new(deck.with_value(Vec::len)));
    let fade: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);
    let timer: StoredValue<Option<IntervalHandle>> = StoredValue::new(None);

    // (Re-)arm the landing timeout; a manual selection replaces the
    // pending transition rather than queueing behind it.
    let land = move || {
        if let Some(handle) = fade.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || slideshow.update(Slideshow::complete),
            CROSS_FADE,
        );
        fade.set_value(handle.ok());
    };
    let advance = move || {
        slideshow.update(Slideshow::begin_next);
        land();
    };
    let select = move |index: usize| {
        slideshow.update(|state| state.begin_select(index));
        land();
    };

    Effect::new(move |_| {
        timer.set_value(set_interval_with_handle(advance, SLIDE_INTERVAL).ok());
    });
    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        if let Some(handle) = fade.get_value() {
            handle.clear();
        }
    });

    let current = move || deck.with_value(|slides| slides[slideshow.get().index()].clone());

    view! {
        <div class="slideshow">
            <div class="slide" class:transitioning=move || slideshow.get().is_transitioning()>
                <img src=move || current().cover_image alt=move || current().title/>
                <div class="slide-overlay"/>
                <div class="slide-caption">
                    <h3>{move || current().title}</h3>
                    <p>{move || current().description}</p>
                    <ul class="tech-tags">
                        {move || {
                            current()
                                .technologies
                                .into_iter()
                                .map(|tech| view! { <li>{tech}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
            <div class="slideshow-dots">
                {(0..deck.with_value(Vec::len))
                    .map(|index| view! {
                        <button
                            class:active=move || slideshow.get().index() == index
                            aria-label=format!("Go to slide {}", index + 1)
                            on:click=move |_| select(index)
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FeaturedProjects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section class="featured-projects">
            <h2 class="text-gradient">"Featured Projects"</h2>
            <div class="card-grid">
                {projects
                    .into_iter()
                    .map(|project| view! {
                        <article class="card">
                            <img src=project.cover_image alt=project.title.clone()/>
                            <div class="card-body">
                                <span class="card-category">{project.category}</span>
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <ul class="tech-tags">
                                    {project
                                        .technologies
                                        .into_iter()
                                        .map(|tech| view! { <li>{tech}</li> })
                                        .collect_view()}
                                </ul>
                                <a href=project.github target="_blank" rel="noopener noreferrer">
                                    "View on GitHub"
                                </a>
                            </div>
                        </article>
                    })
                    .collect_view()}
            </div>
            <a href="/projects" class="btn btn-secondary">"View All Projects"</a>
        </section>
    }
}

#[component]
fn ArticlesPreview(articles: Vec<Article>) -> impl IntoView {
    view! {
        <section class="articles-preview">
            <h2 class="text-gradient">"Latest Articles"</h2>
            <div class="card-grid">
                {articles
                    .into_iter()
                    .map(|article| view! {
                        <article class="card">
                            <img src=article.cover_image alt=article.title.clone()/>
                            <div class="card-body">
                                <span class="card-category">{article.category}</span>
                                <h3>{article.title}</h3>
                                <p>{article.description}</p>
                                <p class="card-meta">
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
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
