pub mod components;
pub mod contact;
pub mod content;
#[cfg(feature = "ssr")]
pub mod context;
#[cfg(feature = "ssr")]
pub mod mailer;
pub mod motion;
pub mod pages;
pub mod slideshow;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

use crate::components::{Footer, NavBar};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Mert Arcan, AI engineer and machine learning enthusiast. Projects, articles, and notes on computer vision, natural language processing, and the systems around them."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="#top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        // sets the document title
        <Title formatter=|text: String| {
            if text.is_empty() {
                format!("Mert Arcan")
            } else {
                format!("{} - Mert Arcan", text)
            }
        }/>

        <Router>
            <NavBar/>
            // Everything below renders from content fixed at startup, so
            // async rendering fully resolves on the server.
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("about")
                    view=pages::about::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("projects")
                    view=pages::projects::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("blog")
                    view=pages::blog::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("contact")
                    view=pages::contact::Index
                    ssr=SsrMode::Async
                />
            </Routes>
            <Footer/>
        </Router>
    }
}
