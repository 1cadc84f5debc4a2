use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::SocialLink;
use crate::motion::use_scroll_offset;

/// The fixed navigation entries; "active" is an exact match on the path.
const NAV_ITEMS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Projects", "/projects"),
    ("Blog", "/blog"),
];

/// Past this offset the header swaps its transparent style for a blurred
/// backdrop.
const SCROLLED_AFTER: f64 = 50.0;

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);
    let scroll = use_scroll_offset();

    let is_active = move |href: &str| pathname.get() == href;

    view! {
        <nav class="navbar" class:scrolled=move || { scroll.get() > SCROLLED_AFTER }>
            <div class="navbar-inner">
                <a href="/" class="navbar-brand">"MA"</a>
                <ul class="navbar-links">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(name, href)| view! {
                            <li>
                                <a href=href class:active=move || is_active(href)>
                                    {name}
                                </a>
                            </li>
                        })
                        .collect_view()}
                    <li>
                        <a
                            href="/contact"
                            class="navbar-cta"
                            class:active=move || is_active("/contact")
                        >
                            "Get in Touch"
                        </a>
                    </li>
                </ul>
                <button
                    class="navbar-toggle"
                    class:open=move || menu_open.get()
                    aria-label="Toggle the menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span/>
                    <span/>
                    <span/>
                </button>
            </div>
            <ul class="navbar-menu" class:open=move || menu_open.get()>
                {NAV_ITEMS
                    .into_iter()
                    .chain([("Get in Touch", "/contact")])
                    .map(|(name, href)| view! {
                        <li>
                            <a
                                href=href
                                class:active=move || is_active(href)
                                on:click=move |_| menu_open.set(false)
                            >
                                {name}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// An inline icon strip; `icon` carries the SVG path data straight from
/// the content documents.
#[component]
pub fn SocialIcons(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <ul class="social-icons">
            {links
                .into_iter()
                .map(|link| view! {
                    <li>
                        <a href=link.url target="_blank" rel="noopener noreferrer">
                            <span class="sr-only">{link.name}</span>
                            <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                                <path d=link.icon/>
                            </svg>
                        </a>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let links = Resource::new(|| (), |_| async { get_social_links().await });

    view! {
        <footer>
            <Suspense fallback=|| ()>
                {move || {
                    links
                        .get()
                        .and_then(|result| result.ok())
                        .map(|list| view! { <SocialIcons links=list/> })
                }}
            </Suspense>
            <p>
                <a href="#top"><small>{"\u{2191}"} Copyright {"\u{24d2}"}2025, Mert Arcan {"\u{2191}"}</small></a>
            </p>
        </footer>
    }
}

#[server(GetSocialLinks, "/api", "GetJson", "social_links")]
pub async fn get_social_links() -> Result<Vec<SocialLink>, ServerFnError> {
    let content = expect_context::<std::sync::Arc<crate::content::Content>>();
    Ok(content.social_links().to_vec())
}
