use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::Project;

#[component]
pub fn Index() -> impl IntoView {
    let projects = Resource::new_blocking(|| (), move |_| async { get_projects().await });

    view! {
        <Title text="Projects"/>
        <main class="projects">
            <header class="page-header">
                <h1 class="text-gradient">"Projects"</h1>
                <p>"A selection of the things I have built and competed with."</p>
            </header>
            {move || match projects.get() {
                None => leptos::either::EitherOf3::A(view! { <p>{"Loading…"}</p> }.into_view()),
                Some(Ok(list)) => leptos::either::EitherOf3::B(view! {
                    <div class="project-list">
                        {list
                            .into_iter()
                            .map(|project| view! { <ProjectCard project/> })
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

#[server(GetProjects, "/api", "GetJson", "projects")]
pub async fn get_projects() -> Result<Vec<Project>, ServerFnError> {
    let content = expect_context::<std::sync::Arc<crate::content::Content>>();
    Ok(content.projects().to_vec())
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <img src=project.cover_image alt=project.title.clone()/>
            <div class="card-body">
                <span class="card-category">{project.category}</span>
                <h2 class="text-gradient">{project.title}</h2>
                <p>{project.description}</p>
                <ul class="details">
                    {project
                        .details
                        .into_iter()
                        .map(|detail| view! { <li>{detail}</li> })
                        .collect_view()}
                </ul>
                <ul class="tech-tags">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| view! { <li>{tech}</li> })
                        .collect_view()}
                </ul>
                <div class="card-links">
                    <a href=project.github target="_blank" rel="noopener noreferrer">
                        "View on GitHub"
                    </a>
                    {project.demo.map(|demo| view! {
                        <a href=demo target="_blank" rel="noopener noreferrer">
                            "Live Demo"
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}
