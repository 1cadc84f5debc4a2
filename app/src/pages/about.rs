use leptos::prelude::*;
use leptos_meta::Title;
use serde::{Deserialize, Serialize};

use crate::content::{Education, Experience, SkillCategory};
use crate::motion::{interpolate, use_scroll_offset};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AboutContent {
    pub experiences: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
}

#[component]
pub fn Index() -> impl IntoView {
    let content = Resource::new_blocking(|| (), move |_| async { get_about_content().await });

    view! {
        <Title text="About"/>
        <main class="about">
            <Intro/>
            {move || match content.get() {
                None => leptos::either::EitherOf3::A(view! { <p>{"Loading…"}</p> }.into_view()),
                Some(Ok(content)) => leptos::either::EitherOf3::B(view! {
                    <ExperienceSection experiences=content.experiences/>
                    <SkillsSection skills=content.skills/>
                    <EducationSection education=content.education/>
                }.into_view()),
                Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                    <p>{format!("Could not load the page: {}", err.to_string())}</p>
                }.into_view()),
            }}
        </main>
    }
}

#[server(GetAboutContent, "/api", "GetJson", "about")]
pub async fn get_about_content() -> Result<AboutContent, ServerFnError> {
    let content = expect_context::<std::sync::Arc<crate::content::Content>>();
    Ok(AboutContent {
        experiences: content.experiences().to_vec(),
        skills: content.skills().to_vec(),
        education: content.education().to_vec(),
    })
}

#[component]
fn Intro() -> impl IntoView {
    let scroll = use_scroll_offset();

    let drift = move || {
        let y = interpolate(&[0.0, 600.0], &[0.0, -150.0], scroll.get());
        let opacity = interpolate(&[0.0, 300.0, 600.0], &[1.0, 0.85, 0.0], scroll.get());
        format!("transform: translateY({y}px); opacity: {opacity}")
    };

    const HIGHLIGHTS: [(&str, &str, &str); 4] = [
        (
            "\u{1f393}",
            "Education",
            "MSc Engineering with Management from King's College London, specializing in \
             robotics and AI. BSc in Computer Engineering with a minor in Applied Data \
             Analytics.",
        ),
        (
            "\u{1f4bb}",
            "Expertise",
            "Experienced in designing and deploying neural network models using PyTorch for \
             NLP, computer vision, and time-series forecasting.",
        ),
        (
            "\u{1f52c}",
            "Research",
            "Developed SatNet: Skeletal Attention Network, a novel deep learning architecture \
             for robot control and articulated robot navigation.",
        ),
        (
            "\u{1f3af}",
            "Goals",
            "Seeking opportunities in AI, ML, or Software Engineering to make real impact.",
        ),
    ];

    view! {
        <section class="about-intro">
            <div class="about-intro-hero" style=drift>
                <img class="portrait" src="/images/profile.png" alt="Mert Arcan"/>
                <h1 class="text-gradient">"About Me"</h1>
                <p>"A passionate software engineer with expertise in AI and machine learning"</p>
            </div>
            <div class="highlight-grid">
                {HIGHLIGHTS
                    .into_iter()
                    .map(|(icon, title, body)| view! {
                        <div class="highlight-card">
                            <span class="highlight-icon">{icon}</span>
                            <h3 class="text-gradient">{title}</h3>
                            <p>{body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection(experiences: Vec<Experience>) -> impl IntoView {
    view! {
        <section class="experience">
            <h2 class="text-gradient">"Experience"</h2>
            <div class="timeline">
                {experiences
                    .into_iter()
                    .map(|experience| view! {
                        <article class="timeline-entry">
                            <span class="period">{experience.period}</span>
                            <h3 class="text-gradient">{experience.title}</h3>
                            <p class="company">{experience.company}</p>
                            <p>{experience.description}</p>
                            <ul class="achievements">
                                {experience
                                    .achievements
                                    .into_iter()
                                    .map(|achievement| view! { <li>{achievement}</li> })
                                    .collect_view()}
                            </ul>
                            <ul class="tech-tags">
                                {experience
                                    .technologies
                                    .into_iter()
                                    .map(|tech| view! { <li>{tech}</li> })
                                    .collect_view()}
                            </ul>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillsSection(skills: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <section class="skills">
            <h2 class="text-gradient">"Skills"</h2>
            <div class="skills-grid">
                {skills
                    .into_iter()
                    .map(|category| view! {
                        <div class="skill-category">
                            <h3>
                                <span class="skill-icon">{category.icon}</span>
                                {category.category}
                            </h3>
                            {category
                                .items
                                .into_iter()
                                .map(|skill| view! {
                                    <div class="skill">
                                        <div class="skill-heading">
                                            <span>{skill.name}</span>
                                            <span>{skill.level}"%"</span>
                                        </div>
                                        <div class="skill-track">
                                            <div
                                                class="skill-bar"
                                                style=format!("width: {}%", skill.level)
                                            />
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn EducationSection(education: Vec<Education>) -> impl IntoView {
    view! {
        <section class="education">
            <h2 class="text-gradient">"Education"</h2>
            <div class="timeline">
                {education
                    .into_iter()
                    .map(|entry| view! {
                        <article class="timeline-entry">
                            <span class="period">{entry.period}</span>
                            <h3 class="text-gradient">{entry.degree}</h3>
                            <p class="company">{entry.school}</p>
                            <p>{entry.description}</p>
                            {entry.achievements.map(|achievements| view! {
                                <ul class="achievements">
                                    {achievements
                                        .into_iter()
                                        .map(|achievement| view! { <li>{achievement}</li> })
                                        .collect_view()}
                                </ul>
                            })}
                            {entry.courses.map(|courses| view! {
                                <ul class="tech-tags">
                                    {courses
                                        .into_iter()
                                        .map(|course| view! { <li>{course}</li> })
                                        .collect_view()}
                                </ul>
                            })}
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
