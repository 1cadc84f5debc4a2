#[cfg(feature = "ssr")]
pub mod errors;
mod entities;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use entities::{
    Article, Education, Experience, Project, Skill, SkillCategory, SocialLink,
};

/// How many projects the landing page shows before linking to the full grid.
pub const FEATURED_PROJECTS: usize = 3;

/// Every piece of content the site renders, deserialized wholesale at
/// startup. Consumers receive it through context rather than reaching for
/// module-level statics, so after `load` all the accessors are total.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Content {
    projects: Vec<Project>,
    articles: Vec<Article>,
    social_links: Vec<SocialLink>,
    experiences: Vec<Experience>,
    skills: Vec<SkillCategory>,
    education: Vec<Education>,
}

#[cfg(feature = "ssr")]
impl Content {
    pub fn load(dir: &std::path::Path) -> Result<Self> {
        let content = Self {
            projects: read_document::<ProjectsDocument>(dir, "projects.json")?.projects,
            articles: read_document::<ArticlesDocument>(dir, "articles.json")?.articles,
            social_links: read_document::<SocialLinksDocument>(dir, "social-links.json")?
                .social_links,
            experiences: read_document::<ExperiencesDocument>(dir, "experiences.json")?
                .experiences,
            skills: read_document::<SkillsDocument>(dir, "skills.json")?.skills,
            education: read_document::<EducationDocument>(dir, "education.json")?.education,
        };

        for category in &content.skills {
            for skill in &category.items {
                if skill.level > 100 {
                    return Err(Error::Invalid {
                        detail: format!(
                            "skill `{}' in `{}' has level {}, expected 0-100",
                            skill.name, category.category, skill.level,
                        ),
                    });
                }
            }
        }

        log::info!(
            "loaded {} projects, {} articles, {} experiences from {}",
            content.projects.len(),
            content.articles.len(),
            content.experiences.len(),
            dir.display(),
        );

        Ok(content)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The head slice shown on the landing page, in `projects()` order.
    pub fn featured_projects(&self) -> &[Project] {
        let count = self.projects.len().min(FEATURED_PROJECTS);
        &self.projects[..count]
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.skills
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn project_by_id(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn article_by_id(&self, id: u32) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }
}

#[cfg(feature = "ssr")]
fn read_document<T: serde::de::DeserializeOwned>(
    dir: &std::path::Path,
    file_name: &str,
) -> Result<T> {
    let path: std::path::PathBuf = [dir, std::path::Path::new(file_name)].iter().collect();
    let contents = std::fs::read_to_string(&path).map_err(|error| Error::Io {
        error,
        path: path.clone(),
    })?;
    serde_json::from_str(&contents).map_err(|error| Error::Deserialize {
        error: error.to_string(),
        path,
    })
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct ProjectsDocument {
    projects: Vec<Project>,
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct ArticlesDocument {
    articles: Vec<Article>,
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SocialLinksDocument {
    social_links: Vec<SocialLink>,
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct ExperiencesDocument {
    experiences: Vec<Experience>,
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct SkillsDocument {
    skills: Vec<SkillCategory>,
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct EducationDocument {
    education: Vec<Education>,
}
