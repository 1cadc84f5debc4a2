use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A portfolio entry shown in the hero slideshow and the project grids.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
    pub category: String,
    pub cover_image: String,
    pub details: Vec<String>,
}

/// A blog entry. Articles are published elsewhere; `link` points off-site.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(
        deserialize_with = "naive_date_from_str",
        serialize_with = "naive_date_to_str"
    )]
    pub date: chrono::NaiveDate,
    pub read_time: u32,
    pub link: String,
    pub category: String,
    pub author: String,
    pub author_image: String,
    pub cover_image: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: u32,
    pub school: String,
    pub degree: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default)]
    pub courses: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub category: String,
    pub icon: String,
    pub items: Vec<Skill>,
}

/// `level` is a percentage; the loader rejects anything above 100 so the
/// progress bars can trust it.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// `icon` holds SVG path data rendered inline by the views.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub icon: String,
}

fn naive_date_from_str<'de, D>(deserializer: D) -> Result<chrono::NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

fn naive_date_to_str<S>(date: &chrono::NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(date.format("%Y-%m-%d").to_string().as_str())
}
