use app::content::{Content, Error};
use std::path::PathBuf;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests/data", name]
        .iter()
        .collect()
}

fn site_content() -> Content {
    let dir: PathBuf = [env!("CARGO_MANIFEST_DIR"), "..", "content"].iter().collect();
    Content::load(&dir).unwrap()
}

#[test]
fn featured_projects_is_the_first_three_of_projects() {
    setup();

    let content = site_content();
    let projects = content.projects();
    assert!(projects.len() >= 3);

    let featured = content.featured_projects();
    assert_eq!(3, featured.len());
    assert_eq!(&projects[..3], featured);
}

#[test]
fn lookups_by_id_hit_and_miss() {
    setup();

    let content = site_content();
    let first = &content.projects()[0];
    assert_eq!(Some(first), content.project_by_id(first.id));
    assert_eq!(None, content.project_by_id(u32::MAX));

    let first = &content.articles()[0];
    assert_eq!(Some(first), content.article_by_id(first.id));
    assert_eq!(None, content.article_by_id(u32::MAX));
}

#[test]
fn loaded_skill_levels_are_percentages() {
    setup();

    let content = site_content();
    assert!(!content.skills().is_empty());
    for category in content.skills() {
        for skill in &category.items {
            assert!(skill.level <= 100, "{} is out of range", skill.name);
        }
    }
}

#[test]
fn rejects_a_skill_level_above_one_hundred() {
    setup();

    let result = Content::load(&fixture("bad-skill"));
    assert!(matches!(result, Err(Error::Invalid { .. })), "{result:?}");
}

#[test]
fn a_missing_document_is_an_io_error() {
    setup();

    let result = Content::load(&fixture("partial"));
    assert!(matches!(result, Err(Error::Io { .. })), "{result:?}");
}

#[test]
fn a_malformed_document_is_a_deserialize_error() {
    setup();

    let result = Content::load(&fixture("malformed"));
    assert!(
        matches!(result, Err(Error::Deserialize { .. })),
        "{result:?}"
    );
}
