const BASE_URL: &str = "https://www.mertarcan.dev";

pub const BLOG_PATH: &str = "/blog";
pub const COPYRIGHT: &str = "Copyright 2025, Mert Arcan";
pub const DESCRIPTION: &str =
    "Articles on machine learning, computer vision, and natural language processing.";
pub const LANGUAGE: &str = "en";
pub const TITLE: &str = "Mert Arcan :: Blog";

pub fn link(path: &str) -> String {
    String::from(BASE_URL) + path
}
