#[derive(Debug, Clone, PartialEq)]
pub struct VideoItem {
    pub title: String,
    pub url: String,
}
