use anyhow::Result;
use url::Url;

pub fn is_youtube_url<'a>(url: &'a str) -> Result<bool> {
    let parsed = Url::parse(url)?;

    let is_correct_domain = match parsed.domain() {
        Some("youtube.com") => true,
        Some("www.youtube.com") => true,
        Some("m.youtube.com") => true,
        Some("www.m.youtube.com") => true,
        Some("music.youtube.com") => true,
        Some("youtu.be") => true,
        _ => false
    };

    let first_segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next())
        .map(|segment| segment.to_string());

    let has_query = |name: &str| parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .and_then(|_| Some(true))
        .unwrap_or(false);

    let is_video = first_segment.as_deref() == Some("watch") && has_query("v");

    let is_playlist = first_segment.as_deref() == Some("playlist") && has_query("list");

    let is_short_link = parsed.domain() == Some("youtu.be")
        && first_segment.map(|segment| !segment.is_empty()).unwrap_or(false);

    return Ok(is_correct_domain && (is_video || is_playlist || is_short_link));
}

#[cfg(test)]
mod tests {
    use super::is_youtube_url;

    #[test]
    fn it_requires_youtube_host() {
        let url = "https://google.com/watch?v=nrssnHz0Wz8";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, false);
    }

    #[test]
    fn it_works_without_www() {
        let url = "https://youtube.com/watch?v=nrssnHz0Wz8";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, true);
    }

    #[test]
    fn it_works_with_www() {
        let url = "https://www.youtube.com/watch?v=nrssnHz0Wz8";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, true);
    }

    #[test]
    fn it_works_with_mobile() {
        let url = "https://m.youtube.com/watch?v=nrssnHz0Wz8";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, true);
    }

    #[test]
    fn it_works_with_music() {
        let url = "https://music.youtube.com/watch?v=nrssnHz0Wz8";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, true);
    }

    #[test]
    fn it_accepts_playlist_links() {
        let url = "https://www.youtube.com/playlist?list=PL6gx4Cwl9DGBlmzzFcLgDhKTTfNLfX1IK";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, true);
    }

    #[test]
    fn it_accepts_short_links() {
        let url = "https://youtu.be/nrssnHz0Wz8";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, true);
    }

    #[test]
    fn it_rejects_empty_short_links() {
        let url = "https://youtu.be/";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, false);
    }

    #[test]
    fn it_requires_watch() {
        let url = "http://youtube.com/";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, false);
    }

    #[test]
    fn it_requires_v_query() {
        let url = "http://youtube.com/watch?test=test";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, false);
    }

    #[test]
    fn it_requires_list_query() {
        let url = "https://www.youtube.com/playlist?test=test";
        let result = is_youtube_url(&url).unwrap();
        assert_eq!(result, false);
    }

    #[test]
    fn it_rejects_not_an_url() {
        let result = is_youtube_url("not an url");
        assert!(result.is_err());
    }
}
