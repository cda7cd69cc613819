use regex::Regex;
use std::sync::LazyLock;

/// Whole-string match for the accepted link shapes; group 1 is the video ID.
static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:m\.|www\.)?(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?.+&v=|shorts/))([A-Za-z0-9_-]{11})(?:\S+)?$",
    )
    .expect("video url regex")
});

/// Looser pattern used to spot a link somewhere inside free chat text.
static EMBEDDED_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.|m\.)?(?:youtube\.com/\S+|youtu\.be/\S+)")
        .expect("embedded url regex")
});

/// Parse video ID from a YouTube URL
pub fn parse_id(url: &str) -> Option<String> {
    VIDEO_URL_RE
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Find the first YouTube-looking link embedded in a message body
pub fn find_youtube_url(body: &str) -> Option<&str> {
    EMBEDDED_URL_RE.find(body).map(|m| m.as_str())
}

/// Validate if a string is a valid YouTube video ID (11 characters, alphanumeric + - and _)
pub fn is_valid_video_id(id: &str) -> bool {
    id.len() == 11 && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Construct YouTube watch URL from video ID
pub fn build_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_parse_id_shapes() {
        let urls = [
            "https://youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/v/dQw4w9WgXcQ?version=3",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "m.youtube.com/shorts/dQw4w9WgXcQ?si=abc",
            "https://youtu.be/dQw4w9WgXcQ?si=xyz",
        ];
        for url in urls {
            assert_eq!(parse_id(url).as_deref(), Some(ID), "{url}");
        }
    }

    #[test]
    fn test_parse_id_keeps_dash_and_underscore() {
        assert_eq!(
            parse_id("https://youtu.be/a-b_c-d_e-f").as_deref(),
            Some("a-b_c-d_e-f")
        );
    }

    #[test]
    fn test_parse_id_rejects() {
        let urls = [
            "",
            "not a link",
            "https://vimeo.com/123456789",
            "https://www.youtube.com/watch?v=short",
            "https://www.youtube.com/playlist?list=PL0123456789",
            "https://music.youtube.com/watch?v=dQw4w9WgXcQ",
            "look https://youtu.be/dQw4w9WgXcQ",
        ];
        for url in urls {
            assert_eq!(parse_id(url), None, "{url}");
        }
    }

    #[test]
    fn test_find_youtube_url_in_text() {
        let body = "haha check this https://www.youtube.com/watch?v=dQw4w9WgXcQ lol";
        let found = find_youtube_url(body).unwrap();
        assert_eq!(found, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(parse_id(found).as_deref(), Some(ID));

        assert_eq!(
            find_youtube_url("https://youtu.be/dQw4w9WgXcQ"),
            Some("https://youtu.be/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_find_youtube_url_requires_scheme() {
        assert_eq!(find_youtube_url("youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(find_youtube_url("nothing to see here"), None);
        assert_eq!(find_youtube_url("https://example.com/youtube.com/x"), None);
    }

    #[test]
    fn test_is_valid_video_id() {
        assert!(is_valid_video_id(ID));
        assert!(!is_valid_video_id("dQw4w9WgXc"));
        assert!(!is_valid_video_id("dQw4w9WgXc!"));
    }

    #[test]
    fn test_build_watch_url() {
        assert_eq!(
            build_watch_url(ID),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
