use std::fs;
use std::path::Path;

use axum::http::StatusCode;
use axum_test::TestServer;
use story_slides::api::{create_router, ErrorBody};
use story_slides::catalog::Catalog;
use story_slides::config::StoryConfig;
use story_slides::models::*;
use tempfile::TempDir;

const STORY_TEXT: &str = "Title: Moon Boat\n\nOne.\n\nTwo.\n\nThree.\n\nFour.";

fn write_story(root: &Path, name: &str, text: &[u8], images: usize) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("Failed to create story folder");
    fs::write(dir.join("story.txt"), text).expect("Failed to write story");
    for k in 1..=images {
        fs::write(dir.join(format!("image_{}.png", k)), format!("png-{}", k))
            .expect("Failed to write image");
    }
}

fn setup() -> (TempDir, TestServer) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    write_story(tmp.path(), "moon_boat", STORY_TEXT.as_bytes(), 5);
    write_story(tmp.path(), "half_done", STORY_TEXT.as_bytes(), 2);

    let catalog = Catalog::new(tmp.path(), StoryConfig::default());
    let app = create_router(catalog, None);
    let server = TestServer::new(app).expect("Failed to create test server");
    (tmp, server)
}

mod health {
    use super::*;

    #[tokio::test]
    async fn returns_ok() {
        let (_tmp, server) = setup();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }
}

mod list_stories {
    use super::*;

    #[tokio::test]
    async fn returns_only_complete_stories() {
        let (_tmp, server) = setup();

        let response = server.get("/api/stories").await;

        response.assert_status_ok();
        let stories: Vec<String> = response.json();
        assert_eq!(stories, vec!["moon_boat"]);
    }

    #[tokio::test]
    async fn picks_up_new_stories_without_restart() {
        let (tmp, server) = setup();
        write_story(tmp.path(), "apple_star", b"Hello.", 5);

        let stories: Vec<String> = server.get("/api/stories").await.json();
        assert_eq!(stories, vec!["apple_star", "moon_boat"]);
    }

    #[tokio::test]
    async fn returns_empty_list_for_missing_root() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let catalog = Catalog::new(tmp.path().join("nope"), StoryConfig::default());
        let server = TestServer::new(create_router(catalog, None)).expect("server");

        let response = server.get("/api/stories").await;

        response.assert_status_ok();
        let stories: Vec<String> = response.json();
        assert!(stories.is_empty());
    }
}

mod get_story {
    use super::*;

    #[tokio::test]
    async fn returns_slides_paired_with_images() {
        let (_tmp, server) = setup();

        let response = server.get("/api/story/moon_boat").await;

        response.assert_status_ok();
        let story: StoryData = response.json();
        assert_eq!(story.name, "moon_boat");
        assert_eq!(story.slides.len(), 5);

        let paragraphs: Vec<&str> = story.slides.iter().map(|s| s.paragraph.as_str()).collect();
        assert_eq!(
            paragraphs,
            vec!["Title: Moon Boat", "One.", "Two.", "Three.", "Four."]
        );
        for (i, slide) in story.slides.iter().enumerate() {
            assert_eq!(slide.image, format!("moon_boat/image_{}.png", i + 1));
            assert!(slide.audio.is_none());
        }
    }

    #[tokio::test]
    async fn serializes_missing_audio_as_null() {
        let (_tmp, server) = setup();

        let body: serde_json::Value = server.get("/api/story/moon_boat").await.json();

        assert!(body["slides"][0]["audio"].is_null());
        assert_eq!(body["slides"][0]["image"], "moon_boat/image_1.png");
    }

    #[tokio::test]
    async fn returns_404_for_incomplete_story() {
        let (_tmp, server) = setup();

        let response = server.get("/api/story/half_done").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Story not found or invalid");
    }

    #[tokio::test]
    async fn returns_404_for_unknown_story() {
        let (_tmp, server) = setup();

        let response = server.get("/api/story/no_such_story").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn returns_404_for_encoded_traversal() {
        let (_tmp, server) = setup();

        let response = server.get("/api/story/..%2Fmoon_boat").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn returns_500_when_story_text_is_unreadable() {
        let (tmp, server) = setup();
        write_story(tmp.path(), "garbled", &[0xff, 0xfe, 0x00, 0xc3], 5);

        let response = server.get("/api/story/garbled").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Could not read story file");
    }
}

mod story_assets {
    use super::*;

    #[tokio::test]
    async fn serves_image_bytes() {
        let (_tmp, server) = setup();

        let response = server.get("/story_assets/moon_boat/image_2.png").await;

        response.assert_status_ok();
        response.assert_text("png-2");
    }

    #[tokio::test]
    async fn returns_404_for_missing_image() {
        let (_tmp, server) = setup();

        let response = server.get("/story_assets/moon_boat/image_9.png").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod static_site {
    use super::*;

    #[tokio::test]
    async fn serves_index_from_static_dir() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let site = TempDir::new().expect("Failed to create temp dir");
        fs::write(site.path().join("index.html"), "<h1>Stories</h1>").expect("write");
        fs::write(site.path().join("script.js"), "console.log(1);").expect("write");

        let catalog = Catalog::new(tmp.path(), StoryConfig::default());
        let app = create_router(catalog, Some(site.path().to_path_buf()));
        let server = TestServer::new(app).expect("server");

        let index = server.get("/").await;
        index.assert_status_ok();
        index.assert_text("<h1>Stories</h1>");

        server.get("/script.js").await.assert_text("console.log(1);");
    }

    #[tokio::test]
    async fn returns_404_without_static_dir() {
        let (_tmp, server) = setup();

        let response = server.get("/index.html").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
