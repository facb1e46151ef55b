//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use lukulasi_server::extract::DocumentExtractor;
use lukulasi_server::{create_app, AppState, Config};
use lukulasi_core::translate::{Lang, ProviderKind};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub(crate) fn write_content(dir: &Path, id: &str, header: &str, body: &str) {
    let path = dir.join(format!("{}.md", id));
    std::fs::write(path, format!("---\n{}\n---\n{}", header, body)).expect("write content");
}

pub(crate) fn test_config(content_dir: &Path, max_upload_size: usize) -> Config {
    Config {
        state_db_path: content_dir
            .join("state.redb")
            .to_str()
            .expect("state path")
            .to_string(),
        content_dir: content_dir.to_str().expect("content dir").to_string(),
        port: 0,
        max_upload_size,
        max_text_len: 100_000,
        provider: ProviderKind::Offline,
        source_lang: Lang::Fi,
        target_lang: Lang::En,
    }
}

pub(crate) fn test_server_for_config(config: Config) -> TestServer {
    let state = AppState::new(config);
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}

pub(crate) fn test_server_with_extractor(
    config: Config,
    extractor: Arc<dyn DocumentExtractor>,
) -> TestServer {
    let state = AppState::with_extractor(config, extractor);
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}

pub(crate) fn setup_content_server() -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    write_content(
        temp_dir.path(),
        "saunailta",
        "title: Saunailta\ndescription: Perinteinen ilta\ndifficulty: intermediate\ntags: [kulttuuri]",
        "Lauantaina lämmitetään sauna.",
    );
    write_content(
        temp_dir.path(),
        "kissa",
        "title: Kissa\ndifficulty: beginner",
        "Kissa nukkuu matolla.",
    );
    let config = test_config(temp_dir.path(), 10 * 1024 * 1024);
    let server = test_server_for_config(config);
    (server, temp_dir)
}
