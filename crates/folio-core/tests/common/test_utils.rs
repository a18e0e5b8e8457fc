use std::path::PathBuf;

/// Returns the path to a configuration fixture.
pub fn config_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/configs")
        .join(name)
}

/// Returns the canned repository listing as JSON.
#[allow(clippy::expect_used)]
pub fn repos_fixture() -> serde_json::Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/repos.json");
    let content = std::fs::read_to_string(&path).expect("Failed to read repos fixture");
    serde_json::from_str(&content).expect("Failed to parse repos fixture")
}

/// Builds one listing entry in the shape the GitHub API returns.
pub fn repo_json(id: u64, name: &str, archived: bool, fork: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "full_name": format!("someone/{name}"),
        "description": format!("About {name}"),
        "html_url": format!("https://github.com/someone/{name}"),
        "homepage": null,
        "language": "Rust",
        "archived": archived,
        "fork": fork,
        "updated_at": "2024-05-05T05:05:05Z"
    })
}
