use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::{env, fs};

use serde_json::{Value, json};
use tempfile::tempdir;

fn cli_bin_path() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_browser-bookmarks") {
        return PathBuf::from(path);
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("workspace root");
    let bin_name = if cfg!(windows) {
        "browser-bookmarks.exe"
    } else {
        "browser-bookmarks"
    };
    let fallback = workspace_root.join("target").join("debug").join(bin_name);
    assert!(
        fallback.exists(),
        "browser-bookmarks binary not found at {}",
        fallback.display()
    );
    fallback
}

fn write_bookmarks(path: &Path, names: &[&str]) {
    let children: Vec<Value> = names
        .iter()
        .map(|name| json!({"type": "url", "name": name, "url": format!("https://example.com/{name}")}))
        .collect();
    let doc = json!({
        "roots": {
            "bookmark_bar": {"type": "folder", "children": children},
            "synced": {"type": "folder", "children": []},
            "other": {"type": "folder", "children": []},
        }
    });
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, doc.to_string()).expect("write bookmarks");
}

fn base_command(home: &Path) -> Command {
    let mut command = Command::new(cli_bin_path());
    command
        .env_remove("BROWSER_BOOKMARKS_EXTRA_PATHS")
        .env_remove("BROWSER_BOOKMARKS_LOG_FILE")
        .env("BROWSER_BOOKMARKS_LOG", "off")
        .args(["--home", home.to_str().expect("home path")]);
    command
}

#[test]
fn query_process_contract_prints_capped_result_list() {
    // Given twelve matching bookmarks under the chromium profile
    // When running `browser-bookmarks query rust`
    // Then the process succeeds and prints at most ten items.
    let home = tempdir().expect("home");
    let names: Vec<String> = (0..12).map(|i| format!("rust-{i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    write_bookmarks(&home.path().join(".config/chromium/Default/Bookmarks"), &refs);

    let output = base_command(home.path())
        .args(["query", "rust"])
        .output()
        .expect("run query");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(value["action"], "render_result_list");
    let items = value["items"].as_array().expect("items array");
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["icon"], "images/chromium.png");
}

#[test]
fn serve_process_contract_answers_host_events_line_by_line() {
    // Given a custom bookmark directory
    // When the host sends preferences and a query on stdin
    // Then stdout carries one JSON response per event.
    let home = tempdir().expect("home");
    let custom = tempdir().expect("custom");
    write_bookmarks(&custom.path().join("Default/Bookmarks"), &["GitHub", "Docs"]);

    let mut child = base_command(home.path())
        .arg("serve")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn serve");

    {
        let mut stdin = child.stdin.take().expect("child stdin");
        let preferences = json!({"event": "preferences", "preferences": {
            "keyword": "bm",
            "additional_browser_paths": custom.path().to_string_lossy(),
        }});
        writeln!(stdin, "{preferences}").expect("write preferences");
        writeln!(stdin, r#"{{"event":"keyword_query","keyword":"bm","argument":"github"}}"#)
            .expect("write query");
    }

    let output = child.wait_with_output().expect("wait serve");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let responses: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("response line"))
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["action"], "preferences_applied");
    assert_eq!(responses[1]["items"][0]["name"], "GitHub");
    assert!(responses[1]["items"][0].get("icon").is_none());
}

#[test]
fn sources_process_contract_lists_nothing_for_empty_home() {
    let home = tempdir().expect("home");
    let output = base_command(home.path())
        .arg("sources")
        .output()
        .expect("run sources");

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(value, json!([]));
}
