use std::path::Path;
use std::process::{Command, Output};

fn roundrect(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roundrect"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("run roundrect")
}

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, "[output]\nobject_name = \"Card\"\n").expect("write config");
    path
}

#[test]
fn test_mesh_obj_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path());
    let out = dir.path().join("out").join("card.obj");

    let output = roundrect(
        &config,
        &[
            "mesh",
            "--from",
            "-1,1",
            "--to",
            "1,-1",
            "--rounding",
            "0.5",
            "--resolutions",
            "2",
            "--polygon-mode",
            "quad",
            "-o",
            out.to_str().expect("utf-8 path"),
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let obj = std::fs::read_to_string(&out).expect("read obj");
    assert!(obj.contains("o Card"));
    // 4 corners of 4 boundary vertices each, plus 4 hubs
    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 20);
    // 5 body quads and 3 fan triangles per corner
    assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 17);
}

#[test]
fn test_curve_svg_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path());

    let output = roundrect(
        &config,
        &["curve", "--rounding", "0.5,0,0.5,0", "--format", "svg"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let svg = String::from_utf8(output.stdout).expect("utf-8 svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(" Z\""));
}

#[test]
fn test_json_format_inferred_from_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path());
    let out = dir.path().join("shape.json");

    let output = roundrect(
        &config,
        &[
            "mesh",
            "--rounding",
            "0",
            "--policy",
            "sharp_fallback",
            "-p",
            "ngon",
            "-o",
            out.to_str().expect("utf-8 path"),
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("read json")).expect("parse");
    assert_eq!(doc["kind"], "mesh");
    assert_eq!(doc["mesh"]["vertex_indices"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.toml");

    let output = roundrect(&missing, &["curve"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn test_invalid_flag_value_is_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path());

    let output = roundrect(&config, &["mesh", "--resolutions", "1,2"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_init_and_show() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fresh.toml");

    let output = roundrect(&path, &["config", "init"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(path.exists());

    // Refuses to clobber without --force
    let output = roundrect(&path, &["config", "init"]);
    assert!(!output.status.success());

    let output = roundrect(&path, &["config", "show", "--format", "json"]);
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse");
    assert_eq!(doc["mesh"]["polygon_mode"], "quad");
    assert_eq!(doc["output"]["object_name"], "Rectangle");
}

#[test]
fn test_relative_output_goes_to_configured_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let renders = dir.path().join("renders");
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[output]\ndirectory = '{}'\n", renders.display()),
    )
    .expect("write config");

    let output = roundrect(&config, &["curve", "-o", "card.svg"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let svg = std::fs::read_to_string(renders.join("card.svg")).expect("read svg");
    assert!(svg.starts_with("<svg"));
}
