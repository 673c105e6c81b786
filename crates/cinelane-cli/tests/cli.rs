use assert_cmd::cargo::cargo_bin_cmd;
use cinelane_testing::TestWorld;
use cinelane_testing::assertions::assert_screen_title;
use cinelane_testing::fixtures::SAMPLE_CATALOG_TOML;
use predicates::prelude::*;

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_list_shows_builtin_catalog_in_order() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cinelane");
    world.configure_command(&mut cmd).arg("list");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let clayton = stdout.find("[0] Michael Clayton (Max)").expect("first entry");
    let thief = stdout.find("[1] Thief (Criterion)").expect("second entry");
    assert!(clayton < thief);
}

#[test]
fn test_show_second_pick_as_json() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cinelane");
    world
        .configure_command(&mut cmd)
        .args(["show", "--index", "1", "--format", "json"]);

    let output = cmd.output()?;
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_screen_title(&json, "Thief")?;
    assert_eq!(json["index"], 1);
    assert_eq!(json["imdb_score"], "7.4");
    assert_eq!(json["provider_badge"], "Criterion");
    assert_eq!(json["provider_label"], "Criterion");
    assert_eq!(json["reasons"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["lane"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["lane"][0]["name"], "Manhunter");

    Ok(())
}

#[test]
fn test_show_defaults_to_first_pick() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cinelane");
    world.configure_command(&mut cmd).arg("show");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Pick 1 of 2"))
        .stdout(predicate::str::contains("Michael Clayton  [Max]"))
        .stdout(predicate::str::contains("▶ Watch on Max"))
        .stdout(predicate::str::contains("cinelane show --index 1"));
}

#[test]
fn test_show_out_of_range_fails() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cinelane");
    world.configure_command(&mut cmd).args(["show", "--index", "2"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_play_reports_provider() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cinelane");
    world.configure_command(&mut cmd).args(["play", "--index", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Prototype action: open Criterion"));
}

#[test]
fn test_play_json_is_the_event() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cinelane");
    world
        .configure_command(&mut cmd)
        .args(["play", "--format", "json"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["event"], "playback_requested");
    assert_eq!(json["provider"], "Max");
}

#[test]
fn test_catalog_flag_replaces_builtin() {
    let world = TestWorld::new();
    let catalog = world.write_catalog("picks.toml", SAMPLE_CATALOG_TOML);
    let mut cmd = cargo_bin_cmd!("cinelane");
    world
        .configure_command(&mut cmd)
        .arg("--catalog")
        .arg(&catalog)
        .arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[0] Heat (Netflix)"))
        .stdout(predicate::str::contains("[1] Ronin (Prime Video)"))
        .stdout(predicate::str::contains("Michael Clayton").not());
}

#[test]
fn test_configured_catalog_is_used() -> anyhow::Result<()> {
    let world = TestWorld::new();
    std::fs::write(world.data_dir().join("picks.toml"), SAMPLE_CATALOG_TOML)?;
    world.write_config("catalog = \"picks.toml\"\n");

    let mut cmd = cargo_bin_cmd!("cinelane");
    world
        .configure_command(&mut cmd)
        .args(["show", "--format", "json"]);

    let output = cmd.output()?;
    assert!(output.status.success());
    assert_screen_title(&json_stdout(&output), "Heat")?;

    Ok(())
}

#[test]
fn test_empty_catalog_is_rejected() {
    let world = TestWorld::new();
    let catalog = world.write_catalog("empty.toml", "# no picks yet\n");
    let mut cmd = cargo_bin_cmd!("cinelane");
    world
        .configure_command(&mut cmd)
        .arg("--catalog")
        .arg(&catalog)
        .arg("list");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at least one recommendation"));
}

#[test]
fn test_no_subcommand_without_terminal_lists() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cinelane");
    world.configure_command(&mut cmd);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[1] Thief (Criterion)"));
}

#[test]
fn test_browse_rejects_bad_start_before_opening_screen() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cinelane");
    world
        .configure_command(&mut cmd)
        .args(["browse", "--start", "7"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}
