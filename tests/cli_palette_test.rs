use assert_cmd::Command;
use predicates::prelude::*;

fn barkit() -> Command {
    let dir = std::env::temp_dir().join("barkit-palette-test-xdg");
    let mut cmd = Command::cargo_bin("barkit").unwrap();
    cmd.env("XDG_CONFIG_HOME", dir);
    cmd
}

#[test]
fn test_ghostty_palette() {
    barkit()
        .args(["palette", "#ff0000"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("palette = 0=#1a1a1a\npalette = 1=#cc5151\n"))
        .stdout(predicate::str::ends_with("palette = 15=#ffffff\n"));
}

#[test]
fn test_kitty_light_palette() {
    barkit()
        .args(["palette", "ff0000", "--light", "--kitty"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("color0   #f8f8f8\ncolor1   #d83636\n"))
        .stdout(predicate::str::ends_with("color15   #1a1a1a\n"));
}

#[test]
fn test_honor_primary() {
    barkit()
        .args(["palette", "#1e66f5", "--honor-primary", "89B4FA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("palette = 6=#89b4fa\n"));
}

#[test]
fn test_base16_variant() {
    barkit()
        .args(["palette", "#808080", "--variant", "base16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("palette = 4=#999999\n"));
}

#[test]
fn test_invalid_colour() {
    barkit()
        .args(["palette", "notacolour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid hex colour 'notacolour'"));
}
