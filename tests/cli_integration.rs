use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn stylefinder(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stylefinder").unwrap();
    cmd.env("STYLEFINDER_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("STYLEFINDER_LOG");
    cmd
}

#[test]
fn test_list_all_styles() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("swiss"))
        .stdout(predicate::str::contains("startup"))
        .stdout(predicate::str::contains("件").not());
}

#[test]
fn test_search_prints_count_readout() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["list", "-s", "ミニマル"])
        .assert()
        .success()
        .stdout(predicate::str::contains("スイス・スタイル"))
        .stdout(predicate::str::contains("1件 / 18件"))
        .stdout(predicate::str::contains("cyberpunk").not());
}

#[test]
fn test_list_by_tone() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["list", "-t", "tech"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cyberpunk"))
        .stdout(predicate::str::contains("swiss").not());
}

#[test]
fn test_unknown_tone_fails() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["list", "-t", "retro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tone: retro"));
}

#[test]
fn test_generate_document() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["generate", "cyberpunk"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# プレゼンテーション用デザイン設定\n# スタイル: Cyberpunk (サイバーパンク)",
        ))
        .stdout(predicate::str::contains("スライド構成:"))
        .stdout(predicate::str::contains("アクセントカラー「#05D9E8」を効果的に使用"));
}

#[test]
fn test_generate_for_other_medium() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["generate", "swiss", "-p", "social"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# SNS投稿用デザイン設定"))
        .stdout(predicate::str::contains("投稿タイプ:"));
}

#[test]
fn test_unknown_style_fails() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["show", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Style not found: ghost"));
}

#[test]
fn test_show_detail() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["show", "swiss", "-p", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Swiss Style / スイス・スタイル"))
        .stdout(predicate::str::contains("（アプリ用）"))
        .stdout(predicate::str::contains("このスタイルを適用"))
        .stdout(predicate::str::contains("# アプリUI用デザイン設定"));
}

#[test]
fn test_favorites_persist_between_runs() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["fav", "pastel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("お気に入りに追加しました: パステルソフト"));

    assert!(home.path().join("designStyleFavorites.json").exists());

    stylefinder(home.path())
        .arg("favs")
        .assert()
        .success()
        .stdout(predicate::str::contains("pastel"))
        .stdout(predicate::str::contains("swiss").not());

    stylefinder(home.path())
        .args(["fav", "pastel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("お気に入りから外しました"));

    stylefinder(home.path())
        .arg("favs")
        .assert()
        .success()
        .stdout(predicate::str::contains("お気に入りはまだありません"));
}

#[test]
fn test_corrupt_favorites_start_empty() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("designStyleFavorites.json"), "not json").unwrap();
    stylefinder(home.path())
        .arg("favs")
        .assert()
        .success()
        .stdout(predicate::str::contains("お気に入りはまだありません"));
}

#[test]
fn test_tones_show_counts() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .arg("tones")
        .assert()
        .success()
        .stdout(predicate::str::contains("すべて"))
        .stdout(predicate::str::contains("18"))
        .stdout(predicate::str::contains("favorites"));
}

#[test]
fn test_compare_needs_two_styles() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["compare", "swiss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2つ以上のスタイルを選択してください"));
}

#[test]
fn test_compare_side_by_side() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["compare", "swiss", "ghost", "cyberpunk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Style not found: ghost"))
        .stdout(predicate::str::contains("サイバーパンク"))
        .stdout(predicate::str::contains("#E30613"));
}

#[test]
fn test_config_default_purpose() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["config", "default-purpose", "lp"])
        .assert()
        .success();

    stylefinder(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-purpose = lp"));

    stylefinder(home.path())
        .args(["generate", "swiss"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# ランディングページ用デザイン設定"));
}

#[test]
fn test_config_rejects_unknown_medium() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .args(["config", "default-purpose", "print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown medium: print"));
}

#[test]
fn test_session_drives_state() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .arg("session")
        .write_stdin("search ミニマル\nopen swiss\npurpose website\ndoc\napply swiss\nbogus\nquit\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1件 / 18件"))
        .stdout(predicate::str::contains("# Webサイト用デザイン設定"))
        .stdout(predicate::str::contains("適用中のテーマ: スイス・スタイル"))
        .stdout(predicate::str::contains("Unknown command: bogus"));
}

#[test]
fn test_list_groups_by_tone() {
    let home = tempfile::tempdir().unwrap();
    stylefinder(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("🎨 すべて (18)"))
        .stdout(predicate::str::contains("💻 テック (3)"))
        .stdout(predicate::str::contains("🏢 コーポレート (3)"));

    stylefinder(home.path())
        .args(["list", "-t", "tech"])
        .assert()
        .success()
        .stdout(predicate::str::contains("テック (").not());
}

#[test]
fn test_corrupt_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config_path = home.path().join("config.json");
    std::fs::write(&config_path, "{").unwrap();

    stylefinder(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("swiss"));

    stylefinder(home.path())
        .args(["generate", "swiss"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# プレゼンテーション用デザイン設定"));

    stylefinder(home.path())
        .args(["config", "default-purpose", "lp"])
        .assert()
        .success();

    let repaired = std::fs::read_to_string(&config_path).unwrap();
    assert!(repaired.contains("\"lp\""));

    stylefinder(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-purpose = lp"));
}
