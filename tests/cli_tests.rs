use relic_rating::loader::{AVATAR_CONFIG, MAIN_AFFIX_VALUE, RELIC_RECOMMEND, SUB_AFFIX_VALUE};
use relic_rating::model::ScoreDb;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    input_dir: PathBuf,
    output: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_dir = dir.path().join("ExcelOutput");
        fs::create_dir_all(&input_dir).unwrap();

        fs::write(
            input_dir.join(AVATAR_CONFIG),
            r#"[
              {"AvatarID": 1102, "DamageType": "Quantum", "AvatarBaseType": "Rogue", "AvatarVOTag": "seele"},
              {"AvatarID": 8001, "DamageType": "Physical", "AvatarBaseType": "Warrior", "AvatarVOTag": "playerboy"}
            ]"#,
        )
        .unwrap();
        fs::write(
            input_dir.join(RELIC_RECOMMEND),
            r#"[{"AvatarID": 1102, "PropertyList": [{"RelicType": "BODY", "PropertyType": "CriticalDamageBase"}]}]"#,
        )
        .unwrap();
        fs::write(
            input_dir.join(MAIN_AFFIX_VALUE),
            r#"[{"AvatarID": 1102, "HP": 0.2, "Attack": 0.75, "Speed": 1, "DamageAddedRatio": 0.5}]"#,
        )
        .unwrap();
        fs::write(
            input_dir.join(SUB_AFFIX_VALUE),
            r#"[{"AvatarID": 1102, "HP": 0, "Attack": 0.9, "Speed": 1, "CriticalChance": 1, "CriticalDamage": 1, "StatusResistance": 0}]"#,
        )
        .unwrap();

        let output = dir.path().join("out").join("ARDB4HSR.json");
        Self {
            dir,
            input_dir,
            output,
        }
    }

    fn generate(&self, extra: &[&str]) -> Output {
        let mut args = vec![
            "generate",
            "--input-dir",
            self.input_dir.to_str().unwrap(),
            "--output",
            self.output.to_str().unwrap(),
        ];
        args.extend_from_slice(extra);
        run(&args)
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relic-rating"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_cli_generate_writes_model() {
    let ctx = TestContext::new();
    let out = ctx.generate(&[]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let db = ScoreDb::load_from_file(&ctx.output).unwrap();
    assert_eq!(db.len(), 2);
    assert!(db.get(1102).unwrap().max > 0.0);
    assert_eq!(db.get(8001).unwrap().max, 0.0);
}

#[test]
fn test_cli_generate_is_reproducible() {
    let ctx = TestContext::new();
    assert!(ctx.generate(&[]).status.success());
    let first = fs::read(&ctx.output).unwrap();

    assert!(ctx.generate(&["--debug"]).status.success());
    let second = fs::read(&ctx.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cli_summary_table() {
    let ctx = TestContext::new();
    let out = ctx.generate(&["--summary"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1102"));
    assert!(stdout.contains("CriticalDamageBase"));
}

#[test]
fn test_cli_missing_source_fails() {
    let ctx = TestContext::new();
    fs::remove_file(ctx.input_dir.join(MAIN_AFFIX_VALUE)).unwrap();

    let out = ctx.generate(&[]);
    assert!(!out.status.success());
    assert!(!ctx.output.exists(), "no output may be written on failure");
    assert!(String::from_utf8_lossy(&out.stderr).contains(MAIN_AFFIX_VALUE));
}

#[test]
fn test_cli_tally_json() {
    let ctx = TestContext::new();
    let lookup = ctx.dir.path().join("affixes.json");
    fs::write(
        &lookup,
        r#"{"501201": "FIGHT_PROP_CRITICAL", "501052": "FIGHT_PROP_ATTACK"}"#,
    )
    .unwrap();

    let out = run(&[
        "tally",
        "--lookup",
        lookup.to_str().unwrap(),
        "501201",
        "501052",
        "501201",
    ]);
    assert!(out.status.success());

    let counts: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(counts["FIGHT_PROP_CRITICAL"], 2);
    assert_eq!(counts["FIGHT_PROP_ATTACK"], 1);
}

#[test]
fn test_cli_tally_stale_lookup() {
    let ctx = TestContext::new();
    let lookup = ctx.dir.path().join("affixes.json");
    fs::write(&lookup, r#"{"501201": "FIGHT_PROP_CRITICAL"}"#).unwrap();

    let out = run(&["tally", "--lookup", lookup.to_str().unwrap(), "501201", "7"]);
    assert!(out.status.success());

    let counts: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(counts, serde_json::json!({}));
}

#[test]
fn test_cli_lookup_then_tally() {
    let ctx = TestContext::new();
    let source = ctx.dir.path().join("ReliquaryAffixExcelConfigData.json");
    fs::write(
        &source,
        r#"[{"ELKKIAIGOBK": 501201, "JJNPGPFNJHP": "FIGHT_PROP_CRITICAL"},
            {"ELKKIAIGOBK": 501203, "JJNPGPFNJHP": "FIGHT_PROP_CRITICAL"}]"#,
    )
    .unwrap();
    let table = ctx.dir.path().join("out").join("CountDB4GI.json");

    let out = run(&[
        "lookup",
        "--input",
        source.to_str().unwrap(),
        "--output",
        table.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert!(table.exists());

    let out = run(&["tally", "--lookup", table.to_str().unwrap(), "501201", "501203"]);
    let counts: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(counts["FIGHT_PROP_CRITICAL"], 2);
}
