//! Integration tests for the nscope CLI.

use clap::Parser;
use normscope::cli::{Cli, run_cli};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FRENCH: &str = "\
id,whisper_large_v3,canary_1b
1,il fait 20 % de plus,il fait vingt pour cent de plus
2,la route fait 10 km,la route fait dix kilomètres
3,le 25/12/2023 à midi,le 25 décembre 2023 à midi
4,,euh on verra
";

const SPANISH: &str = "\
id,parakeet_tdt
1,cuesta 20 €
2,un 15% más
";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn analyze_writes_summary_and_skips_rejected_files() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let french = write(dir.path(), "transcriptions_fr_news.csv", FRENCH);
    let spanish = write(dir.path(), "transcriptions_es.csv", SPANISH);
    let unnamed = write(dir.path(), "transcriptions.csv", FRENCH);
    let no_model = write(dir.path(), "transcriptions_de.csv", "id,text\n1,hallo\n");
    let output = dir.path().join("summary.csv");

    let cli = Cli::parse_from([
        "nscope",
        "analyze",
        arg(&french),
        arg(&spanish),
        arg(&unnamed),
        arg(&no_model),
        "--detected-only",
        "-o",
        arg(&output),
    ]);
    run_cli(cli).expect("analyze failed");

    let mut reader = csv::Reader::from_path(&output).expect("summary not written");
    let headers = reader.headers().expect("missing header").clone();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    let column = |row: &csv::StringRecord, name: &str| -> String {
        let index = headers.iter().position(|h| h == name).expect(name);
        row[index].to_string()
    };

    let keys: Vec<String> = rows
        .iter()
        .map(|r| {
            format!(
                "{} {} {}",
                column(r, "file"),
                column(r, "language"),
                column(r, "model")
            )
        })
        .collect();
    assert_eq!(
        keys,
        [
            "transcriptions_fr_news.csv fr whisper",
            "transcriptions_fr_news.csv fr canary",
            "transcriptions_es.csv es parakeet",
        ]
    );

    let whisper = &rows[0];
    assert_eq!(column(whisper, "percent_format"), "symbol_space");
    assert_eq!(column(whisper, "unit_format"), "short");
    assert_eq!(column(whisper, "date_format"), "dd/mm/yyyy");

    let canary = &rows[1];
    assert_eq!(column(canary, "percent_format"), "word");
    assert_eq!(column(canary, "unit_format"), "long");
    assert_eq!(column(canary, "date_format"), "dd_month_yyyy");
    assert_eq!(column(canary, "hesitation_frequency"), "0.25");

    let parakeet = &rows[2];
    assert_eq!(column(parakeet, "currency_format"), "symbol");
    assert_eq!(column(parakeet, "currency_format_share"), "1.0");
    assert_eq!(column(parakeet, "percent_format"), "symbol_no_space");
}

#[test]
fn analyze_fails_when_every_file_is_rejected() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let bad = write(dir.path(), "notes.csv", FRENCH);

    let cli = Cli::parse_from(["nscope", "analyze", arg(&bad)]);

    assert!(run_cli(cli).is_err());
}

#[test]
fn guide_renders_observed_and_fallback_pairs() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let french = write(dir.path(), "transcriptions_fr.csv", FRENCH);
    let out = dir.path().join("guides");

    let cli = Cli::parse_from([
        "nscope",
        "guide",
        arg(&french),
        "--all",
        "--detected-only",
        "--add-model",
        "voxtral",
        "-o",
        arg(&out),
    ]);
    run_cli(cli).expect("guide failed");

    let mut written: Vec<String> = std::fs::read_dir(&out)
        .expect("guide directory missing")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(
        written,
        [
            "guidelines_fr_canary.md",
            "guidelines_fr_parakeet.md",
            "guidelines_fr_voxtral.md",
            "guidelines_fr_whisper.md",
        ]
    );

    let whisper = std::fs::read_to_string(out.join("guidelines_fr_whisper.md")).unwrap();
    assert!(whisper.starts_with("# French Annotation Guidelines for Whisper\n"));
    assert!(whisper.contains("- **Units**: abbreviate units: 10 km ✅, 10 kilometers ❌\n"));
    assert!(whisper.contains("- **Units**: 100.0% (based on French/Whisper data)\n"));

    let voxtral = std::fs::read_to_string(out.join("guidelines_fr_voxtral.md")).unwrap();
    assert!(voxtral.contains("(based on the French majority)"));
}

#[test]
fn guide_for_one_unobserved_pair() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let spanish = write(dir.path(), "transcriptions_es.csv", SPANISH);

    let cli = Cli::parse_from([
        "nscope",
        "guide",
        arg(&spanish),
        "--lang",
        "DE",
        "--model",
        "whisper",
        "-o",
        arg(dir.path()),
    ]);
    run_cli(cli).expect("guide failed");

    let doc = std::fs::read_to_string(dir.path().join("guidelines_de_whisper.md")).unwrap();
    assert!(doc.contains("- **Currency amounts**: 50.0% (based on the global majority)\n"));
}
