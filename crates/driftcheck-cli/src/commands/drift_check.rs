use driftcheck_git::{GitClient, GitError};
use driftcheck_rules::{
    DriftReport, PatternSet, RULES_SCHEMA, Verdict, evaluate, parse_change_set,
};
use serde_json::json;

const CHECK_KIND: &str = "ci.contract_drift_check.v1";
const FAILURE_CLASS_DRIFT: &str = "contract_drift_violation";
const FAILURE_CLASS_STATUS: &str = "status_provider_unavailable";

pub struct Args {
    pub repo_root: String,
    pub paths: Vec<String>,
    pub schema_patterns: Vec<String>,
    pub contract_patterns: Vec<String>,
    pub json: bool,
}

fn load_git_change_set(repo_root: &str) -> Result<Vec<String>, GitError> {
    let client = GitClient::discover(repo_root)?;
    let raw = client.status_porcelain()?;
    Ok(parse_change_set(&raw))
}

fn emit_status_error(err: &GitError, json_output: bool) {
    if json_output {
        let payload = json!({
            "schema": RULES_SCHEMA,
            "checkKind": CHECK_KIND,
            "result": "error",
            "failureClasses": [FAILURE_CLASS_STATUS],
            "message": err.to_string(),
        });
        println!("{payload:#}");
    }
    eprintln!("error: {err}");
    eprintln!("[contract-drift] could not read working-tree status; is this a git checkout?");
}

fn render_json(report: &DriftReport, patterns: &PatternSet, source: &str) {
    let result = if report.verdict.is_violation() {
        "rejected"
    } else {
        "accepted"
    };
    let failure_classes: Vec<&str> = if report.verdict.is_violation() {
        vec![FAILURE_CLASS_DRIFT]
    } else {
        Vec::new()
    };
    let payload = json!({
        "schema": report.schema,
        "checkKind": CHECK_KIND,
        "result": result,
        "failureClasses": failure_classes,
        "verdict": report.verdict.as_str(),
        "source": source,
        "scanned": report.scanned,
        "schemaMatches": report.schema_matches,
        "contractMatches": report.contract_matches,
        "patterns": patterns,
    });
    println!("{payload:#}");
}

fn render_text(report: &DriftReport, patterns: &PatternSet, source: &str) {
    match report.verdict {
        Verdict::Clean => {
            println!("[contract-drift] CLEAN (no modified files)");
        }
        Verdict::Pass => {
            println!(
                "[contract-drift] OK (source={source}, scanned={})",
                report.scanned
            );
        }
        Verdict::Violation => {
            println!(
                "[contract-drift] FAIL schema changed without a contract update (source={source})"
            );
            for entry in &report.schema_matches {
                println!("  - {entry}");
            }
            println!(
                "  rule: paths matching [{}] must not change unless a path matching [{}] changes too",
                patterns.schema.join(", "),
                patterns.contract.join(", ")
            );
            println!("  action: update the API contract (e.g. openapi/v1.yaml) in the same change");
        }
    }
}

pub fn run(args: Args) -> i32 {
    let patterns = PatternSet::from_overrides(args.schema_patterns, args.contract_patterns);

    let (change_set, source) = if args.paths.is_empty() {
        match load_git_change_set(&args.repo_root) {
            Ok(entries) => (entries, "git_status"),
            Err(err) => {
                emit_status_error(&err, args.json);
                return 1;
            }
        }
    } else {
        (args.paths, "explicit_paths")
    };

    let report = evaluate(&change_set, &patterns);

    if args.json {
        render_json(&report, &patterns, source);
    } else {
        render_text(&report, &patterns, source);
    }

    if report.verdict.is_violation() { 1 } else { 0 }
}
