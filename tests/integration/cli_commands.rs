//! CLI integration tests: run the compgen binary against isolated workspaces

use std::fs;
use tempfile::TempDir;

use crate::integration::compgen_command;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_generate_prints_source() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");

    let output = compgen_command(temp.path(), &workspace)
        .args(["generate", "button", "SaveButton", "--option", "tone=primary"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("import React from 'react';\n"));
    assert!(stdout.contains("interface SaveButtonProps {"));
    assert!(stdout.trim_end().ends_with("// </SaveButton>"));
    assert!(stderr_of(&output).is_empty(), "--quiet should keep stderr empty");
}

#[test]
fn test_generate_json_reports_state() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");

    let output = compgen_command(temp.path(), &workspace)
        .args(["generate", "carousel", "Slides", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["isGenerating"], false);
    assert!(json["lastError"].is_null());
    assert!(json["generatedSource"]
        .as_str()
        .unwrap()
        .contains("<div className={cn('p-4', className)} {...props}>"));
}

#[test]
fn test_generate_write_and_refuse_overwrite() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    let target = workspace.join("src").join("components").join("Dialog.tsx");

    let first = compgen_command(temp.path(), &workspace)
        .args(["generate", "modal", "Dialog", "--write"])
        .output()
        .unwrap();
    assert!(first.status.success(), "stderr={}", stderr_of(&first));
    assert_eq!(stdout_of(&first).trim(), format!("Wrote {}", target.display()));
    let content = fs::read_to_string(&target).unwrap();
    assert!(content.contains("if (!isOpen) return null;"));

    let second = compgen_command(temp.path(), &workspace)
        .args(["generate", "modal", "Dialog", "--write"])
        .output()
        .unwrap();
    assert!(!second.status.success());
    assert!(stderr_of(&second).contains("Output file already exists"));
    assert_eq!(fs::read_to_string(&target).unwrap(), content);
}

#[test]
fn test_generate_invalid_name_fails() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");

    let output = compgen_command(temp.path(), &workspace)
        .args(["generate", "card", "my-card"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(
        stderr_of(&output).starts_with("error: Invalid identifier 'my-card'"),
        "stderr={}",
        stderr_of(&output)
    );
}

#[test]
fn test_list_filters_by_category() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");

    let output = compgen_command(temp.path(), &workspace)
        .args(["list", "--category", "overlay", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["category"], "Overlay");
    assert_eq!(json["count"], 1);
    assert_eq!(json["components"][0]["id"], "modal");

    let text = compgen_command(temp.path(), &workspace)
        .args(["list"])
        .output()
        .unwrap();
    assert!(text.status.success());
    let stdout = stdout_of(&text);
    for id in ["button", "card", "input", "modal", "form", "navbar", "table", "calendar", "chart"] {
        assert!(stdout.contains(id), "missing {}", id);
    }
}

#[test]
fn test_list_rejects_unknown_category() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");

    let output = compgen_command(temp.path(), &workspace)
        .args(["list", "--category", "widgets"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Invalid category: widgets"));
}

#[test]
fn test_show_uses_catalog_name_and_archetype() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");

    let navbar = compgen_command(temp.path(), &workspace)
        .args(["show", "navbar"])
        .output()
        .unwrap();
    assert!(navbar.status.success(), "stderr={}", stderr_of(&navbar));
    let stdout = stdout_of(&navbar);
    assert!(stdout.contains("interface NavigationProps {"));
    assert!(stdout.contains("cn('p-4', className)"));

    let renamed = compgen_command(temp.path(), &workspace)
        .args(["show", "button", "--name", "Primary"])
        .output()
        .unwrap();
    assert!(renamed.status.success());
    assert!(stdout_of(&renamed).contains("export const Primary: React.FC<PrimaryProps>"));
}

#[test]
fn test_show_unknown_component_fails() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");

    let output = compgen_command(temp.path(), &workspace)
        .args(["show", "sidebar"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Unknown component: sidebar"));
}
