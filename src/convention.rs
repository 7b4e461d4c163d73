//! Commit-message convention tables and the label set derived from them.
//!
//! Two static tables keyed by the same type codes: code -> description
//! (used to compose commit messages) and code -> display color (used when
//! creating labels). The label set is the join of the two.

use anyhow::{bail, Result};

use crate::forge::Label;

/// Commit type codes and their descriptions.
pub const COMMIT_TYPES: &[(&str, &str)] = &[
    ("Feat", "새로운 기능 추가"),
    ("Fix", "버그 수정"),
    ("Docs", "문서 수정"),
    ("Style", "코드 포맷팅, 세미콜론 누락, 코드 변경이 없는 경우"),
    ("Refactor", "코드 리팩토링"),
    ("Test", "테스트 코드, 리팩토링 테스트 코드 추가"),
    (
        "Chore",
        "빌드 업무 수정, 패키지 매니저 수정, production code와 무관한 부분들 (.gitignore, build.gradle 같은)",
    ),
    ("Comment", "주석 추가 및 변경"),
    ("Remove", "파일, 폴더 삭제"),
    ("Rename", "파일, 폴더명 수정"),
];

/// Display color for each commit type (six hex digits, no '#').
pub const LABEL_COLORS: &[(&str, &str)] = &[
    ("Feat", "a2eeef"),
    ("Fix", "d73a4a"),
    ("Docs", "0075ca"),
    ("Style", "cfd3d7"),
    ("Refactor", "bfd4f2"),
    ("Test", "0e8a16"),
    ("Chore", "fef2c0"),
    ("Comment", "c5def5"),
    ("Remove", "e99695"),
    ("Rename", "f9d0c4"),
];

/// Look up the description for a commit type code.
pub fn describe(code: &str) -> Option<&'static str> {
    COMMIT_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, description)| *description)
}

fn color_for(code: &str) -> Option<&'static str> {
    LABEL_COLORS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, color)| *color)
}

/// Compose a commit message for a type code: `<TypeCode>: <description>`.
pub fn commit_message(code: &str) -> Result<String> {
    match describe(code) {
        Some(description) => Ok(format!("{}: {}", code, description)),
        None => bail!("Unknown commit type: {}", code),
    }
}

/// Join the commit-type and color tables into the full label set.
///
/// Every commit type must have a color; codes without one are reported by
/// name instead of silently producing an undefined color.
pub fn label_set() -> Result<Vec<Label>> {
    let mut labels = Vec::with_capacity(COMMIT_TYPES.len());
    let mut missing = Vec::new();

    for (code, description) in COMMIT_TYPES {
        match color_for(code) {
            Some(color) => labels.push(Label {
                name: code.to_string(),
                color: color.to_string(),
                description: description.to_string(),
            }),
            None => missing.push(*code),
        }
    }

    if !missing.is_empty() {
        bail!("Commit types without a label color: {}", missing.join(", "));
    }

    Ok(labels)
}
