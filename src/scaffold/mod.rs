//! Scaffold files written into a freshly initialized working tree.
//!
//! Three fixed blobs at fixed relative paths: ignore rules at the root and
//! two issue templates under `.github/ISSUE_TEMPLATE/`. Writes overwrite
//! unconditionally; the template directory is created recursively.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const GITIGNORE_PATH: &str = ".gitignore";
pub const TEMPLATE_DIR: &str = ".github/ISSUE_TEMPLATE";
pub const FEATURE_TEMPLATE_PATH: &str = ".github/ISSUE_TEMPLATE/feature_request.md";
pub const BUG_TEMPLATE_PATH: &str = ".github/ISSUE_TEMPLATE/bug_report.md";

const GITIGNORE: &str = "node_modules\n";

const FEATURE_ISSUE_TEMPLATE: &str = r#"
---
name: "✅기능 이슈"
about: 개발할 상세 기능을 적어 주세요.
title: "[Feat] 추가할 기능"
labels: Feat, Fix
assignees: ''

---

## 📋 Description
기능 이름: 구현할 기능의 이름을 작성하세요. (예: "아이템 CRUD")
기능 설명: 개발할 기능의 상세 내용을 작성하세요. 해당 기능이 무엇을 수행하며, 왜 필요한지 설명합니다.
예: "사용자가 아이템을 생성, 수정, 삭제할 수 있도록 하는 CRUD 기능을 개발합니다."

## 🛠️ To Do
- [ ] 아이템 생성: 기능 설명 및 구현 사항을 작성하세요.
- [ ] 아이템 수정: 기능 설명 및 구현 사항을 작성하세요.
- [ ] 아이템 삭제: 기능 설명 및 구현 사항을 작성하세요.

## 📝 ETC
기타 사항: 기타 필요한 사항이나 주의할 점을 적어 주세요.
"#;

const BUG_REPORT_TEMPLATE: &str = r#"
---
name: "🚨버그 리포트"
about: 어떤 버그인가요?
title: 어떤 버그인가요?
labels: Fix
assignees: ''

---

## 🐛 어떤 버그인가요?
- 버그 이름: 버그에 대한 간단한 제목을 작성하세요. (예: "아이템 생성 시 중복 이름 허용")
- 버그 발생 위치: 버그가 발생한 기능이나 화면의 위치를 명시하세요.
예: "아이템 생성 페이지"
- 버그 상세 설명: 발생한 버그에 대해 상세히 작성하세요. 어떤 문제가 발생했으며, 정상 동작은 어떻게 되어야 하는지 설명합니다.
예: "아이템 생성 시, 동일한 이름의 아이템을 여러 번 생성할 수 있습니다. 정상적으로는 중복된 이름의 아이템 생성이 불가능해야 합니다."

## 🔍 어떤 상황에서 겪으셨나요?
- 상황 설명: 버그를 겪으신 상황을 자세히 적어 주세요. (예: 어떤 기능을 사용할 때 발생했는지, 어떤 입력을 했는지 등)

## 📝 ETC
- 기타 사항: 기타 필요한 사항이나 추가로 제공할 정보가 있다면 적어 주세요.
"#;

/// Write all scaffold files under the given root.
pub fn write_all(root: &Path) -> Result<()> {
    fs::write(root.join(GITIGNORE_PATH), GITIGNORE)
        .context("Failed to write .gitignore")?;

    let template_dir = root.join(TEMPLATE_DIR);
    fs::create_dir_all(&template_dir)
        .with_context(|| format!("Failed to create {}", template_dir.display()))?;

    fs::write(root.join(FEATURE_TEMPLATE_PATH), FEATURE_ISSUE_TEMPLATE)
        .context("Failed to write feature request template")?;
    fs::write(root.join(BUG_TEMPLATE_PATH), BUG_REPORT_TEMPLATE)
        .context("Failed to write bug report template")?;

    Ok(())
}
