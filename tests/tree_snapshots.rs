//! Snapshot tests for rendered trees.
//!
//! Each test builds a fixture directory and compares the rendered tree
//! against an inline snapshot. Review changes with `cargo insta review`.

use insta::assert_snapshot;
use project_tree::{IgnoreRules, TreePrinter};
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

fn fixture(paths: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for rel in paths {
        let path = dir.path().join(rel);
        if let Some(dir_path) = rel.strip_suffix('/') {
            fs::create_dir_all(dir.path().join(dir_path)).unwrap();
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }
    dir
}

fn render(root: &Path, rules: IgnoreRules) -> String {
    TreePrinter::new(rules)
        .render(root)
        .unwrap()
        .trim_end()
        .to_string()
}

#[test]
fn test_web_project_snapshot() {
    let dir = fixture(&[
        "app/page.tsx",
        "app/api/news/route.ts",
        "app/login/page.tsx",
        "components/Header.tsx",
        "lib/types.ts",
        "node_modules/react/index.js",
        ".next/build-manifest.json",
        ".env.local",
        "package.json",
        "yarn.lock",
        "npm-debug.log",
    ]);

    assert_snapshot!(render(dir.path(), IgnoreRules::default()), @r"
├── app
│   ├── api
│   │   └── news
│   │       └── route.ts
│   ├── login
│   │   └── page.tsx
│   └── page.tsx
├── components
│   └── Header.tsx
├── lib
│   └── types.ts
└── package.json
");
}

#[test]
fn test_python_project_snapshot() {
    let dir = fixture(&[
        "pkg/__init__.py",
        "pkg/__pycache__/__init__.cpython-312.pyc",
        "pkg/core/engine.py",
        "tests/",
        ".vscode/settings.json",
        ".git/config",
        "setup.py",
    ]);

    assert_snapshot!(render(dir.path(), IgnoreRules::default()), @r"
├── pkg
│   ├── __init__.py
│   └── core
│       └── engine.py
├── setup.py
└── tests
");
}

#[test]
fn test_nothing_ignored_snapshot() {
    let dir = fixture(&[".git/HEAD", "node_modules/", "b.log"]);

    assert_snapshot!(render(dir.path(), IgnoreRules::none()), @r"
├── .git
│   └── HEAD
├── b.log
└── node_modules
");
}
