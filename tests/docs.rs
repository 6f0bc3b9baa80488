use std::fs;

use celform::{Expression, Value, base};
use walkdir::WalkDir;

#[test]
fn doc_examples_hold() {
    let env = base().with_value("name", "Ada")
                    .with_value("qty", 3.0)
                    .with_value("price", 2.5);
    let mut count = 0;

    for entry in WalkDir::new("docs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_formula_blocks(&content).into_iter().enumerate() {
            count += 1;
            let result = Expression::parse(code.trim()).map_err(|e| e.to_string())
                                                       .and_then(|e| e.evaluate(&env).map_err(|e| e.to_string()));
            match result {
                Ok(Value::Bool(true)) => {},
                other => panic!("Formula example {} in {:?} does not hold:\n{}\nResult: {:?}",
                                i + 1,
                                path,
                                code,
                                other),
            }
        }
    }

    assert!(count > 0, "No formula examples found in docs");
}

fn extract_formula_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```celform") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
