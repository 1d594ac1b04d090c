use super::models::Page;
use anyhow::{Context, Result, bail};
use std::fs;

pub fn parse_catalog_file(file_path: &str) -> Result<Page> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read course catalog: {}", file_path))?;

    parse_catalog(&content, file_path)
}

/// Builds a page from catalog text: `- <id>: <label>` lines, optionally with a
/// `[ ]`/`[x]` box, `#` headings and `---` frontmatter.
pub fn parse_catalog(content: &str, file_path: &str) -> Result<Page> {
    let mut page = Page::new(file_path.to_string());
    let mut in_yaml_frontmatter = false;

    for (line_number, line) in content.lines().enumerate() {
        if line.trim() == "---" {
            in_yaml_frontmatter = !in_yaml_frontmatter;
            continue;
        }
        if in_yaml_frontmatter {
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(heading) = extract_heading_content(trimmed) {
            if page.title.is_empty() {
                page.title = heading;
            }
            continue;
        }

        let Some((row_id, label)) = extract_course(trimmed) else {
            bail!(
                "{}:{}: expected '- <id>: <label>', found '{}'",
                file_path,
                line_number + 1,
                trimmed
            );
        };

        page.add_row(row_id, label)
            .with_context(|| format!("{}:{}", file_path, line_number + 1))?;
    }

    Ok(page)
}

fn extract_heading_content(line: &str) -> Option<String> {
    let content = line.trim_start_matches('#');
    if content.len() == line.len() {
        return None;
    }
    let content = content.trim();
    (!content.is_empty()).then(|| content.to_string())
}

fn extract_course(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("- ")?.trim_start();

    // "[ ] " / "[x] " boxes are accepted and ignored
    let rest = match rest.strip_prefix('[') {
        Some(boxed) if boxed.len() >= 2 && boxed.as_bytes()[1] == b']' => {
            boxed[2..].trim_start()
        }
        _ => rest,
    };

    let (row_id, label) = rest.split_once(':')?;
    let row_id = row_id.trim();
    let label = label.trim();
    if row_id.is_empty() || label.is_empty() {
        return None;
    }
    Some((row_id, label))
}
