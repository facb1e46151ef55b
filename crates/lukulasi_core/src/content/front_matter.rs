//! Minimal front-matter parsing for content markdown files.

use std::collections::HashMap;

/// Parsed front-matter header plus the remaining body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub fields: HashMap<String, String>,
    pub tags: Vec<String>,
}

/// Split a markdown document into front matter and body.
///
/// The header is a leading `---` fence containing `key: value` lines; `tags`
/// accepts an inline `[a, b]` list. A document without a fence parses as an
/// empty header with the full text as body.
pub fn parse(document: &str) -> (FrontMatter, String) {
    let mut matter = FrontMatter::default();

    let Some(rest) = document.strip_prefix("---") else {
        return (matter, document.to_string());
    };
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    let Some(end) = rest.find("\n---") else {
        return (matter, document.to_string());
    };

    let header = &rest[..end];
    let body = rest[end + 4..].trim_start_matches('\n').to_string();

    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim().trim_matches('"').trim_matches('\'');
        if key == "tags" {
            matter.tags = parse_tag_list(value);
        } else if !key.is_empty() {
            matter.fields.insert(key, value.to_string());
        }
    }

    (matter, body)
}

fn parse_tag_list(value: &str) -> Vec<String> {
    let inner = value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']');
    inner
        .split(',')
        .map(|tag| tag.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
