use anyhow::{Context, Result};
use serde_json::Value;

/// Parses an event document. Strict JSON is tried first; JSON5 covers the
/// JavaScript literal form (`[{ id: 1, start: 30, end: 150 }]`).
///
/// Only the syntax is checked here. Shape and field checks belong to
/// [`events_from_value`](crate::layout::events_from_value).
pub fn parse_events(input: &str) -> Result<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(input) {
        return Ok(value);
    }
    json5::from_str::<Value>(input).context("input is neither JSON nor JSON5")
}

/// Pulls the first fenced ```` ```json ```` or ```` ```events ```` block out of
/// a Markdown document, or `None` when there is none.
pub fn extract_events_block(input: &str) -> Option<String> {
    let mut in_block = false;
    let mut fence = String::new();
    let mut current = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim();
        if !in_block {
            if let Some(start_fence) = detect_events_fence(trimmed) {
                in_block = true;
                fence = start_fence;
            }
            continue;
        }
        if is_fence_end(trimmed, &fence) {
            return Some(current.join("\n"));
        }
        current.push(line);
    }
    None
}

fn detect_events_fence(line: &str) -> Option<String> {
    for marker in ["```", "~~~"] {
        if let Some(rest) = line.strip_prefix(marker) {
            let info = rest.trim_start_matches(['`', '~']).trim();
            if matches!(info, "json" | "json5" | "events") {
                return Some(marker.to_string());
            }
        }
    }
    None
}

fn is_fence_end(line: &str, fence: &str) -> bool {
    if !line.starts_with(fence) {
        return false;
    }
    line[fence.len()..].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Event;
    use crate::layout::events_from_value;

    #[test]
    fn parses_strict_json() {
        let value = parse_events(r#"[{"id": 1, "start": 30, "end": 150}]"#).unwrap();
        assert_eq!(events_from_value(&value).unwrap(), vec![Event::new(1, 30, 150)]);
    }

    #[test]
    fn parses_javascript_literal() {
        let value = parse_events(
            "[\n  { id: 1, start: 30, end: 150 },\n  { id: 2, start: 540, end: 600 },\n]",
        )
        .unwrap();
        assert_eq!(
            events_from_value(&value).unwrap(),
            vec![Event::new(1, 30, 150), Event::new(2, 540, 600)]
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_events("[{ id: ").is_err());
    }

    #[test]
    fn extracts_fenced_block() {
        let input = r#"
# Tuesday

```json
[{ "id": 1, "start": 0, "end": 60 }]
```

~~~events
ignored
~~~
"#;
        let block = extract_events_block(input).unwrap();
        assert!(block.contains("\"start\": 0"));
        assert!(extract_events_block("no blocks here").is_none());
    }
}
