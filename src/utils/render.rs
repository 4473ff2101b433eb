use crate::domain::model::CapturedEvent;
use crate::utils::error::Result;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;

/// Renders one event as a single diagnostic line:
/// `LEVEL timestamp [thread] target - message {fields} <context> error: ...`
pub fn render_event(event: &CapturedEvent) -> String {
    let mut line = format!(
        "{:>5} {} [{}] {} - {}",
        event.level,
        event.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        event.thread_name,
        event.target,
        event.message
    );
    if !event.fields.is_empty() {
        let fields = event
            .fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(line, " {{{}}}", fields);
    }
    if !event.context.is_empty() {
        let context = event
            .context
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(line, " <{}>", context);
    }
    if let Some(error) = &event.error {
        let _ = write!(line, "\n\terror: {}", error);
    }
    line
}

/// Dumps a buffer snapshot to a writer, one rendered event per line. Handy in
/// a failing test's teardown to see everything that was actually logged.
pub fn write_events<W: Write>(events: &[Arc<CapturedEvent>], out: &mut W) -> Result<()> {
    for event in events {
        writeln!(out, "{}", render_event(event))?;
    }
    Ok(())
}

pub fn events_to_json(events: &[Arc<CapturedEvent>]) -> Result<String> {
    let events: Vec<&CapturedEvent> = events.iter().map(Arc::as_ref).collect();
    Ok(serde_json::to_string_pretty(&events)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeMap;
    use tracing::Level;

    fn sample_event() -> CapturedEvent {
        let mut fields = BTreeMap::new();
        fields.insert("answer".to_string(), 42.into());
        let mut context = BTreeMap::new();
        context.insert("request".to_string(), "r-1".to_string());
        CapturedEvent {
            seq: 1,
            level: Level::INFO,
            target: "worker".to_string(),
            message: "job finished".to_string(),
            fields,
            context,
            error: None,
            thread_name: "main".to_string(),
            timestamp: chrono::Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap(),
            module_path: None,
            file: None,
            line: None,
        }
    }

    #[test]
    fn renders_level_thread_target_and_message() {
        let line = render_event(&sample_event());
        assert_eq!(
            line,
            " INFO 2026-08-25T12:00:00.000Z [main] worker - job finished {answer=42} <request=r-1>"
        );
    }

    #[test]
    fn renders_error_tail_on_its_own_line() {
        let mut event = sample_event();
        event.error = Some("connection refused".to_string());
        let line = render_event(&event);
        assert!(line.ends_with("\n\terror: connection refused"));
    }

    #[test]
    fn write_events_emits_one_line_per_event() {
        let events = vec![Arc::new(sample_event()), Arc::new(sample_event())];
        let mut out = Vec::new();
        write_events(&events, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn json_dump_includes_level_and_fields() {
        let json = events_to_json(&[Arc::new(sample_event())]).unwrap();
        assert!(json.contains("\"level\": \"INFO\""));
        assert!(json.contains("\"answer\": 42"));
    }
}
