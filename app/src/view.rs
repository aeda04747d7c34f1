use doc_analysis_client::{Notice, Notifier, WorkflowSnapshot};
use std::fmt::Write;

pub const TITLE: &str = "AI-Powered Document Analysis";
const BUSY_LABEL: &str = "Processing...";

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        println!("\n[!] {}", notice);
    }
}

pub fn process_button(snapshot: &WorkflowSnapshot) -> &'static str {
    if snapshot.processing {
        BUSY_LABEL
    } else {
        "Process PDFs"
    }
}

pub fn ask_button(snapshot: &WorkflowSnapshot) -> &'static str {
    if snapshot.query_loading {
        BUSY_LABEL
    } else {
        "Ask"
    }
}

pub fn render_upload(snapshot: &WorkflowSnapshot) -> String {
    let mut out = String::from("## Upload PDFs\n");
    if snapshot.file_names.is_empty() {
        out.push_str("Selected: (none)\n");
    } else {
        let _ = writeln!(out, "Selected: {}", snapshot.file_names.join(", "));
    }
    if snapshot.uploading {
        out.push_str("[Uploading...]\n");
    }
    if !snapshot.upload_result.is_empty() {
        let _ = writeln!(out, "{}", snapshot.upload_result);
    }
    out
}

pub fn render_process(snapshot: &WorkflowSnapshot) -> String {
    let mut out = String::from("## Process PDFs\n");
    let _ = writeln!(out, "[{}]", process_button(snapshot));
    if let Some(chunks) = snapshot.chunks_stored {
        let _ = writeln!(out, "Chunks stored: {}", chunks);
    }
    out
}

pub fn render_query(snapshot: &WorkflowSnapshot) -> String {
    let mut out = String::from("## Query Documents\n");
    let _ = writeln!(out, "> {}", snapshot.query_text);
    let _ = writeln!(out, "[{}]", ask_button(snapshot));
    let _ = writeln!(out, "Response: {}", snapshot.query_response);
    for (i, source) in snapshot.query_sources.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", i + 1, source);
    }
    out
}

pub fn render(snapshot: &WorkflowSnapshot) -> String {
    format!(
        "# {}\n\n{}\n{}\n{}",
        TITLE,
        render_upload(snapshot),
        render_process(snapshot),
        render_query(snapshot)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_follow_flags() {
        let mut snapshot = WorkflowSnapshot::default();
        assert_eq!(process_button(&snapshot), "Process PDFs");
        assert_eq!(ask_button(&snapshot), "Ask");

        snapshot.processing = true;
        assert_eq!(process_button(&snapshot), "Processing...");
        assert_eq!(ask_button(&snapshot), "Ask");

        snapshot.query_loading = true;
        assert_eq!(ask_button(&snapshot), "Processing...");
    }

    #[test]
    fn page_shows_every_section() {
        let snapshot = WorkflowSnapshot {
            file_names: vec!["a.pdf".to_string(), "b.pdf".to_string()],
            upload_result: "Hello".to_string(),
            query_text: "What is X?".to_string(),
            query_response: "X is a letter.".to_string(),
            query_sources: vec!["X is a letter".to_string()],
            chunks_stored: Some(4),
            ..WorkflowSnapshot::default()
        };

        let page = render(&snapshot);
        assert!(page.starts_with("# AI-Powered Document Analysis"));
        assert!(page.contains("Selected: a.pdf, b.pdf\nHello\n"));
        assert!(page.contains("[Process PDFs]\nChunks stored: 4\n"));
        assert!(page.contains("> What is X?\n[Ask]\nResponse: X is a letter.\n  [1] X is a letter\n"));
    }

    #[test]
    fn empty_selection_is_called_out() {
        let page = render_upload(&WorkflowSnapshot::default());
        assert_eq!(page, "## Upload PDFs\nSelected: (none)\n");
    }
}
