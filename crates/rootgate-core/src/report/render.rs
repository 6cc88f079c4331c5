use crate::TOOL_NAME;
use crate::report::model::Report;

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, report.tool.version));
    out.push_str(&format!(
        "Checklist: {} ({})\n",
        report.checklist.version, report.checklist.source
    ));
    out.push_str(&format!(
        "Verdict: {}\n",
        if report.verdict.compromised {
            "COMPROMISED"
        } else {
            "CLEAN"
        }
    ));
    out.push_str("Findings:\n");
    for f in &report.findings {
        match (&f.matched, &f.reason) {
            (Some(matched), _) => {
                out.push_str(&format!("  - {} [{}] {}\n", f.probe_id, f.status, matched));
            }
            (None, Some(reason)) => {
                out.push_str(&format!("  - {} [{}] {}\n", f.probe_id, f.status, reason));
            }
            (None, None) => {
                out.push_str(&format!("  - {} [{}]\n", f.probe_id, f.status));
            }
        }
    }
    out
}
