// src/specs/summary.rs
// Job composition from the all-encounters summary page.
//
// Each participant shows up as a block carrying class="composition-entry";
// the job name is the alt text of the job icon inside the block, with the
// stripped inner text as fallback.

use crate::core::html::{attr_value, inner_after_open_tag, next_tag_block_ci, strip_tags, to_lower};
use crate::core::sanitize::normalize_entities;

pub const ENTRY_CLASS: &str = "composition-entry";

/// Extract one job identifier per composition entry. Document order.
pub fn extract_jobs(doc: &str) -> Vec<String> {
    let lc = to_lower(doc);
    let needle = ENTRY_CLASS;

    let mut jobs = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find(needle) {
        let at = pos + rel;
        pos = at + needle.len();

        let Some(block) = enclosing_block(doc, at) else { continue };

        let job = attr_value(block, "alt")
            .map(|a| strip_tags(normalize_entities(&a)))
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| strip_tags(normalize_entities(&inner_after_open_tag(block))));

        if !job.is_empty() {
            jobs.push(job);
        }
    }

    jobs
}

/// The full tag block whose opening tag contains byte offset `at`.
fn enclosing_block(doc: &str, at: usize) -> Option<&str> {
    let tag_start = doc[..at].rfind('<')?;
    let name: String = doc[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        return None;
    }

    let open = join!("<", &name);
    let close = join!("</", &name, ">");
    let (s, e) = next_tag_block_ci(doc, &open, &close, tag_start)?;
    Some(&doc[s..e])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobs_from_icon_alt() {
        let doc = r#"
            <table class="composition-table">
            <td class="composition-entry"><img src="x.png" alt="Gunbreaker"> P1</td>
            <td class="composition-entry"><img src="y.png" alt="Sage"> P2</td>
            </table>"#;
        assert_eq!(extract_jobs(doc), vec![s!("Gunbreaker"), s!("Sage")]);
    }

    #[test]
    fn falls_back_to_inner_text() {
        let doc = r#"<span class="composition-entry">Warrior</span>"#;
        assert_eq!(extract_jobs(doc), vec![s!("Warrior")]);
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(extract_jobs("<html><body>nope</body></html>").is_empty());
    }
}
