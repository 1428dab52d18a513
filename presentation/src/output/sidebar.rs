//! Sidebar formatting
//!
//! Renders the projector's day groups as a list the REPL prints for
//! `/list`: group labels, then `[id] title  HH:MM` per conversation, so a
//! conversation can be opened with `/open <id>`.

use assist_domain::SidebarGroup;
use colored::Colorize;

pub struct SidebarView;

impl SidebarView {
    pub fn format(groups: &[SidebarGroup]) -> String {
        if groups.is_empty() {
            return format!("{}\n", "No conversations yet.".dimmed());
        }

        let mut output = String::new();
        for group in groups {
            output.push_str(&format!("{}\n", group.label.cyan().bold()));
            for summary in &group.entries {
                output.push_str(&format!(
                    "  [{}] {}  {}\n",
                    summary.id,
                    summary.title,
                    summary.updated_at.format("%H:%M").to_string().dimmed()
                ));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_domain::{ConversationId, ConversationSummary, project_at};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_groups_render_labels_and_ids() {
        colored::control::set_override(false);
        let now = Utc.with_ymd_and_hms(2025, 8, 27, 12, 0, 0).unwrap();
        let index = vec![
            ConversationSummary {
                id: ConversationId::from(4),
                title: "Hostel accommodation".into(),
                created_at: now,
                updated_at: now,
            },
            ConversationSummary {
                id: ConversationId::from(2),
                title: "School fees".into(),
                created_at: now,
                updated_at: now - chrono::Duration::days(1),
            },
        ];

        let output = SidebarView::format(&project_at(now, &index));

        assert!(output.contains("Today"));
        assert!(output.contains("Yesterday"));
        assert!(output.contains("[4] Hostel accommodation"));
        assert!(output.contains("[2] School fees"));
    }

    #[test]
    fn test_empty_sidebar() {
        colored::control::set_override(false);
        assert!(SidebarView::format(&[]).contains("No conversations yet."));
    }
}
