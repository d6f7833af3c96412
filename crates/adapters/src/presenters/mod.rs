use launchpad_application::{ApplicationCard, ApplicationPage};
use launchpad_domain::{ApplicationRecord, ImportEvent, ItemOutcome};
use serde_json::json;

pub fn present_application_row(card: &ApplicationCard) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        card.record.id.get(),
        card.record.title,
        card.record.subtitle,
        card.record.command,
        card.poster
    )
}

pub fn present_application(record: &ApplicationRecord) -> String {
    format!(
        "{} (id {})\n- Platform: {}\n- Working directory: {}\n- Command: {}\n- Picture: {}",
        record.title,
        record.id.get(),
        record.subtitle,
        record.cwd.as_deref().unwrap_or("N/A"),
        record.command,
        record.picture.as_deref().unwrap_or("N/A")
    )
}

pub fn present_page_footer(page: &ApplicationPage) -> String {
    let mut footer = format!(
        "page {} of {} ({} applications)",
        page.window.page, page.window.total_pages, page.total_items
    );
    if page.window.has_previous() {
        footer.push_str(&format!(", previous: --page {}", page.window.page - 1));
    }
    if page.window.has_next() {
        footer.push_str(&format!(", next: --page {}", page.window.page + 1));
    }
    footer
}

pub fn present_page_json(page: &ApplicationPage) -> String {
    let cards: Vec<_> = page
        .cards
        .iter()
        .map(|card| {
            json!({
                "application": card.record,
                "poster": card.poster,
            })
        })
        .collect();

    json!({
        "page": page.window.page,
        "total_pages": page.window.total_pages,
        "total_items": page.total_items,
        "applications": cards,
    })
    .to_string()
}

/// One line per user-visible import event. Plain progress ticks have no line of
/// their own; item results already carry their position.
pub fn present_import_event(event: &ImportEvent) -> Option<String> {
    match event {
        ImportEvent::NothingFound => Some("No Playnite shortcuts found.".to_string()),
        ImportEvent::Started { total } => Some(format!(
            "Found {total} Playnite shortcut(s). Starting scan..."
        )),
        ImportEvent::ItemResult {
            current,
            total,
            name,
            outcome,
        } => Some(match outcome {
            ItemOutcome::Imported { id } => {
                format!("Imported: {name} ({current}/{total}, id {})", id.get())
            }
            ItemOutcome::Skipped { reason } => {
                format!("Skipped: {name} ({current}/{total}): {reason}")
            }
            ItemOutcome::Failed { reason } => {
                format!("Failed: {name} ({current}/{total}): {reason}")
            }
        }),
        ImportEvent::Progress { .. } => None,
        ImportEvent::Completed(report) => Some(format!(
            "Scan complete! imported={}, skipped={}, failed={}",
            report.imported, report.skipped, report.failed
        )),
    }
}

/// Machine-readable form of an import event, one JSON object per line.
pub fn present_import_event_json(event: &ImportEvent) -> String {
    json!(event).to_string()
}

#[cfg(test)]
mod tests {
    use launchpad_domain::{AppId, ImportReport, PageRequest};

    use super::*;

    fn card(title: &str, picture: Option<&str>) -> ApplicationCard {
        let record = ApplicationRecord {
            id: AppId::new(3).expect("id"),
            picture: picture.map(str::to_string),
            title: title.to_string(),
            subtitle: "Playnite".to_string(),
            cwd: None,
            command: "start playnite://playnite/start/x".to_string(),
        };
        ApplicationCard {
            poster: picture.unwrap_or("assets/placeholder.jpg").to_string(),
            record,
        }
    }

    fn page(cards: Vec<ApplicationCard>, requested: usize, total_items: usize) -> ApplicationPage {
        ApplicationPage {
            cards,
            window: PageRequest::new(requested, 2)
                .expect("page")
                .window(total_items),
            total_items,
        }
    }

    #[test]
    fn row_shows_resolved_poster() {
        let row = present_application_row(&card("Celeste", None));
        assert_eq!(
            row,
            "3\tCeleste\tPlaynite\tstart playnite://playnite/start/x\tassets/placeholder.jpg"
        );
    }

    #[test]
    fn detail_marks_missing_fields() {
        let text = present_application(&card("Celeste", None).record);
        assert!(text.contains("- Working directory: N/A"));
        assert!(text.contains("- Picture: N/A"));
    }

    #[test]
    fn footer_points_at_neighbour_pages() {
        let footer = present_page_footer(&page(vec![], 2, 5));
        assert_eq!(
            footer,
            "page 2 of 3 (5 applications), previous: --page 1, next: --page 3"
        );
    }

    #[test]
    fn json_page_lists_applications() {
        let rendered = present_page_json(&page(vec![card("Celeste", Some("c.png"))], 1, 1));
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        assert_eq!(value["total_pages"], 1);
        assert_eq!(value["applications"][0]["application"]["id"], 3);
        assert_eq!(value["applications"][0]["poster"], "c.png");
    }

    #[test]
    fn import_events_render_as_log_lines() {
        assert_eq!(
            present_import_event(&ImportEvent::Started { total: 3 }).as_deref(),
            Some("Found 3 Playnite shortcut(s). Starting scan...")
        );
        assert_eq!(
            present_import_event(&ImportEvent::ItemResult {
                current: 2,
                total: 3,
                name: "Broken".to_string(),
                outcome: ItemOutcome::Skipped {
                    reason: "invalid shortcut, missing URL".to_string(),
                },
            })
            .as_deref(),
            Some("Skipped: Broken (2/3): invalid shortcut, missing URL")
        );
        assert_eq!(
            present_import_event(&ImportEvent::Progress {
                current: 2,
                total: 3
            }),
            None
        );
        assert_eq!(
            present_import_event(&ImportEvent::Completed(ImportReport {
                found: 3,
                imported: 2,
                skipped: 1,
                failed: 0,
            }))
            .as_deref(),
            Some("Scan complete! imported=2, skipped=1, failed=0")
        );
    }

    #[test]
    fn import_events_serialize_with_tags() {
        let line = present_import_event_json(&ImportEvent::ItemResult {
            current: 1,
            total: 3,
            name: "Celeste".to_string(),
            outcome: ItemOutcome::Imported {
                id: AppId::new(7).expect("id"),
            },
        });
        let value: serde_json::Value = serde_json::from_str(&line).expect("json");
        assert_eq!(value["event"], "item_result");
        assert_eq!(value["outcome"]["status"], "imported");
        assert_eq!(value["outcome"]["id"], 7);

        let done = present_import_event_json(&ImportEvent::Completed(ImportReport::new(0)));
        let value: serde_json::Value = serde_json::from_str(&done).expect("json");
        assert_eq!(value["event"], "completed");
        assert_eq!(value["found"], 0);
    }
}
