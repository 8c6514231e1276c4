use chrono::{DateTime, SecondsFormat};
use dashscan_engine::{ProgressEvent, SearchResult};

const PERMALINK_BASE: &str = "https://news.ycombinator.com/item?id=";

pub fn progress_line(event: ProgressEvent) -> &'static str {
    match event {
        ProgressEvent::Retrieving => "Retrieving submissions...",
        ProgressEvent::Searching => "Searching...",
    }
}

pub fn render(username: &str, result: &SearchResult) -> String {
    let Some(matched) = &result.matched else {
        return format!("No matching submission found for {username}.\n");
    };

    let item = &matched.item;
    let posted = DateTime::from_timestamp(item.time, 0)
        .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| item.time.to_string());

    format!(
        "Found a match for {username}:\n  \
         item:   {id} ({kind})\n  \
         posted: {posted}\n  \
         link:   {base}{id}\n  \
         text:   {text}\n",
        base = PERMALINK_BASE,
        id = item.id,
        kind = item.kind,
        text = matched.text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashscan_engine::{Item, ItemKind, SubmissionMatch};

    #[test]
    fn renders_not_found() {
        assert_eq!(
            render("pg", &SearchResult::not_found()),
            "No matching submission found for pg.\n"
        );
    }

    #[test]
    fn renders_match_with_utc_time_and_link() {
        let item = Item {
            id: 123,
            kind: ItemKind::Comment,
            title: None,
            text: Some("so \u{2014} there".into()),
            time: 1_600_000_000,
            deleted: false,
        };
        let result = SearchResult::found_at(SubmissionMatch {
            item,
            text: "so \u{2014} there".into(),
        });

        assert_eq!(
            render("pg", &result),
            "Found a match for pg:\n\
             \x20 item:   123 (comment)\n\
             \x20 posted: 2020-09-13T12:26:40Z\n\
             \x20 link:   https://news.ycombinator.com/item?id=123\n\
             \x20 text:   so \u{2014} there\n"
        );
    }
}
