//! Text layout of the third-party notice document.

use crate::models::PackageRecord;

pub const TITLE: &str = "THIRD-PARTY SOFTWARE NOTICES AND INFORMATION";
pub const DO_NOT_TRANSLATE: &str = "Do Not Translate or Localize";
const SEPARATOR_WIDTH: usize = 41;
const BOM: char = '\u{feff}';

/// Lines of the notice for `records`, in the order given.
///
/// `preamble` is the boilerplate paragraph with the task name already
/// substituted (see [`Config::preamble_for`](crate::config::Config::preamble_for)).
pub fn compose<'a>(preamble: String, records: &'a [PackageRecord]) -> impl Iterator<Item = String> + 'a {
    let header = [
        String::new(),
        TITLE.to_string(),
        DO_NOT_TRANSLATE.to_string(),
        String::new(),
        preamble,
        String::new(),
    ];

    let index = records
        .iter()
        .enumerate()
        .map(|(i, record)| index_line(i + 1, record));

    header
        .into_iter()
        .chain(index)
        .chain([String::new(), String::new()])
        .chain(records.iter().flat_map(license_block))
}

fn index_line(n: usize, record: &PackageRecord) -> String {
    match record.display_url() {
        Some(url) => format!("{}.\t{} ({})", n, record.name, url),
        None => format!("{}.\t{}", n, record.name),
    }
}

fn license_block(record: &PackageRecord) -> [String; 6] {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    [
        format!("%% {} NOTICES, INFORMATION, AND LICENSE BEGIN HERE", record.name),
        separator.clone(),
        record
            .license_text
            .trim_matches(|c: char| c.is_whitespace() || c == BOM)
            .to_string(),
        separator,
        format!("END OF {} NOTICES, INFORMATION, AND LICENSE", record.name),
        String::new(),
    ]
}
