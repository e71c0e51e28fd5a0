//! Results command handler

use anyhow::Result;
use std::path::Path;

use pitchdesk::columns::ColumnField;
use pitchdesk::country::country_name;
use pitchdesk::export::{format_currency, format_percent, format_ratio};
use pitchdesk::filter::{filter_rows, sort_rows, FacetState, SortKey};
use pitchdesk::{Config, PitchList, ResultRow, TaskKind, Workspace};

use super::{load_result_file, render_table};

/// Widest a single table cell may get.
const MAX_CELL_WIDTH: usize = 40;

/// Columns of the fixed search result table.
const SEARCH_COLUMNS: [(&str, &str); 7] = [
    ("influencer", "红人"),
    ("subscriber_tier", "粉丝量级"),
    ("subscriber_count", "粉丝数"),
    ("video_count", "视频数"),
    ("avg_views", "平均观看"),
    ("country", "国家"),
    ("channel_url", "频道URL"),
];

/// Options of one `results` invocation.
pub struct ResultsArgs<'a> {
    pub file: &'a Path,
    pub facets: FacetState,
    pub sort: Option<SortKey>,
    pub page: usize,
    pub all: bool,
}

/// Print filtered rows of a result file as a table.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: ResultsArgs<'_>) -> Result<()> {
    let set = load_result_file(args.file)?;
    let workspace = Workspace::open(Config::load()?)?;

    let mut rows = filter_rows(&set.results, &args.facets);
    if let Some(key) = args.sort {
        sort_rows(&mut rows, key);
    }

    let total = rows.len();
    if let Some(name) = set.task_name() {
        println!("Task: {}", name);
    }
    println!("Rows: {} of {}", total, set.results.len());
    if total == 0 {
        println!("No rows match the current filters.");
        return Ok(());
    }

    let page_size = if args.all {
        total
    } else {
        workspace.config().display.page_size
    };
    let (start, end, page_count) = page_bounds(total, page_size, args.page);
    let shown = &rows[start..end];

    let link_limit = workspace.config().display.link_limit;
    let table = match set.kind() {
        TaskKind::Search => {
            let headers: Vec<&str> = SEARCH_COLUMNS.iter().map(|(_, label)| *label).collect();
            let body: Vec<Vec<String>> = shown
                .iter()
                .map(|row| {
                    SEARCH_COLUMNS
                        .iter()
                        .map(|(key, _)| search_cell(row, key))
                        .collect()
                })
                .collect();
            render_table(&headers, &body, MAX_CELL_WIDTH)
        }
        TaskKind::Evaluate => {
            let columns = workspace.columns().columns();
            let headers: Vec<&str> = columns.iter().map(|c| c.label).collect();
            let body: Vec<Vec<String>> = shown
                .iter()
                .map(|row| {
                    columns
                        .iter()
                        .map(|c| evaluation_cell(row, c, workspace.pitch(), link_limit))
                        .collect()
                })
                .collect();
            render_table(&headers, &body, MAX_CELL_WIDTH)
        }
    };

    println!();
    print!("{}", table);
    if page_count > 1 {
        println!();
        println!(
            "Page {}/{} (use --page N or --all)",
            args.page.clamp(1, page_count),
            page_count
        );
    }
    Ok(())
}

/// Row range for a 1-based page, clamped to the last page.
///
/// Returns `(start, end, page_count)`.
pub fn page_bounds(total: usize, page_size: usize, page: usize) -> (usize, usize, usize) {
    let page_size = page_size.max(1);
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, page_count);
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    (start, end, page_count)
}

fn number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn or_dash(value: String) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value
    }
}

fn country_cell(row: &ResultRow) -> String {
    row.country
        .as_deref()
        .map(|c| format!("{} {}", c, country_name(c)))
        .unwrap_or_else(|| "-".to_string())
}

/// Screen rendering of `links`: the first `limit` plus a `+N 更多` suffix.
pub fn links_cell(links: &[String], limit: usize) -> String {
    if links.is_empty() {
        return "-".to_string();
    }
    let mut cell = links
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    if links.len() > limit {
        cell.push_str(&format!(" +{} 更多", links.len() - limit));
    }
    cell
}

/// Display value of one evaluation column.
pub fn evaluation_cell(
    row: &ResultRow,
    column: &ColumnField,
    pitch: &PitchList,
    link_limit: usize,
) -> String {
    match column.key {
        "influencer" => format!("{} (@{})", row.name, row.influencer_id),
        "subscriber_tier" => row.tier().label().to_string(),
        "country" => country_cell(row),
        "channel_type" => row.channel_type.clone().unwrap_or_else(|| "-".to_string()),
        "is_candidate" => {
            if pitch.contains(&row.influencer_id) {
                "已加入".to_string()
            } else {
                "-".to_string()
            }
        }
        "quality_score" => number(row.quality_score),
        "match_score" => number(row.match_score),
        "avg_views_last_10" => number(row.avg_views_last_10),
        "engagement_rate" => or_dash(format_percent(row.engagement_rate)),
        "sponsored_count" => number(row.sponsored_count),
        "estimated_cpm" => or_dash(format_currency(row.estimated_cpm)),
        "suggested_price" => or_dash(format_currency(row.suggested_price)),
        "videos_last_3_months" => number(row.videos_last_3_months),
        "median_views_last_10" => number(row.median_views_last_10),
        "short_videos_last_10" => number(row.short_videos_last_10),
        "long_videos_last_10" => number(row.long_videos_last_10),
        "sponsored_avg_views" => number(row.sponsored_avg_views),
        "sponsored_median_views" => number(row.sponsored_median_views),
        "sponsored_max_views" => number(row.sponsored_max_views),
        "sponsored_max_engagement" => or_dash(format_percent(row.sponsored_max_engagement)),
        "sponsored_avg_views_ratio" => or_dash(format_ratio(row.sponsored_avg_views_ratio)),
        "sponsored_video_links" => links_cell(&row.sponsored_video_links, link_limit),
        _ => "-".to_string(),
    }
}

fn search_cell(row: &ResultRow, key: &str) -> String {
    match key {
        "influencer" => row.name.clone(),
        "subscriber_tier" => row.tier().label().to_string(),
        "subscriber_count" => row.subscriber_count.to_string(),
        "video_count" => number(row.video_count),
        "avg_views" => number(row.avg_views),
        "country" => country_cell(row),
        "channel_url" => row.channel_url.clone().unwrap_or_else(|| "-".to_string()),
        _ => "-".to_string(),
    }
}
