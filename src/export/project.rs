//! Row to record projections.

use super::{ExportOptions, ExportRecord};
use crate::config::LinkExport;
use crate::pitch::PitchCandidate;
use crate::results::ResultRow;

pub const EVALUATION_HEADERS: [&str; 24] = [
    "红人名称",
    "红人ID",
    "频道链接",
    "粉丝数",
    "粉丝量级",
    "国家",
    "红人类型",
    "质量评估",
    "业务匹配度",
    "近10条均播",
    "互动率",
    "商单数量",
    "预估CPM",
    "建议报价",
    "近3月视频数",
    "近10条中位数",
    "近10条短视频",
    "近10条长视频",
    "商单均播",
    "商单中位数",
    "商单最高观看",
    "商单最高互动率",
    "商单均播占比",
    "商单视频链接",
];

pub const SEARCH_HEADERS: [&str; 10] = [
    "红人名称",
    "粉丝数",
    "粉丝量级",
    "视频数",
    "总观看次数",
    "平均观看",
    "国家",
    "命中关键词",
    "频道简介",
    "频道URL",
];

pub const PITCH_HEADERS: [&str; 9] = [
    "频道名称",
    "频道链接",
    "订阅数",
    "互动率",
    "国家",
    "邮箱状态",
    "邮箱",
    "预估 CPM",
    "建议报价",
];

/// `0.0523` -> `5.23%`. Missing values export as an empty cell.
pub fn format_percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}%", v * 100.0))
        .unwrap_or_default()
}

/// Fixed two-decimal ratio.
pub fn format_ratio(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

/// Dollar amount as stored, e.g. `$12.5`.
pub fn format_currency(value: Option<f64>) -> String {
    value.map(|v| format!("${}", v)).unwrap_or_default()
}

fn number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn links(all: &[String], options: &ExportOptions) -> String {
    match options.links {
        LinkExport::All => all.join("\n"),
        LinkExport::Truncated => {
            let limit = options.link_limit.max(1);
            let mut cell = all
                .iter()
                .take(limit)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n");
            if all.len() > limit {
                cell.push_str(&format!("\n+{} 更多", all.len() - limit));
            }
            cell
        }
    }
}

/// Keywords worth showing from a raw SEO keyword string.
///
/// Quotes are stripped, the rest is split on spaces and tokens of at most
/// two characters are dropped.
pub fn search_keywords(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    raw.replace('"', "")
        .split(' ')
        .filter(|k| k.chars().count() > 2)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Full-fidelity evaluation records.
pub fn project_evaluation(rows: &[&ResultRow], options: &ExportOptions) -> Vec<ExportRecord> {
    rows.iter()
        .map(|row| {
            let mut r = ExportRecord::new();
            r.push("红人名称", row.name.clone());
            r.push("红人ID", format!("@{}", row.influencer_id));
            r.push("频道链接", text(row.channel_url.as_ref()));
            r.push("粉丝数", row.subscriber_count.to_string());
            r.push("粉丝量级", row.tier().label());
            r.push("国家", text(row.country.as_ref()));
            r.push(
                "红人类型",
                row.channel_type.clone().unwrap_or_else(|| "-".to_string()),
            );
            r.push("质量评估", number(row.quality_score));
            r.push("业务匹配度", number(row.match_score));
            r.push("近10条均播", number(row.avg_views_last_10));
            r.push("互动率", format_percent(row.engagement_rate));
            r.push("商单数量", number(row.sponsored_count));
            r.push("预估CPM", format_currency(row.estimated_cpm));
            r.push("建议报价", format_currency(row.suggested_price));
            r.push("近3月视频数", number(row.videos_last_3_months));
            r.push("近10条中位数", number(row.median_views_last_10));
            r.push("近10条短视频", number(row.short_videos_last_10));
            r.push("近10条长视频", number(row.long_videos_last_10));
            r.push("商单均播", number(row.sponsored_avg_views));
            r.push("商单中位数", number(row.sponsored_median_views));
            r.push("商单最高观看", number(row.sponsored_max_views));
            r.push("商单最高互动率", format_percent(row.sponsored_max_engagement));
            r.push("商单均播占比", format_ratio(row.sponsored_avg_views_ratio));
            r.push("商单视频链接", links(&row.sponsored_video_links, options));
            r
        })
        .collect()
}

/// Search task records.
pub fn project_search(rows: &[&ResultRow]) -> Vec<ExportRecord> {
    rows.iter()
        .map(|row| {
            let mut r = ExportRecord::new();
            r.push("红人名称", row.name.clone());
            r.push("粉丝数", row.subscriber_count.to_string());
            r.push("粉丝量级", row.tier().label());
            r.push("视频数", number(row.video_count));
            r.push("总观看次数", number(row.total_views));
            r.push("平均观看", number(row.avg_views));
            r.push("国家", text(row.country.as_ref()));
            r.push("命中关键词", search_keywords(row.seo_keywords.as_deref()));
            r.push("频道简介", text(row.channel_description.as_ref()));
            r.push("频道URL", text(row.channel_url.as_ref()));
            r
        })
        .collect()
}

/// Outreach list records.
pub fn project_pitch(candidates: &[PitchCandidate]) -> Vec<ExportRecord> {
    candidates
        .iter()
        .map(|c| {
            let mut r = ExportRecord::new();
            r.push("频道名称", c.name.clone());
            r.push("频道链接", text(c.channel_url.as_ref()));
            r.push("订阅数", c.subscriber_count.to_string());
            r.push("互动率", format_percent(c.engagement_rate));
            r.push("国家", text(c.country.as_ref()));
            r.push("邮箱状态", c.email_status.as_str());
            r.push("邮箱", c.email.clone().unwrap_or_else(|| "N/A".to_string()));
            r.push("预估 CPM", number(c.estimated_cpm));
            r.push("建议报价", number(c.suggested_price));
            r
        })
        .collect()
}
