//! Terminal formatting for `CmdResult` values.
//!
//! Each `render_*` function returns a string so it can be tested; the
//! `print_*` wrappers write it to stdout. Column widths are measured with
//! `unicode-width`, since most labels are full-width Japanese text.

use colored::Colorize;
use stylefinder::commands::{
    CmdMessage, CompareView, DetailView, GridView, MessageLevel, ToneCount,
};
use stylefinder::favorites::FavoriteSet;
use stylefinder::model::{StyleRecord, ToneCategory, ALL_ID};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 12;
const COLUMN_WIDTH: usize = 22;
const LABEL_WIDTH: usize = 12;
const FAVORITE_MARKER: &str = "★";
const APPLIED_MARKER: &str = "✓";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// One line per style: favorite and applied markers, id, names and tone.
pub fn render_style_list<'a>(
    styles: impl IntoIterator<Item = &'a StyleRecord>,
    favorites: &FavoriteSet,
    applied: Option<&str>,
) -> String {
    let mut output = String::new();
    for style in styles {
        let fav = if favorites.contains(&style.id) {
            FAVORITE_MARKER
        } else {
            " "
        };
        let mark = if applied == Some(style.id.as_str()) {
            APPLIED_MARKER
        } else {
            " "
        };
        let tone = style.tone.as_str();
        let fixed = 2 + 2 + ID_WIDTH + 1 + 1 + tone.width();
        let names = format!("{} / {}", style.name_jp, style.name);
        let names = truncate_to_width(&names, LINE_WIDTH.saturating_sub(fixed));
        let padding = " ".repeat(LINE_WIDTH.saturating_sub(fixed + names.width()));

        output.push_str(&format!(
            "{} {} {} {}{} {}\n",
            fav.yellow(),
            mark.green(),
            pad_to_width(&style.id, ID_WIDTH).cyan(),
            names,
            padding,
            tone.dimmed()
        ));
    }
    output
}

pub fn print_style_list(styles: &[StyleRecord], favorites: &FavoriteSet, applied: Option<&str>) {
    print!("{}", render_style_list(styles, favorites, applied));
}

/// The grouped browser: the total matching the search alone, then one
/// section per tone and a favorites section, each skipped when empty.
pub fn render_grid(
    view: &GridView<'_>,
    tones: &[ToneCategory],
    favorites: &FavoriteSet,
    applied: Option<&str>,
) -> String {
    let label = |id: &str, fallback: &str| {
        tones
            .iter()
            .find(|t| t.id == id)
            .map(|t| format!("{} {}", t.emoji, t.label))
            .unwrap_or_else(|| fallback.to_string())
    };

    let mut output = format!(
        "{}\n",
        format!("{} ({})", label(ALL_ID, ALL_ID), view.aggregate.len()).bold()
    );
    for (tone, styles) in &view.sections {
        if styles.is_empty() {
            continue;
        }
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            format!("{} ({})", label(tone.as_str(), tone.as_str()), styles.len()).bold()
        ));
        output.push_str(&render_style_list(styles.iter().copied(), favorites, applied));
    }
    if !view.favorites.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            format!("{} お気に入り ({})", FAVORITE_MARKER, view.favorites.len()).bold()
        ));
        output.push_str(&render_style_list(
            view.favorites.iter().copied(),
            favorites,
            applied,
        ));
    }
    output
}

pub fn render_tone_counts(counts: &[ToneCount]) -> String {
    let mut output = String::new();
    for count in counts {
        let label = format!("{} {}", count.emoji, count.label);
        output.push_str(&format!(
            "{} {} {}\n",
            pad_to_width(&label, 20),
            format!("{:>3}", count.count).bold(),
            count.id.dimmed()
        ));
    }
    output
}

pub fn render_detail(detail: &DetailView, with_document: bool) -> String {
    let style = &detail.style;
    let mut lines = vec![
        format!("{} {}", detail.title.bold(), detail.purpose_label.dimmed()),
        style.desc.clone(),
    ];
    if !style.tags.is_empty() {
        let tags: Vec<String> = style.tags.iter().map(|t| format!("#{}", t)).collect();
        lines.push(format!("{} {}", "タグ:".dimmed(), tags.join(" ")));
    }
    let colors: Vec<String> = style
        .colors
        .iter()
        .map(|c| format!("{} {}", c.name, c.hex))
        .collect();
    lines.push(format!("{} {}", "配色:".dimmed(), colors.join(" / ")));
    let fonts: Vec<String> = style
        .fonts
        .iter()
        .map(|f| format!("{}: {}", f.label, f.name))
        .collect();
    lines.push(format!("{} {}", "フォント:".dimmed(), fonts.join(" / ")));
    lines.push(format!("{} {}", "特徴:".dimmed(), style.features.join("、")));
    if !detail.preview.is_empty() {
        lines.push(format!("{} {}", "プレビュー:".dimmed(), detail.preview));
    }

    let mut badges = vec![if detail.is_applied {
        detail.apply_label.green().to_string()
    } else {
        detail.apply_label.to_string()
    }];
    if detail.is_favorite {
        badges.push(format!("{} お気に入り", FAVORITE_MARKER).yellow().to_string());
    }
    if detail.is_compared {
        badges.push("比較中".cyan().to_string());
    }
    lines.push(format!("[{}]", badges.join("] [")));

    let mut output = lines.join("\n");
    output.push('\n');
    if with_document {
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&detail.document);
        output.push('\n');
    }
    output
}

/// Side-by-side table, one column per compared style.
pub fn render_compare(view: &CompareView) -> String {
    type Cell = fn(&stylefinder::commands::compare::CompareColumn) -> String;
    let rows: [(&str, Cell); 6] = [
        ("スタイル", |c| c.style.name_jp.clone()),
        ("トーン", |c| c.tone_label.clone()),
        ("アクセント", |c| c.accent_hex.clone()),
        ("配色", |c| {
            c.style
                .colors
                .iter()
                .map(|col| col.hex.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        }),
        ("見出し", |c| {
            c.style.fonts.first().map(|f| f.name.clone()).unwrap_or_default()
        }),
        ("特徴", |c| c.style.features.first().cloned().unwrap_or_default()),
    ];

    let mut output = String::new();
    for (label, cell) in rows {
        output.push_str(&pad_to_width(label, LABEL_WIDTH).dimmed().to_string());
        for column in &view.columns {
            let text = truncate_to_width(&cell(column), COLUMN_WIDTH);
            output.push_str(&pad_to_width(&text, COLUMN_WIDTH));
        }
        let trimmed = output.trim_end_matches(' ').len();
        output.truncate(trimmed);
        output.push('\n');
    }
    output
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
