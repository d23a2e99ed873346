//! # Document Generator
//!
//! Turns a style record and a target medium into the configuration document
//! shown in the detail panel and copied to the clipboard.
//!
//! The document is a pure function of `(style, medium)` and the static
//! tables in [`crate::knowledge`]: no clock, no randomness, no session state.
//!
//! ## Dynamic layouts
//!
//! For the presentation medium each of the twelve slots starts from its base
//! description and collects up to two phrases, in this order:
//!
//! 1. the tone phrase registered for the slot;
//! 2. feature phrases: for each feature (in order) the first table key that
//!    is a substring of it, has a phrase for the slot and whose phrase is not
//!    already collected; at most two features contribute;
//! 3. an accent-color phrase on accent slots, when the third color has a
//!    real name.
//!
//! Every other medium uses its fixed layout list as is.

use crate::knowledge::{
    self, LayoutSlot, MediumProfile, FEATURE_DELIMITER, MAX_FEATURE_PHRASES, MAX_PHRASES,
    PHRASE_DELIMITER, PLACEHOLDER_COLOR_NAME, PRESENTATION_SLOTS,
};
use crate::model::{Color, Medium, StyleRecord};

/// One named block of the layout section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutBlock {
    pub name: &'static str,
    pub desc: String,
}

/// The color highlighted as the style's focal point: the third color when
/// there are more than two, else the last one, else the first.
pub fn accent_color(style: &StyleRecord) -> Option<&Color> {
    let colors = &style.colors;
    let index = if colors.len() > 2 {
        2
    } else {
        colors.len().saturating_sub(1)
    };
    colors.get(index).or_else(|| colors.first())
}

/// Phrases collected for one slot, in queue order, before truncation.
fn queued_phrases(style: &StyleRecord, slot: &LayoutSlot) -> Vec<String> {
    let mut queued: Vec<String> = Vec::new();

    if let Some(phrase) = knowledge::tone_modifier(style.tone, slot.id) {
        queued.push(phrase.to_string());
    }

    let mut from_features = 0;
    for feature in &style.features {
        if from_features >= MAX_FEATURE_PHRASES {
            break;
        }
        let hit = knowledge::feature_modifiers_for(slot.id).find(|(key, phrase)| {
            feature.contains(key) && !queued.iter().any(|q| q == phrase)
        });
        if let Some((_, phrase)) = hit {
            queued.push(phrase.to_string());
            from_features += 1;
        }
    }

    if knowledge::is_accent_slot(slot.id) && style.colors.len() > 2 {
        let accent = &style.colors[2];
        if accent.name != PLACEHOLDER_COLOR_NAME {
            queued.push(format!("{}({})をアクセントに", accent.name, accent.hex));
        }
    }

    queued
}

/// Description of a presentation slot adapted to `style`.
pub fn adapt_slot(style: &StyleRecord, slot: &LayoutSlot) -> String {
    let queued = queued_phrases(style, slot);
    if queued.is_empty() {
        return slot.base.to_string();
    }
    let phrases: Vec<&str> = queued.iter().take(MAX_PHRASES).map(String::as_str).collect();
    format!(
        "{}{}{}",
        slot.base,
        PHRASE_DELIMITER,
        phrases.join(PHRASE_DELIMITER)
    )
}

pub fn layouts_for(style: &StyleRecord, profile: &MediumProfile) -> Vec<LayoutBlock> {
    if profile.is_dynamic() {
        PRESENTATION_SLOTS
            .iter()
            .map(|slot| LayoutBlock {
                name: slot.name,
                desc: adapt_slot(style, slot),
            })
            .collect()
    } else {
        profile
            .layouts
            .iter()
            .map(|l| LayoutBlock {
                name: l.name,
                desc: l.desc.to_string(),
            })
            .collect()
    }
}

pub fn generate(style: &StyleRecord, medium: Medium) -> String {
    let profile = knowledge::profile(medium);
    tracing::debug!(style = %style.id, medium = %medium, "generating document");

    let mut lines: Vec<String> = vec![
        format!("# {}", profile.title),
        format!("# スタイル: {} ({})", style.name, style.name_jp),
        String::new(),
        "全体デザイン設定:".to_string(),
        format!("  トーン: \"{}\"", style.desc),
        format!("  特徴: \"{}\"", style.features.join(FEATURE_DELIMITER)),
        String::new(),
        "  配色パレット:".to_string(),
    ];
    lines.extend(
        style
            .colors
            .iter()
            .map(|c| format!("    {}: \"{}\"", c.name, c.hex)),
    );

    lines.push(String::new());
    lines.push("  タイポグラフィ:".to_string());
    lines.extend(
        style
            .fonts
            .iter()
            .map(|f| format!("    {}: \"{}\"", f.label, f.name)),
    );

    lines.push(String::new());
    lines.push(format!("{}:", profile.layout_heading));
    for block in layouts_for(style, profile) {
        lines.push(format!("    {}:", block.name));
        lines.push(format!("      説明: \"{}\"", block.desc));
    }

    let first_feature = style.features.first().map(String::as_str).unwrap_or("");
    let accent_hex = accent_color(style).map(|c| c.hex.as_str()).unwrap_or("");

    lines.push(String::new());
    lines.push("実装のコツ:".to_string());
    lines.push(format!("  - {}", profile.tips));
    lines.push(format!("  - このスタイルの特徴「{}」を活かす", first_feature));
    lines.push(format!("  - アクセントカラー「{}」を効果的に使用", accent_hex));

    lines.join("\n")
}
