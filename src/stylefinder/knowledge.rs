//! # Layout Knowledge Base
//!
//! Static tables feeding the document generator:
//!
//! - one [`MediumProfile`] per [`Medium`], with its header title, the heading
//!   of its layout section, a fixed tip and (for every medium but
//!   presentation) a fixed list of layouts;
//! - the twelve presentation slots, whose descriptions are adapted per style;
//! - the two modifier tables used for that adaptation, keyed by tone and by
//!   feature substring.
//!
//! The modifier tables are ordered slices, not maps: the generator takes the
//! first feature key that matches, so reordering entries changes output.

use crate::model::{Medium, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticLayout {
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSlot {
    pub id: &'static str,
    pub name: &'static str,
    pub base: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MediumProfile {
    pub medium: Medium,
    /// Short label shown next to the medium selector, e.g. "プレゼン用".
    pub label: &'static str,
    pub title: &'static str,
    pub layout_heading: &'static str,
    pub tips: &'static str,
    /// Empty for the dynamic medium.
    pub layouts: &'static [StaticLayout],
}

impl MediumProfile {
    pub fn is_dynamic(&self) -> bool {
        self.medium == DYNAMIC_MEDIUM
    }
}

/// The one medium whose layouts are computed per style.
pub const DYNAMIC_MEDIUM: Medium = Medium::Presentation;

/// Joins a base description with its modifier phrases.
pub const PHRASE_DELIMITER: &str = "、";

/// Joins feature phrases in the document's global section.
pub const FEATURE_DELIMITER: &str = "、";

/// Color name that carries no meaning of its own and is never called out.
pub const PLACEHOLDER_COLOR_NAME: &str = "アクセント";

pub const MAX_FEATURE_PHRASES: usize = 2;
pub const MAX_PHRASES: usize = 2;

/// Slots that may name the style's accent color.
pub const ACCENT_SLOTS: [&str; 3] = ["title", "emphasis", "closing"];

pub static PRESENTATION_SLOTS: [LayoutSlot; 12] = [
    LayoutSlot {
        id: "title",
        name: "タイトルスライド",
        base: "大きな見出し、サブタイトル、背景パターン",
    },
    LayoutSlot {
        id: "agenda",
        name: "アジェンダ",
        base: "目次を番号付きリストで整理",
    },
    LayoutSlot {
        id: "section",
        name: "セクション区切り",
        base: "章タイトルを大きく、前後に余白",
    },
    LayoutSlot {
        id: "content",
        name: "コンテンツスライド",
        base: "左右2カラム、箇条書き、図表配置",
    },
    LayoutSlot {
        id: "emphasis",
        name: "強調スライド",
        base: "キーメッセージを中央大きく配置",
    },
    LayoutSlot {
        id: "data",
        name: "データスライド",
        base: "グラフ・チャート中心、補足テキスト",
    },
    LayoutSlot {
        id: "comparison",
        name: "比較スライド",
        base: "2〜3項目を並べて対比",
    },
    LayoutSlot {
        id: "timeline",
        name: "タイムライン",
        base: "時系列を横一列のステップで表示",
    },
    LayoutSlot {
        id: "image",
        name: "画像スライド",
        base: "全面写真にテキストを重ねる",
    },
    LayoutSlot {
        id: "quote",
        name: "引用スライド",
        base: "引用文と出典を中央に配置",
    },
    LayoutSlot {
        id: "team",
        name: "チーム紹介",
        base: "顔写真と役割をグリッド配置",
    },
    LayoutSlot {
        id: "closing",
        name: "まとめスライド",
        base: "要点の振り返りと次のアクション",
    },
];

pub type SlotPhrases = &'static [(&'static str, &'static str)];

pub static TONE_MODIFIERS: [(Tone, SlotPhrases); 6] = [
    (
        Tone::Minimal,
        &[
            ("title", "要素を最小限に絞る"),
            ("section", "余白だけで区切りを表現"),
            ("content", "1スライド1トピック"),
            ("data", "グラフの装飾を削ぎ落とす"),
            ("closing", "静かな余韻を残す"),
        ],
    ),
    (
        Tone::Tech,
        &[
            ("title", "グリッド背景とモノスペース見出し"),
            ("content", "コードブロック風の囲み"),
            ("emphasis", "グロー効果で強調"),
            ("data", "ダッシュボード風のメトリクス表示"),
            ("timeline", "ターミナル風のステップ表示"),
        ],
    ),
    (
        Tone::Casual,
        &[
            ("title", "手書き風のアクセント"),
            ("content", "イラストやアイコンを添える"),
            ("quote", "吹き出し型の引用"),
            ("team", "吹き出しで一言コメント"),
            ("closing", "親しみやすい一言で締める"),
        ],
    ),
    (
        Tone::Premium,
        &[
            ("title", "セリフ体の見出しと細い罫線"),
            ("emphasis", "金属調のライン装飾"),
            ("image", "余白を贅沢に使った写真配置"),
            ("quote", "上品なセリフ体で引用"),
            ("closing", "ロゴを中央に上品に配置"),
        ],
    ),
    (
        Tone::Creative,
        &[
            ("title", "大胆なタイポグラフィ"),
            ("agenda", "番号をグラフィカルに"),
            ("section", "色面を大きく分割"),
            ("emphasis", "斜めレイアウトで動きを出す"),
            ("image", "コラージュ風の配置"),
        ],
    ),
    (
        Tone::Corporate,
        &[
            ("title", "ロゴと会社名を明確に"),
            ("agenda", "章立てを明確に"),
            ("data", "出典と注記を明記"),
            ("comparison", "表形式で整然と比較"),
            ("team", "役職と氏名を統一書式で"),
            ("closing", "問い合わせ先を明記"),
        ],
    ),
];

pub static FEATURE_MODIFIERS: [(&str, SlotPhrases); 12] = [
    (
        "ネオン",
        &[
            ("title", "ネオン発光の見出し"),
            ("emphasis", "ネオンカラーで強調"),
            ("data", "ネオンラインのグラフ"),
        ],
    ),
    (
        "グリッド",
        &[
            ("title", "背景に薄いグリッド"),
            ("content", "グリッドに沿った整列"),
            ("comparison", "グリッドで項目を揃える"),
            ("team", "均等グリッドで配置"),
        ],
    ),
    (
        "余白",
        &[
            ("section", "余白を十分に確保"),
            ("content", "余白を活かした配置"),
            ("closing", "余白で締めくくる"),
        ],
    ),
    (
        "グラデーション",
        &[
            ("title", "グラデーション背景"),
            ("section", "グラデーションで章を色分け"),
            ("image", "グラデーションのオーバーレイ"),
        ],
    ),
    (
        "写真",
        &[
            ("title", "写真を背景に敷く"),
            ("image", "高解像度の写真を全面に"),
            ("team", "統一トーンの写真"),
        ],
    ),
    (
        "手書き",
        &[
            ("title", "手書き文字をアクセントに"),
            ("agenda", "手書き風のチェックリスト"),
            ("quote", "手書き風フォントで引用"),
        ],
    ),
    (
        "アイコン",
        &[
            ("agenda", "項目ごとにアイコン"),
            ("content", "アイコンで要点を視覚化"),
            ("timeline", "ステップごとにアイコン"),
        ],
    ),
    (
        "シャドウ",
        &[
            ("content", "カードに柔らかい影"),
            ("comparison", "カード化して影で浮かせる"),
        ],
    ),
    (
        "角丸",
        &[
            ("content", "角丸カードで情報を区切る"),
            ("team", "角丸フレームで写真を囲む"),
        ],
    ),
    (
        "モノクロ",
        &[
            ("data", "グレースケールのグラフ"),
            ("image", "モノクロ写真で統一"),
        ],
    ),
    (
        "ゴールド",
        &[
            ("title", "ゴールドの細線で装飾"),
            ("emphasis", "ゴールドで要点を強調"),
        ],
    ),
    (
        "データ",
        &[
            ("data", "数値を大きく強調"),
            ("timeline", "数値の推移を並記"),
        ],
    ),
];

static PRESENTATION: MediumProfile = MediumProfile {
    medium: Medium::Presentation,
    label: "プレゼン用",
    title: "プレゼンテーション用デザイン設定",
    layout_heading: "スライド構成",
    tips: "余白を多めに取り、1スライド1メッセージを心がける",
    layouts: &[],
};

static WEBSITE: MediumProfile = MediumProfile {
    medium: Medium::Website,
    label: "Webサイト用",
    title: "Webサイト用デザイン設定",
    layout_heading: "ページ構成",
    tips: "レスポンシブ対応、ホバーエフェクトを活用",
    layouts: &[
        StaticLayout {
            name: "ヒーローセクション",
            desc: "フルワイド背景、キャッチコピー、CTA",
        },
        StaticLayout {
            name: "サービス紹介",
            desc: "3-4カラムのカードグリッド",
        },
        StaticLayout {
            name: "特徴セクション",
            desc: "アイコン+テキストの横並び",
        },
        StaticLayout {
            name: "フッター",
            desc: "リンク集、コピーライト、SNSアイコン",
        },
    ],
};

static APP: MediumProfile = MediumProfile {
    medium: Medium::App,
    label: "アプリ用",
    title: "アプリUI用デザイン設定",
    layout_heading: "画面構成",
    tips: "タッチターゲット44px以上、階層は浅く",
    layouts: &[
        StaticLayout {
            name: "ホーム画面",
            desc: "ナビゲーション、メインコンテンツ、タブバー",
        },
        StaticLayout {
            name: "リスト画面",
            desc: "カード形式、スワイプアクション対応",
        },
        StaticLayout {
            name: "詳細画面",
            desc: "画像+情報+アクションボタン",
        },
        StaticLayout {
            name: "設定画面",
            desc: "グループ化されたリスト形式",
        },
    ],
};

static LP: MediumProfile = MediumProfile {
    medium: Medium::Lp,
    label: "LP用",
    title: "ランディングページ用デザイン設定",
    layout_heading: "セクション構成",
    tips: "スクロールで物語が進む構成、CTAは複数配置",
    layouts: &[
        StaticLayout {
            name: "ファーストビュー",
            desc: "強烈なキャッチ、ベネフィット、CTA",
        },
        StaticLayout {
            name: "課題提起",
            desc: "ユーザーの悩みを言語化",
        },
        StaticLayout {
            name: "解決策提示",
            desc: "商品・サービスの特徴を3点",
        },
        StaticLayout {
            name: "社会的証明",
            desc: "実績、お客様の声、メディア掲載",
        },
        StaticLayout {
            name: "クロージング",
            desc: "限定オファー、強いCTA",
        },
    ],
};

static SOCIAL: MediumProfile = MediumProfile {
    medium: Medium::Social,
    label: "SNS用",
    title: "SNS投稿用デザイン設定",
    layout_heading: "投稿タイプ",
    tips: "文字は大きく読みやすく、ブランドカラーを統一",
    layouts: &[
        StaticLayout {
            name: "フィード投稿",
            desc: "正方形、インパクトある1枚絵",
        },
        StaticLayout {
            name: "カルーセル",
            desc: "複数枚でストーリー展開",
        },
        StaticLayout {
            name: "ストーリーズ",
            desc: "縦長、テキスト少なめ、動き",
        },
        StaticLayout {
            name: "サムネイル",
            desc: "16:9、顔+テキスト+アイコン",
        },
    ],
};

pub fn profile(medium: Medium) -> &'static MediumProfile {
    match medium {
        Medium::Presentation => &PRESENTATION,
        Medium::Website => &WEBSITE,
        Medium::App => &APP,
        Medium::Lp => &LP,
        Medium::Social => &SOCIAL,
    }
}

fn lookup(phrases: SlotPhrases, slot_id: &str) -> Option<&'static str> {
    phrases
        .iter()
        .find(|(id, _)| *id == slot_id)
        .map(|(_, phrase)| *phrase)
}

pub fn tone_modifier(tone: Tone, slot_id: &str) -> Option<&'static str> {
    TONE_MODIFIERS
        .iter()
        .find(|(t, _)| *t == tone)
        .and_then(|(_, phrases)| lookup(phrases, slot_id))
}

/// Feature keys with a phrase for `slot_id`, in table order.
pub fn feature_modifiers_for(
    slot_id: &'static str,
) -> impl Iterator<Item = (&'static str, &'static str)> {
    FEATURE_MODIFIERS
        .iter()
        .filter_map(move |(key, phrases)| lookup(phrases, slot_id).map(|p| (*key, p)))
}

pub fn is_accent_slot(slot_id: &str) -> bool {
    ACCENT_SLOTS.contains(&slot_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_medium_has_a_profile() {
        for medium in Medium::ALL {
            let p = profile(medium);
            assert_eq!(p.medium, medium);
            if p.is_dynamic() {
                assert!(p.layouts.is_empty());
            } else {
                assert!(!p.layouts.is_empty());
            }
        }
    }

    #[test]
    fn slot_ids_are_unique_and_accent_slots_exist() {
        let ids: HashSet<_> = PRESENTATION_SLOTS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), PRESENTATION_SLOTS.len());
        for slot in ACCENT_SLOTS {
            assert!(ids.contains(slot));
        }
    }

    #[test]
    fn modifier_tables_only_reference_known_slots() {
        let ids: HashSet<_> = PRESENTATION_SLOTS.iter().map(|s| s.id).collect();
        let all_phrases = TONE_MODIFIERS
            .iter()
            .flat_map(|(_, p)| p.iter())
            .chain(FEATURE_MODIFIERS.iter().flat_map(|(_, p)| p.iter()));
        for (slot, _) in all_phrases {
            assert!(ids.contains(slot), "unknown slot {}", slot);
        }
    }

    #[test]
    fn tone_lookup_misses_are_none() {
        assert_eq!(
            tone_modifier(Tone::Tech, "title"),
            Some("グリッド背景とモノスペース見出し")
        );
        assert_eq!(tone_modifier(Tone::Tech, "quote"), None);
    }

    #[test]
    fn feature_modifiers_keep_table_order() {
        let keys: Vec<_> = feature_modifiers_for("title").map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["ネオン", "グリッド", "グラデーション", "写真", "手書き", "ゴールド"]
        );
    }
}
