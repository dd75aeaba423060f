//! Closed option tables shared by the form, the prompt builder and the history rows.
//!
//! Labels are the exact strings shown to the user and written to the history
//! store, so UI options and preset keys cannot drift apart.

use serde::{Deserialize, Serialize};

/// Kind of copy to produce.
///
/// # Examples
///
/// ```
/// use copydesk_core::ContentType;
/// use std::str::FromStr;
///
/// assert_eq!(ContentType::default().to_string(), "Ad Copy");
/// assert_eq!(ContentType::from_str("linkedin post").unwrap(), ContentType::LinkedInPost);
/// assert_eq!(ContentType::InstagramCaption.slug(), "instagram_caption");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ContentType {
    /// Short advertising copy
    #[default]
    #[strum(serialize = "Ad Copy")]
    #[serde(rename = "Ad Copy")]
    AdCopy,
    /// Caption for an Instagram post
    #[strum(serialize = "Instagram Caption")]
    #[serde(rename = "Instagram Caption")]
    InstagramCaption,
    /// LinkedIn post
    #[strum(serialize = "LinkedIn Post")]
    #[serde(rename = "LinkedIn Post")]
    LinkedInPost,
    /// Opening paragraphs of a blog article
    #[strum(serialize = "Blog Intro")]
    #[serde(rename = "Blog Intro")]
    BlogIntro,
    /// Promotional e-mail
    #[strum(serialize = "Email Promo")]
    #[serde(rename = "Email Promo")]
    EmailPromo,
    /// Product page description
    #[strum(serialize = "Product Description")]
    #[serde(rename = "Product Description")]
    ProductDescription,
    /// YouTube video description
    #[strum(serialize = "YouTube Description")]
    #[serde(rename = "YouTube Description")]
    YouTubeDescription,
}

impl ContentType {
    /// File-name friendly form of the label: lowercase, spaces replaced by `_`.
    pub fn slug(&self) -> String {
        self.as_ref().replace(' ', "_").to_lowercase()
    }
}

/// Voice of the generated copy.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Tone {
    /// Polished and businesslike
    #[default]
    Professional,
    /// Warm and approachable
    Friendly,
    /// Confident and punchy
    Bold,
    /// Playful and humorous
    Funny,
    /// Uplifting and energizing
    Motivational,
    /// Geared toward conversion
    Persuasive,
}

/// Named bundle of domain guidance appended to the prompt.
///
/// # Examples
///
/// ```
/// use copydesk_core::TemplatePreset;
///
/// assert_eq!(TemplatePreset::lookup("SaaS"), TemplatePreset::Saas);
/// assert_eq!(TemplatePreset::lookup("Gardening"), TemplatePreset::Custom);
/// assert!(TemplatePreset::Custom.hint().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum TemplatePreset {
    /// No preset, the prompt relies on the user's own instructions
    #[default]
    #[strum(serialize = "None (custom)")]
    #[serde(rename = "None (custom)")]
    Custom,
    /// Property listings and open houses
    #[strum(serialize = "Real-Estate")]
    #[serde(rename = "Real-Estate")]
    RealEstate,
    /// Online storefronts
    #[strum(serialize = "E-commerce")]
    #[serde(rename = "E-commerce")]
    ECommerce,
    /// Fitness programs for beginners
    Fitness,
    /// Budget travel
    Travel,
    /// Software for small teams
    #[strum(serialize = "SaaS")]
    #[serde(rename = "SaaS")]
    Saas,
    /// Professional coaching programs
    Coaching,
}

impl TemplatePreset {
    /// Guidance text appended to the prompt for this preset.
    pub fn hint(&self) -> &'static str {
        match self {
            TemplatePreset::Custom => "",
            TemplatePreset::RealEstate => {
                "Audience: home buyers or sellers. Include neighborhood benefits, property features, and a clear CTA to schedule a viewing."
            }
            TemplatePreset::ECommerce => {
                "Audience: online shoppers. Highlight benefits, social proof, limited-time offers, and a CTA to buy now."
            }
            TemplatePreset::Fitness => {
                "Audience: beginners. Emphasize transformation, habit-building tips, and a CTA to start a plan today."
            }
            TemplatePreset::Travel => {
                "Audience: budget travelers. Include local highlights, hidden gems, best season, and a CTA to book."
            }
            TemplatePreset::Saas => {
                "Audience: SMB teams. Stress pain→solution, 3 key features, 1 mini case-study line, and CTA for free trial."
            }
            TemplatePreset::Coaching => {
                "Audience: professionals. Clarify desired outcomes, program structure, and CTA to book a discovery call."
            }
        }
    }

    /// Resolve a preset key, treating unknown keys as [`TemplatePreset::Custom`] (no hint).
    pub fn lookup(key: &str) -> Self {
        key.trim().parse().unwrap_or_default()
    }
}
