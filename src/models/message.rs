use serde::Serialize;

pub const GREEN: u32 = 0x00FF00;
pub const RED: u32 = 0xFF0000;
pub const PURPLE: u32 = 0x800080;

pub const MARKET_UPDATE_TITLE: &str = "Market Update";
pub const MARKET_CLOSED_NAME: &str = "Market Closed";
pub const MARKET_CLOSED_TEXT: &str = "The market is closed today. Have a nice day!";

/// Discord webhook body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotificationMessage {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

impl NotificationMessage {
    pub fn single(embed: Embed) -> Self {
        Self { embeds: vec![embed] }
    }
}

impl Embed {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            color: 0,
            fields: Vec::new(),
        }
    }

    pub fn push_field(&mut self, name: &str, value: &str) {
        self.fields.push(EmbedField {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Replaces the content with the closed-market notice.
    pub fn mark_closed(&mut self) {
        self.fields.clear();
        self.push_field(MARKET_CLOSED_NAME, MARKET_CLOSED_TEXT);
        self.color = PURPLE;
    }

    /// Green unless more symbols went down than up.
    pub fn color_for_tally(&mut self, tally: i32) {
        self.color = if tally >= 0 { GREEN } else { RED };
    }
}
