//! Platform-neutral rich message payloads.
//!
//! Commands build an `Embed` and hand it to a channel surface; the bot integration
//! renders it into the platform's own embed builder.

/// Success color (green).
pub const COLOR_SUCCESS: u32 = 0x00FF00;
/// Error color (red).
pub const COLOR_ERROR: u32 = 0xFF0000;
/// Info color (blue).
pub const COLOR_INFO: u32 = 0x0099FF;
/// Warning color (yellow).
pub const COLOR_WARNING: u32 = 0xFFFF00;

/// A named field inside an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Structured rich content: title, description, color and fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub image: Option<String>,
    /// Whether the rendered embed carries the send-time timestamp.
    pub timestamp: bool,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Green embed with a check mark title.
    pub fn success(title: &str, description: impl Into<String>) -> Self {
        Self::styled(COLOR_SUCCESS, format!("✅ {}", title), description)
    }

    /// Red embed with a cross mark title.
    pub fn error(title: &str, description: impl Into<String>) -> Self {
        Self::styled(COLOR_ERROR, format!("❌ {}", title), description)
    }

    /// Blue embed with an information title.
    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Self::styled(COLOR_INFO, format!("ℹ️ {}", title), description)
    }

    /// Yellow embed with a warning title.
    pub fn warning(title: &str, description: impl Into<String>) -> Self {
        Self::styled(COLOR_WARNING, format!("⚠️ {}", title), description)
    }

    fn styled(color: u32, title: String, description: impl Into<String>) -> Self {
        Self::new()
            .color(color)
            .title(title)
            .description(description)
            .with_timestamp()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = true;
        self
    }

    /// Looks up a field value by field name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}
