use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::template::{Channel, TemplatePreview, TemplateVariable};

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_\n]+)_").expect("italic pattern is valid"));
static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~([^~\n]+)~").expect("strikethrough pattern is valid"));

impl Channel {
    /// Text every placeholder of this channel starts with.
    pub fn placeholder_opener(&self) -> &str {
        match self {
            Channel::Whatsapp => "{{",
            Channel::Email => "${",
        }
    }
}

pub fn placeholder_token(name: &str, channel: Channel) -> String {
    match channel {
        Channel::Whatsapp => format!("{{{{{}}}}}", name),
        Channel::Email => format!("${{{}}}", name),
    }
}

/// Replaces every placeholder of a known variable with its value.
///
/// The body is scanned once, left to right, so substituted values are never
/// searched for further placeholders. Names are compared literally. Unknown
/// placeholders and blank variable names are left as they are.
pub fn substitute_variables<I, N, V>(body: &str, variables: I, channel: Channel) -> String
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut replacements: Vec<(String, V)> = variables
        .into_iter()
        .filter(|(name, _)| !name.as_ref().is_empty())
        .map(|(name, value)| (placeholder_token(name.as_ref(), channel), value))
        .collect();

    // Longest token first so a name that prefixes another cannot shadow it.
    // The sort is stable: with duplicate names the first definition wins.
    replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let opener = channel.placeholder_opener();
    let mut output = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(position) = rest.find(opener) {
        output.push_str(&rest[..position]);
        let candidate = &rest[position..];

        match replacements
            .iter()
            .find(|(token, _)| candidate.starts_with(token.as_str()))
        {
            Some((token, value)) => {
                output.push_str(value.as_ref());
                rest = &candidate[token.len()..];
            }
            None => {
                // Openers are ASCII, so one byte is one char.
                output.push_str(&candidate[..1]);
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Turns WhatsApp inline markup into HTML that is safe to display.
///
/// Escapes `&`, `<` and `>` first, then converts `*bold*`, `_italic_` and
/// `~strike~` pairs that sit on one line, and finally turns line breaks into
/// `<br/>`. Unpaired delimiters stay literal.
pub fn render_whatsapp_markup(text: &str) -> String {
    let escaped = escape_html(text);

    let html = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");
    let html = STRIKETHROUGH.replace_all(&html, "<del>${1}</del>");

    html.replace("\r\n", "<br/>").replace('\n', "<br/>")
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Splices `token` in at byte offset `cursor` and returns the new body with the
/// offset just past the inserted token. Offsets past the end append.
pub fn insert_placeholder_at_cursor(body: &str, cursor: usize, token: &str) -> (String, usize) {
    insert_placeholder_over_selection(body, cursor, cursor, token)
}

/// Replaces the selected byte range with `token`, as the editor does when text
/// is highlighted while a variable chip is clicked.
pub fn insert_placeholder_over_selection(
    body: &str,
    start: usize,
    end: usize,
    token: &str,
) -> (String, usize) {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start = floor_char_boundary(body, start);
    let end = floor_char_boundary(body, end);

    let mut output = String::with_capacity(body.len() + token.len());
    output.push_str(&body[..start]);
    output.push_str(token);
    output.push_str(&body[end..]);

    (output, start + token.len())
}

/// Builds the live preview from each variable's example value. WhatsApp
/// bodies are rendered as chat markup; e-mail bodies are already HTML.
pub fn render_preview(
    channel: Channel,
    subject: Option<&str>,
    body: &str,
    variables: &[TemplateVariable],
) -> TemplatePreview {
    debug!(
        channel = channel.as_str(),
        variable_count = variables.len(),
        "Rendering template preview"
    );

    let examples = || variables.iter().map(|v| (v.name.as_str(), v.example.as_str()));
    let substituted = substitute_variables(body, examples(), channel);

    match channel {
        Channel::Whatsapp => TemplatePreview {
            subject: None,
            body: render_whatsapp_markup(&substituted),
        },
        Channel::Email => TemplatePreview {
            subject: subject
                .filter(|s| !s.trim().is_empty())
                .map(|s| substitute_variables(s, examples(), channel)),
            body: substituted,
        },
    }
}
