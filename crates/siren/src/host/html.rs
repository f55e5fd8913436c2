//! HTML to plain text normalization for rich-text metadata fields.

use regex::Captures;

use super::*;

lazy_static! {
  static ref PARAGRAPH: Regex = Regex::new(r"(?i)</?p(\s[^>]*)?>").unwrap();
  static ref LIST_ITEM_OPEN: Regex = Regex::new(r"(?i)<li(\s[^>]*)?>").unwrap();
  static ref LIST_ITEM_CLOSE: Regex = Regex::new(r"(?i)</li\s*>").unwrap();
  static ref LINE_BREAK: Regex = Regex::new(r"(?i)<br\s*/?>").unwrap();
  static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
  static ref ENTITY: Regex = Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});").unwrap();
  static ref NAMED_ENTITIES: HashMap<&'static str, char> = HashMap::from([
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("shy", '\u{ad}'),
    ("laquo", '«'),
    ("raquo", '»'),
    ("ldquo", '“'),
    ("rdquo", '”'),
    ("bdquo", '„'),
    ("lsquo", '‘'),
    ("rsquo", '’'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("minus", '−'),
    ("hellip", '…'),
    ("bull", '•'),
    ("middot", '·'),
    ("copy", '©'),
    ("reg", '®'),
    ("deg", '°'),
    ("plusmn", '±'),
    ("times", '×'),
    ("divide", '÷'),
    ("micro", 'µ'),
    ("sect", '§'),
    ("alpha", 'α'),
    ("beta", 'β'),
    ("gamma", 'γ'),
    ("delta", 'δ'),
    ("lambda", 'λ'),
    ("mu", 'μ'),
    ("pi", 'π'),
    ("sigma", 'σ'),
    ("omega", 'ω'),
    ("le", '≤'),
    ("ge", '≥'),
    ("ne", '≠'),
    ("asymp", '≈'),
    ("infin", '∞'),
  ]);
}

/// Default [`HtmlToText`]: paragraphs and line breaks become newlines, list
/// items become bullets, remaining tags are stripped and entities decoded.
///
/// ```
/// use siren::host::{HtmlToText, PlainText};
///
/// let text = PlainText.html_to_text("<p>Heat &amp; mass</p><ul><li>one</li></ul>");
/// assert_eq!(text, "Heat & mass\n• one");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl HtmlToText for PlainText {
  fn html_to_text(&self, html: &str) -> String {
    let text = PARAGRAPH.replace_all(html, "\n");
    let text = LIST_ITEM_OPEN.replace_all(&text, "• ");
    let text = LIST_ITEM_CLOSE.replace_all(&text, "\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    decode_entities(&text).trim().to_string()
  }
}

/// Decodes named and numeric character references; unknown ones are kept verbatim.
fn decode_entities(text: &str) -> String {
  ENTITY
    .replace_all(text, |captures: &Captures| {
      let reference = &captures[1];
      let decoded = if let Some(hex) =
        reference.strip_prefix("#x").or_else(|| reference.strip_prefix("#X"))
      {
        u32::from_str_radix(hex, 16).ok().and_then(xml_char)
      } else if let Some(decimal) = reference.strip_prefix('#') {
        decimal.parse::<u32>().ok().and_then(xml_char)
      } else {
        NAMED_ENTITIES.get(reference).copied()
      };
      decoded.map(String::from).unwrap_or_else(|| captures[0].to_string())
    })
    .into_owned()
}

/// The character for a code point, if XML 1.0 allows it in text.
fn xml_char(code: u32) -> Option<char> {
  char::from_u32(code).filter(|&c| {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
  })
}
