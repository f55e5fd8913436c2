//! Advisory validation of serialized markup.
//!
//! The serialized document is read back with a checking parser and every
//! problem found becomes a [`Diagnostic`]. Nothing here rejects a document:
//! callers decide what to do with the report, and the exporter only surfaces
//! diagnostics of [`Severity::Error`] or worse.
//!
//! ```
//! use siren::xml::{validate, Severity};
//!
//! let validation = validate("<!DOCTYPE journal SYSTEM \"x\"><journal><issue></journal>");
//! let first = validation.errors().next().unwrap();
//! assert_eq!(first.severity, Severity::Fatal);
//! assert_eq!(first.line, 1);
//! ```

use quick_xml::{
  events::{BytesStart, Event},
  Reader,
};

use super::*;

lazy_static! {
  static ref ELEMENT_NAME: Regex = Regex::new(r"^[\p{L}_:][\p{L}\p{N}_:.\-]*$").unwrap();
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
  /// Worth knowing, the document is still well-formed
  Warning,
  /// The document is well-formed but breaks a structural rule
  Error,
  /// The document is not well-formed; parsing stopped here
  Fatal,
}

impl Display for Severity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Severity::Warning => write!(f, "warning"),
      Severity::Error => write!(f, "error"),
      Severity::Fatal => write!(f, "fatal error"),
    }
  }
}

/// A single problem found in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  /// Severity
  pub severity: Severity,
  /// 1-based line of the offending markup
  pub line:     usize,
  /// 1-based column (in characters) of the offending markup
  pub column:   usize,
  /// What is wrong
  pub message:  String,
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} at line {}, column {}: {}", self.severity, self.line, self.column, self.message)
  }
}

/// All diagnostics of one validation run, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
  diagnostics: Vec<Diagnostic>,
}

impl Validation {
  /// Every diagnostic, warnings included.
  pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

  /// Diagnostics of error or fatal severity.
  pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
    self.diagnostics.iter().filter(|diagnostic| diagnostic.severity >= Severity::Error)
  }

  /// Whether any error or fatal diagnostic was found.
  pub fn has_errors(&self) -> bool { self.errors().next().is_some() }

  /// Whether nothing at all was found.
  pub fn is_empty(&self) -> bool { self.diagnostics.is_empty() }
}

/// Parses `xml` and collects every problem found.
pub fn validate(xml: &str) -> Validation {
  let mut checker = Checker::new(xml);
  checker.run();
  let validation = Validation { diagnostics: checker.diagnostics };
  debug!(
    "Validated {} bytes: {} diagnostics, errors: {}",
    xml.len(),
    validation.diagnostics.len(),
    validation.has_errors()
  );
  validation
}

/// Renders diagnostics together with the source line each one points at.
///
/// ```
/// use siren::xml::{render_report, validate};
///
/// let xml = "<!DOCTYPE journal SYSTEM \"x\">\n<journal>\n  <issue>\n</journal>\n";
/// let validation = validate(xml);
/// let report = render_report(validation.errors(), xml);
/// assert!(report.contains("   4 | </journal>"));
/// ```
pub fn render_report<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>, xml: &str) -> String {
  let lines: Vec<&str> = xml.lines().collect();
  let mut report = String::new();
  for diagnostic in diagnostics {
    report.push_str(&diagnostic.to_string());
    report.push('\n');
    if let Some(source) = diagnostic.line.checked_sub(1).and_then(|index| lines.get(index)) {
      let gutter = format!("{:>4} | ", diagnostic.line);
      report.push_str(&gutter);
      report.push_str(source);
      report.push('\n');
      report.push_str(&" ".repeat(gutter.len() + diagnostic.column.saturating_sub(1)));
      report.push_str("^\n");
    }
  }
  report
}

/// Walks the markup once, tracking open elements.
struct Checker<'a> {
  xml:          &'a str,
  reader:       Reader<&'a [u8]>,
  diagnostics:  Vec<Diagnostic>,
  open:         Vec<(String, usize)>,
  doctype_root: Option<(String, usize)>,
  root_seen:    bool,
  root_closed:  bool,
}

impl<'a> Checker<'a> {
  fn new(xml: &'a str) -> Self {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;
    reader.config_mut().trim_text(false);
    Self {
      xml,
      reader,
      diagnostics: Vec::new(),
      open: Vec::new(),
      doctype_root: None,
      root_seen: false,
      root_closed: false,
    }
  }

  fn run(&mut self) {
    loop {
      let offset = self.reader.buffer_position() as usize;
      match self.reader.read_event() {
        Ok(Event::DocType(content)) => {
          let content = String::from_utf8_lossy(&content).into_owned();
          let name = content.split_whitespace().next().unwrap_or_default().to_string();
          self.doctype_root = Some((name, offset));
        },
        Ok(Event::Start(start)) => {
          let name = self.check_element(&start, offset);
          self.open.push((name, offset));
        },
        Ok(Event::Empty(start)) => {
          self.check_element(&start, offset);
          if self.open.is_empty() {
            self.root_closed = true;
          }
        },
        Ok(Event::End(_)) => {
          self.open.pop();
          if self.open.is_empty() {
            self.root_closed = true;
          }
        },
        Ok(Event::Text(text)) => {
          if self.open.is_empty() {
            if !text.iter().all(u8::is_ascii_whitespace) {
              self.push(Severity::Fatal, offset, "Content is not allowed outside the root element");
              return;
            }
          } else if let Err(e) = text.unescape() {
            self.push(Severity::Error, offset, format!("Undecodable text content: {e}"));
          }
        },
        Ok(Event::CData(_)) if self.open.is_empty() => {
          self.push(Severity::Fatal, offset, "Content is not allowed outside the root element");
          return;
        },
        Ok(Event::Eof) => break,
        Ok(_) => {},
        Err(e) => {
          let position = self.reader.error_position() as usize;
          self.push(Severity::Fatal, position, e.to_string());
          return;
        },
      }
    }

    if let Some((name, offset)) = self.open.last().cloned() {
      self.push(Severity::Fatal, offset, format!("Premature end of data, element `{name}` is not closed"));
      return;
    }
    if !self.root_seen {
      self.push(Severity::Fatal, self.xml.len(), "Document has no root element");
      return;
    }
    if self.doctype_root.is_none() {
      self.push(Severity::Warning, 0, "Document has no DOCTYPE declaration");
    }
  }

  /// Checks an element's name and attributes and returns its name.
  fn check_element(&mut self, start: &BytesStart<'_>, offset: usize) -> String {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    if self.open.is_empty() {
      if self.root_closed {
        self.push(Severity::Fatal, offset, format!("Extra content at the end of the document: `{name}`"));
      } else {
        self.root_seen = true;
        if let Some((declared, doctype_offset)) = self.doctype_root.clone() {
          if declared != name {
            self.push(
              Severity::Error,
              doctype_offset,
              format!("DOCTYPE declares root `{declared}` but the root element is `{name}`"),
            );
          }
        }
      }
    }

    if !ELEMENT_NAME.is_match(&name) {
      self.push(Severity::Error, offset, format!("Invalid element name `{name}`"));
    }

    for attribute in start.attributes() {
      match attribute {
        Ok(attribute) =>
          if let Err(e) = attribute.unescape_value() {
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            self.push(Severity::Error, offset, format!("Undecodable value of attribute `{key}`: {e}"));
          },
        Err(e) => self.push(Severity::Error, offset, format!("Malformed attribute in `{name}`: {e}")),
      }
    }
    name
  }

  fn push(&mut self, severity: Severity, offset: usize, message: impl Into<String>) {
    let (line, column) = line_and_column(self.xml, offset);
    let diagnostic = Diagnostic { severity, line, column, message: message.into() };
    trace!("{diagnostic}");
    self.diagnostics.push(diagnostic);
  }
}

/// 1-based line and character column of a byte offset.
fn line_and_column(xml: &str, offset: usize) -> (usize, usize) {
  let prefix = &xml.as_bytes()[..offset.min(xml.len())];
  let line = prefix.iter().filter(|&&byte| byte == b'\n').count() + 1;
  let line_start = prefix.iter().rposition(|&byte| byte == b'\n').map_or(0, |index| index + 1);
  let column = String::from_utf8_lossy(&prefix[line_start..]).chars().count() + 1;
  (line, column)
}
