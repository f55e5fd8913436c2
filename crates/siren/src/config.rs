//! Export configuration.
//!
//! The Siren dialect carries a handful of values that are not derived from
//! journal metadata: the indexer's title identifier, the journal title block,
//! the article type and so on. They are collected here with their historical
//! defaults so a deployment can override them from a TOML file:
//!
//! ```toml
//! title_id      = "47212961"
//! journal_title = "ПРИКЛАДНАЯ МАТЕМАТИКА & ФИЗИКА"
//! article_type  = "RAR"
//! indent        = 2
//! ```
//!
//! Every key is optional; missing keys keep their default.

use super::*;

/// Placeholder constants and formatting options for a Siren export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
  /// Title identifier assigned by the indexer (`titleid`)
  pub title_id:             String,
  /// Journal title in the `journalInfo` block
  pub journal_title:        String,
  /// Language of the `journalInfo` block
  pub journal_lang:         String,
  /// Article type code (`artType`)
  pub article_type:         String,
  /// Publication language code (`langPubl`)
  pub publication_language: String,
  /// Section title text (`secTitle`)
  pub section_title:        String,
  /// Language of the section title
  pub section_lang:         String,
  /// Text of the per-article full text file entry
  pub full_text_file_name:  String,
  /// Text of the issue cover file entry
  pub cover_file_name:      String,
  /// System identifier of the DOCTYPE declaration
  pub doctype_system_id:    String,
  /// Indentation width of the serialized XML
  pub indent:               usize,
}

impl Default for ExportConfig {
  fn default() -> Self {
    Self {
      title_id:             "47212961".to_string(),
      journal_title:        "ПРИКЛАДНАЯ МАТЕМАТИКА & ФИЗИКА".to_string(),
      journal_lang:         "RUS".to_string(),
      article_type:         "RAR".to_string(),
      publication_language: "RUS".to_string(),
      section_title:        String::new(),
      section_lang:         "RUS".to_string(),
      full_text_file_name:  "file_name".to_string(),
      cover_file_name:      "cover".to_string(),
      doctype_system_id:    "http://www.w3.org/2001/XMLSchema".to_string(),
      indent:               2,
    }
  }
}

impl ExportConfig {
  /// Reads a configuration from a TOML file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading export configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Self::from_toml(&content)
  }

  /// Parses a configuration from TOML text.
  pub fn from_toml(content: &str) -> Result<Self> {
    let config: Self = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Loads `path` if given, else the default location if a file exists there, else the defaults.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::from_path(path),
      None => {
        let default_path = Self::default_path();
        if default_path.exists() {
          Self::from_path(default_path)
        } else {
          trace!("No configuration at {}, using defaults", default_path.display());
          Ok(Self::default())
        }
      },
    }
  }

  /// Returns the default path for the configuration file.
  ///
  /// - On Unix: `~/.config/siren/config.toml`
  /// - On macOS: `~/Library/Application Support/siren/config.toml`
  /// - On Windows: `%APPDATA%\siren\config.toml`
  /// - Fallback: `./siren/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("siren").join("config.toml")
  }

  fn validate(&self) -> Result<()> {
    if self.indent > 16 {
      return Err(SirenError::Config(format!("indent must be at most 16, got {}", self.indent)));
    }
    if self.doctype_system_id.contains('"') {
      return Err(SirenError::Config("doctype_system_id must not contain '\"'".to_string()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn partial_toml_keeps_defaults() {
    let config = ExportConfig::from_toml("title_id = \"1\"\nindent = 4\n").unwrap();
    assert_eq!(config.title_id, "1");
    assert_eq!(config.indent, 4);
    assert_eq!(config.article_type, "RAR");
    assert_eq!(config.journal_lang, "RUS");
  }

  #[test]
  fn rejects_bad_values() {
    assert!(matches!(ExportConfig::from_toml("indent = 40"), Err(SirenError::Config(_))));
    assert!(matches!(
      ExportConfig::from_toml("doctype_system_id = 'a\"b'"),
      Err(SirenError::Config(_))
    ));
    assert!(matches!(ExportConfig::from_toml("indent = \"two\""), Err(SirenError::TomlDe(_))));
  }

  #[test]
  fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "journal_title = \"Applied Mathematics\"").unwrap();
    let config = ExportConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.journal_title, "Applied Mathematics");
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let result = ExportConfig::load(Some(Path::new("/nonexistent/siren.toml")));
    assert!(matches!(result, Err(SirenError::Io(_))));
  }
}
