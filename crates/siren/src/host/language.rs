//! ISO 639 language code table.

use super::*;

lazy_static! {
  /// ISO 639-1 to ISO 639-2/B codes for the languages journal systems ship locales for.
  static ref ISO_639: HashMap<&'static str, &'static str> = HashMap::from([
    ("ar", "ara"),
    ("az", "aze"),
    ("be", "bel"),
    ("bg", "bul"),
    ("bs", "bos"),
    ("ca", "cat"),
    ("cs", "cze"),
    ("da", "dan"),
    ("de", "ger"),
    ("el", "gre"),
    ("en", "eng"),
    ("es", "spa"),
    ("et", "est"),
    ("eu", "baq"),
    ("fa", "per"),
    ("fi", "fin"),
    ("fr", "fre"),
    ("gl", "glg"),
    ("he", "heb"),
    ("hi", "hin"),
    ("hr", "hrv"),
    ("hu", "hun"),
    ("hy", "arm"),
    ("id", "ind"),
    ("is", "ice"),
    ("it", "ita"),
    ("ja", "jpn"),
    ("ka", "geo"),
    ("kk", "kaz"),
    ("ko", "kor"),
    ("ky", "kir"),
    ("lt", "lit"),
    ("lv", "lav"),
    ("mk", "mac"),
    ("mn", "mon"),
    ("ms", "may"),
    ("nb", "nob"),
    ("nl", "dut"),
    ("nn", "nno"),
    ("no", "nor"),
    ("pl", "pol"),
    ("pt", "por"),
    ("ro", "rum"),
    ("ru", "rus"),
    ("sk", "slo"),
    ("sl", "slv"),
    ("sq", "alb"),
    ("sr", "srp"),
    ("sv", "swe"),
    ("tg", "tgk"),
    ("th", "tha"),
    ("tk", "tuk"),
    ("tr", "tur"),
    ("tt", "tat"),
    ("uk", "ukr"),
    ("ur", "urd"),
    ("uz", "uzb"),
    ("vi", "vie"),
    ("zh", "chi"),
  ]);
}

/// The built-in ISO 639 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso639;

impl LanguageCodes for Iso639 {
  fn three_letter(&self, two_letter: &str) -> Option<&'static str> {
    ISO_639.get(two_letter.to_ascii_lowercase().as_str()).copied()
  }
}
