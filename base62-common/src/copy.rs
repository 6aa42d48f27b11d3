use serde::{Deserialize, Serialize};

/// Whether copied text is wrapped in double quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    Quoted,
    Plain,
}

impl From<bool> for Quoting {
    fn from(quoted: bool) -> Self {
        if quoted {
            Quoting::Quoted
        } else {
            Quoting::Plain
        }
    }
}

/// Text placed on the clipboard for a single value
pub fn copy_text(value: &str, quoting: Quoting) -> String {
    match quoting {
        Quoting::Quoted => format!("\"{value}\""),
        Quoting::Plain => value.to_owned(),
    }
}

/// Text placed on the clipboard for a batch, one value per line
pub fn copy_all_text<S: AsRef<str>>(values: &[S], quoting: Quoting) -> String {
    values
        .iter()
        .map(|value| copy_text(value.as_ref(), quoting))
        .collect::<Vec<_>>()
        .join("\n")
}
