use core::{fmt, str::FromStr};

use crate::error::InputError;

/// User-facing wording for errors, and the characters that answer a yes/no
/// question.
///
/// A catalog is chosen once when a [`Console`](crate::Console) is built and
/// never changes afterwards.
pub trait MessageCatalog {
    /// The text shown for `error`, without a trailing newline.
    fn message(&self, error: InputError) -> &str;

    /// The character accepted as "yes".
    fn yes_char(&self) -> char;

    /// The character accepted as "no".
    fn no_char(&self) -> char;
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for &C {
    fn message(&self, error: InputError) -> &str {
        (**self).message(error)
    }

    fn yes_char(&self) -> char {
        (**self).yes_char()
    }

    fn no_char(&self) -> char {
        (**self).no_char()
    }
}

/// Built-in catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// English, answering `y`/`n`.
    #[default]
    English,
    /// German, answering `j`/`n`.
    German,
}

impl Locale {
    /// Short language tag (`en`, `de`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::German => "de",
        }
    }
}

impl MessageCatalog for Locale {
    fn message(&self, error: InputError) -> &str {
        match self {
            Locale::English => english(error),
            Locale::German => german(error),
        }
    }

    fn yes_char(&self) -> char {
        match self {
            Locale::English => 'y',
            Locale::German => 'j',
        }
    }

    fn no_char(&self) -> char {
        'n'
    }
}

fn english(error: InputError) -> &'static str {
    match error {
        InputError::General => "Error on input!",
        InputError::InvalidYesNo => "Invalid input! Only answer y/n please.",
        InputError::InvalidInteger => "User-provided input not a valid integer.",
        InputError::IntegerOutOfRange => "User-provided input out of range for int.",
        InputError::InvalidDouble => "User-provided input is not a valid double.",
        InputError::AllocationFailure => "Memory allocation or reallocation failed!",
        InputError::EmptyInput => "No input was provided.",
        InputError::EndOfStream => "No more input available.",
    }
}

fn german(error: InputError) -> &'static str {
    match error {
        InputError::General => "Fehler bei der Eingabe!",
        InputError::InvalidYesNo => "Ungültige Eingabe! Antworten Sie bitte nur mit j oder n.",
        InputError::InvalidInteger => "Nutzereingabe ist keine gültige Ganzzahl!",
        InputError::IntegerOutOfRange => {
            "Nutzereingabe liegt außerhalb des Bereichs für eine reguläre Ganzzahl!"
        }
        InputError::InvalidDouble => "Nutzereingabe ist keine gültige Gleitkommazahl!",
        InputError::AllocationFailure => {
            "Speicheralloziierung oder -realloziierung fehlgeschlagen!"
        }
        InputError::EmptyInput => "Es wurde keine Eingabe gemacht.",
        InputError::EndOfStream => "Keine weitere Eingabe verfügbar.",
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when a locale tag names no built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts bare language tags and POSIX locale names such as
    /// `de_DE.UTF-8`; only the language part is considered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" | "c" | "posix" => Ok(Locale::English),
            "de" => Ok(Locale::German),
            _ => Err(UnknownLocale(s.to_owned())),
        }
    }
}
