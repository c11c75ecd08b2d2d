#![allow(missing_docs)]

use insta::assert_snapshot;
use rstest::rstest;
use userinput::{InputError, Locale, MessageCatalog};

fn render(locale: Locale) -> String {
    let mut lines = vec![format!(
        "[{locale}] yes={} no={}",
        locale.yes_char(),
        locale.no_char()
    )];
    lines.extend(
        InputError::ALL
            .iter()
            .map(|&error| format!("{error:?}: {}", locale.message(error))),
    );
    lines.join("\n")
}

#[test]
fn english_catalog() {
    assert_snapshot!(render(Locale::English), @r"
    [en] yes=y no=n
    General: Error on input!
    InvalidYesNo: Invalid input! Only answer y/n please.
    InvalidInteger: User-provided input not a valid integer.
    IntegerOutOfRange: User-provided input out of range for int.
    InvalidDouble: User-provided input is not a valid double.
    AllocationFailure: Memory allocation or reallocation failed!
    EmptyInput: No input was provided.
    EndOfStream: No more input available.
    ");
}

#[test]
fn german_catalog() {
    assert_snapshot!(render(Locale::German), @r"
    [de] yes=j no=n
    General: Fehler bei der Eingabe!
    InvalidYesNo: Ungültige Eingabe! Antworten Sie bitte nur mit j oder n.
    InvalidInteger: Nutzereingabe ist keine gültige Ganzzahl!
    IntegerOutOfRange: Nutzereingabe liegt außerhalb des Bereichs für eine reguläre Ganzzahl!
    InvalidDouble: Nutzereingabe ist keine gültige Gleitkommazahl!
    AllocationFailure: Speicheralloziierung oder -realloziierung fehlgeschlagen!
    EmptyInput: Es wurde keine Eingabe gemacht.
    EndOfStream: Keine weitere Eingabe verfügbar.
    ");
}

#[test]
fn messages_never_end_in_newline() {
    for locale in [Locale::English, Locale::German] {
        for error in InputError::ALL {
            assert!(!locale.message(error).ends_with('\n'), "{locale} {error:?}");
        }
    }
}

#[rstest]
#[case("en", Locale::English)]
#[case("EN", Locale::English)]
#[case("en_US.UTF-8", Locale::English)]
#[case("C", Locale::English)]
#[case("de", Locale::German)]
#[case("de_DE.UTF-8", Locale::German)]
#[case("de-AT", Locale::German)]
fn locale_tags(#[case] tag: &str, #[case] expected: Locale) {
    assert_eq!(tag.parse::<Locale>(), Ok(expected));
}

#[test]
fn unknown_locale_tag() {
    let err = "fr_FR".parse::<Locale>().unwrap_err();
    assert_eq!(err.to_string(), "unsupported locale 'fr_FR'");
}

#[test]
fn default_locale_is_english() {
    assert_eq!(Locale::default(), Locale::English);
}
