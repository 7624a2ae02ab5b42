use crate::error::ScaffoldError;
use serde::Serialize;

/// Derived naming forms for one resource.
///
/// All generated artifacts (model, controller, migration, views, route
/// entries) draw their names from a single `NameForms` value, so the
/// spelling can never drift between files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameForms {
    /// Lowercase singular, e.g. `post`.
    pub singular: String,
    /// Lowercase plural, e.g. `posts`. Also used as the table name.
    pub plural: String,
    /// Capitalized singular, e.g. `Post`.
    pub class_name: String,
    /// Controller class name, e.g. `PostController`.
    pub controller_name: String,
}

impl NameForms {
    /// Normalizes a raw resource token into its derived forms.
    ///
    /// The token is lowercased first; empty input or characters outside
    /// `[A-Za-z_]` are rejected with `InvalidName`.
    pub fn parse(raw: &str) -> Result<Self, ScaffoldError> {
        if raw.is_empty() {
            return Err(ScaffoldError::InvalidName {
                name: raw.to_string(),
                reason: "name must not be empty".to_string(),
            });
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphabetic() && *c != '_') {
            return Err(ScaffoldError::InvalidName {
                name: raw.to_string(),
                reason: format!("character '{}' is not allowed (expected [A-Za-z_])", bad),
            });
        }

        let singular = raw.to_lowercase();
        let plural = pluralize(&singular);
        let class_name = capitalize(&singular);
        let controller_name = format!("{}Controller", class_name);

        Ok(Self {
            singular,
            plural,
            class_name,
            controller_name,
        })
    }
}

/// Best-effort English pluralization: consonant+`y` -> `ies`, sibilant
/// endings -> `es`, everything else -> `s`. Irregular plurals
/// ("person", "mouse", ...) are out of scope.
pub fn pluralize(word: &str) -> String {
    let bytes = word.as_bytes();
    if word.ends_with('y') && bytes.len() > 1 && !is_vowel(bytes[bytes.len() - 2] as char) {
        format!("{}ies", &word[..word.len() - 1])
    } else if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_derives_all_forms() {
        let forms = NameForms::parse("post").unwrap();
        assert_eq!(forms.singular, "post");
        assert_eq!(forms.plural, "posts");
        assert_eq!(forms.class_name, "Post");
        assert_eq!(forms.controller_name, "PostController");
    }

    #[test]
    fn parse_lowercases_input() {
        let forms = NameForms::parse("Post").unwrap();
        assert_eq!(forms.singular, "post");
        assert_eq!(forms.class_name, "Post");
    }

    #[test]
    fn parse_is_deterministic() {
        assert_eq!(
            NameForms::parse("category").unwrap(),
            NameForms::parse("category").unwrap()
        );
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!(
            NameForms::parse(""),
            Err(ScaffoldError::InvalidName { .. })
        ));
    }

    #[test]
    fn parse_rejects_non_alphabetic() {
        for bad in ["post-tag", "post.1", "post tag", "pøst"] {
            assert!(
                matches!(NameForms::parse(bad), Err(ScaffoldError::InvalidName { .. })),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn pluralize_consonant_y() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("city"), "cities");
    }

    #[test]
    fn pluralize_vowel_y_keeps_y() {
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("key"), "keys");
    }

    #[test]
    fn pluralize_sibilants() {
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("class"), "classes");
        assert_eq!(pluralize("batch"), "batches");
        assert_eq!(pluralize("dish"), "dishes");
    }

    #[test]
    fn pluralize_default() {
        assert_eq!(pluralize("user"), "users");
    }
}
