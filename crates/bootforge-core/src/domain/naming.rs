//! Identifier derivation shared by every renderer.
//!
//! Every class name, file path, column and URL segment in a generated project
//! is computed here from a small set of inputs. Keeping the derivations in one
//! place is what keeps the generated artifacts agreeing with each other.

/// Split a string into lowercase words based on casing and separators.
///
/// ## Word Boundary Detection
///
/// 1. **Separators:** `_`, `-`, whitespace and any other non-alphanumeric
///    character always split
/// 2. **Case transition (camelCase):** `aB` splits between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` splits between `P` and `R`
///    (detected by the `Upper Upper Lower` pattern)
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if (c.is_lowercase() || c.is_ascii_digit()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

/// `"firstName"` → `"first_name"`. Used for column and database names.
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// `"Order Item"` → `"order-item"`.
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to PascalCase.
///
/// | Input | Output |
/// |-------|--------|
/// | "my-app" | "MyApp" |
/// | "user management" | "UserManagement" |
/// | "HTTPRequest" | "HttpRequest" |
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// `"first name"` → `"firstName"`.
pub fn to_camel_case(s: &str) -> String {
    decapitalize(&to_pascal_case(s))
}

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character and leave the rest untouched.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English plural for a single lowercase or camelCase word.
///
/// Covers the regular cases only: `category` → `categories`,
/// `address` → `addresses`, `post` → `posts`.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let ends_with_consonant_y = lower.ends_with('y')
        && lower
            .chars()
            .rev()
            .nth(1)
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));

    if ends_with_consonant_y {
        format!("{}ies", &word[..word.len() - 1])
    } else if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// Java keywords and literals; none of them may name a package, field or
/// local variable.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import",
    "instanceof", "int", "interface", "long", "native", "new", "null", "package",
    "private", "protected", "public", "return", "short", "static", "strictfp", "super",
    "switch", "synchronized", "this", "throw", "throws", "transient", "true", "try",
    "void", "volatile", "while",
];

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Append `_` to a reserved word (`package` → `package_`); anything else is
/// returned unchanged.
pub fn escape_reserved(word: impl Into<String>) -> String {
    let mut word = word.into();
    if is_reserved(&word) {
        word.push('_');
    }
    word
}

/// Property name referring to an instance of `type_name` (`Order` → `order`,
/// `Class` → `class_`).
pub fn property_name(type_name: &str) -> String {
    escape_reserved(decapitalize(type_name))
}

/// Turn free text into a type identifier, or `None` if nothing usable remains.
///
/// `"User Management"` → `"UserManagement"`, `"order-item"` → `"OrderItem"`.
/// A leading digit is not a legal identifier start, so it gets an `E` prefix.
/// The result always starts uppercase and so never collides with a keyword.
pub fn type_identifier(text: &str) -> Option<String> {
    let pascal = to_pascal_case(text);
    let ident: String = pascal.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    match ident.chars().next() {
        None => None,
        Some(c) if c.is_ascii_digit() => Some(format!("E{ident}")),
        Some(_) => Some(ident),
    }
}

/// Turn free text into a field identifier (`"First Name"` → `"firstName"`).
/// Keywords are escaped: `"package"` → `"package_"`.
pub fn field_identifier(text: &str) -> Option<String> {
    // camelCase input like "firstName" is kept intact instead of re-split.
    let already_identifier = text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && text.chars().all(|c| c.is_ascii_alphanumeric());
    if already_identifier {
        return Some(property_name(text));
    }
    type_identifier(text).map(|t| property_name(&t))
}

/// Relational table name for an entity: `OrderItem` → `order_items`.
pub fn table_name(entity: &str) -> String {
    let mut words = split_words(entity);
    if let Some(last) = words.pop() {
        words.push(pluralize(&last));
    }
    words.join("_")
}

/// URL collection segment for an entity: `OrderItem` → `order-items`.
pub fn collection_segment(entity: &str) -> String {
    table_name(entity).replace('_', "-")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── split_words ──────────────────────────────────────────────────────────

    #[test]
    fn splits_on_separators_and_case_transitions() {
        assert_eq!(split_words("my_awesome-app now"), ["my", "awesome", "app", "now"]);
        assert_eq!(split_words("myAwesomeApp"), ["my", "awesome", "app"]);
        assert_eq!(split_words("XMLHttpRequest"), ["xml", "http", "request"]);
        assert_eq!(split_words("order2Item"), ["order2", "item"]);
    }

    #[test]
    fn punctuation_is_a_separator() {
        assert_eq!(split_words("Shop & Go!"), ["shop", "go"]);
    }

    // ── case conversion ─────────────────────────────────────────────────────

    #[test]
    fn case_conversions() {
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_kebab_case("Order Item"), "order-item");
        assert_eq!(to_pascal_case("my-app"), "MyApp");
        assert_eq!(to_camel_case("Post Media"), "postMedia");
    }

    #[test]
    fn capitalize_leaves_tail_untouched() {
        assert_eq!(capitalize("userType"), "UserType");
        assert_eq!(decapitalize("PostMedia"), "postMedia");
        assert_eq!(capitalize(""), "");
    }

    // ── pluralize ───────────────────────────────────────────────────────────

    #[test]
    fn regular_plurals() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("match"), "matches");
    }

    // ── identifiers ─────────────────────────────────────────────────────────

    #[test]
    fn type_identifier_strips_free_text() {
        assert_eq!(type_identifier("User Management").as_deref(), Some("UserManagement"));
        assert_eq!(type_identifier("order-item").as_deref(), Some("OrderItem"));
        assert_eq!(type_identifier("3d Models").as_deref(), Some("E3dModels"));
        assert_eq!(type_identifier("  ---  "), None);
    }

    #[test]
    fn field_identifier_keeps_camel_case() {
        assert_eq!(field_identifier("firstName").as_deref(), Some("firstName"));
        assert_eq!(field_identifier("First Name").as_deref(), Some("firstName"));
        assert_eq!(field_identifier("total_amount").as_deref(), Some("totalAmount"));
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(field_identifier("package").as_deref(), Some("package_"));
        assert_eq!(field_identifier("Default").as_deref(), Some("default_"));
        assert_eq!(field_identifier("new").as_deref(), Some("new_"));
        assert_eq!(property_name("Class"), "class_");
        assert_eq!(property_name("Order"), "order");
        assert_eq!(type_identifier("class").as_deref(), Some("Class"));
        assert!(!is_reserved("packages"));
    }

    #[test]
    fn table_and_collection_names() {
        assert_eq!(table_name("OrderItem"), "order_items");
        assert_eq!(table_name("Category"), "categories");
        assert_eq!(collection_segment("PostMedia"), "post-medias");
    }
}
