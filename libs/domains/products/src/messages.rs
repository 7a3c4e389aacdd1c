use crate::models::{ErrorCode, Locale};

/// Caller-facing text for a validation outcome, in English.
pub fn message_for(code: ErrorCode) -> &'static str {
    message_for_locale(code, Locale::En)
}

/// Caller-facing text for a validation outcome.
///
/// `ErrorCode::Ok` has no message of its own; use [`inserted_message`] once
/// the product is stored.
pub fn message_for_locale(code: ErrorCode, locale: Locale) -> &'static str {
    match (code, locale) {
        (ErrorCode::Ok, _) => "",
        (ErrorCode::MissingName, Locale::En) => "product name not provided",
        (ErrorCode::MissingName, Locale::PtBr) => "Nome do produto não informado.",
        (ErrorCode::InvalidPrice, Locale::En) => "product price must be greater than zero",
        (ErrorCode::InvalidPrice, Locale::PtBr) => "Valor do produto deve ser superior a zero.",
    }
}

pub fn inserted_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "product inserted successfully",
        Locale::PtBr => "Produto inserido com sucesso.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_messages() {
        assert_eq!(message_for(ErrorCode::MissingName), "product name not provided");
        assert_eq!(
            message_for(ErrorCode::InvalidPrice),
            "product price must be greater than zero"
        );
        assert_eq!(message_for(ErrorCode::Ok), "");
    }

    #[test]
    fn test_portuguese_messages() {
        assert_eq!(
            message_for_locale(ErrorCode::MissingName, Locale::PtBr),
            "Nome do produto não informado."
        );
        assert_eq!(inserted_message(Locale::PtBr), "Produto inserido com sucesso.");
    }

    #[test]
    fn test_failure_messages_are_distinct_and_non_empty() {
        for locale in [Locale::En, Locale::PtBr] {
            let name = message_for_locale(ErrorCode::MissingName, locale);
            let price = message_for_locale(ErrorCode::InvalidPrice, locale);
            assert!(!name.is_empty());
            assert!(!price.is_empty());
            assert_ne!(name, price);
        }
    }
}
