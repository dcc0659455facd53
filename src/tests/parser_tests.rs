//! tests/parser_tests.rs
//! Pruebas para `ContactParser`.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use actix_rt::test;
    use tempfile::NamedTempFile;

    use crate::models::recipient_model::RecipientStatus;
    use crate::services::contact_parser::{ContactParser, ParseError};

    #[test]
    async fn test_two_column_lines_in_order() {
        let records = ContactParser::new()
            .parse_str("Acme,acme@x.com\nBeta,beta@y.com\nGamma Lawn,gamma@z.com");

        assert_eq!(records.len(), 3);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Beta", "Gamma Lawn"]);
        assert_eq!(records[2].email, "gamma@z.com");
        assert!(records.iter().all(|r| r.status == RecipientStatus::Pending));
    }

    #[test]
    async fn test_blank_lines_are_skipped() {
        let records = ContactParser::new().parse_str("A,a@x.com\n\n\nB,b@y.com");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email, "a@x.com");
        assert_eq!(records[1].email, "b@y.com");
    }

    #[test]
    async fn test_only_blank_content_is_empty() {
        let parser = ContactParser::new();
        assert!(parser.parse_str("").is_empty());
        assert!(parser.parse_str("\n  \n\t\n\r\n").is_empty());
    }

    #[test]
    async fn test_fields_are_trimmed_and_crlf_handled() {
        let records = ContactParser::new().parse_str("  Acme Movers ,  acme@x.com  \r\nBeta,beta@y.com\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Acme Movers");
        assert_eq!(records[0].email, "acme@x.com");
        assert_eq!(records[1].email, "beta@y.com");
    }

    #[test]
    async fn test_line_without_email_is_kept() {
        let records = ContactParser::new().parse_str("OnlyName,");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "OnlyName");
        assert_eq!(records[0].email, "");
        assert!(records[0].is_incomplete());

        let no_comma = ContactParser::new().parse_str("NoComma");
        assert_eq!(no_comma.len(), 1);
        assert_eq!(no_comma[0].email, "");
    }

    #[test]
    async fn test_splits_on_first_comma() {
        let records = ContactParser::new().parse_str("Acme,acme@x.com,extra");
        assert_eq!(records[0].name, "Acme");
        assert_eq!(records[0].email, "acme@x.com,extra");
    }

    #[test]
    async fn test_duplicates_are_kept() {
        let records = ContactParser::new().parse_str("A,same@x.com\nB,same@x.com");
        assert_eq!(records.len(), 2);
    }

    #[test]
    async fn test_skip_header() {
        let text = "\nname,email\nAcme,acme@x.com\n";
        let records = ContactParser::new().with_header(true).parse_str(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Acme");

        // sin la opción, el encabezado se toma como destinatario
        let records = ContactParser::new().parse_str(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email, "email");
    }

    #[test]
    async fn test_invalid_utf8_is_parse_error() {
        let bytes = b"Acme,acme@x.com\n\xff\xfe,bad";
        let err = ContactParser::new().parse_bytes(bytes).unwrap_err();
        match err {
            ParseError::NotText { offset } => assert_eq!(offset, 16),
            other => panic!("Error inesperado: {:?}", other),
        }
    }

    #[test]
    async fn test_parse_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "Acme,acme@x.com\n\nBeta,beta@y.com\n").unwrap();

        let records = ContactParser::new()
            .parse_file(file.path())
            .await
            .expect("No se pudo leer la lista");
        assert_eq!(records.len(), 2);
    }

    #[test]
    async fn test_missing_file_is_read_error() {
        let path = Path::new("/definitely/not/here/contacts.csv");
        let err = ContactParser::new().parse_file(path).await.unwrap_err();
        assert!(matches!(err, ParseError::Read { .. }));
        assert!(err.to_string().contains("contacts.csv"));
    }
}
