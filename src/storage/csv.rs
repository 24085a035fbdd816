use std::{
    fs::File,
    path::Path,
};

use crate::core::{
    CommandError,
    Flashcard,
    Language,
    Phrase,
};

pub const CSV_HEADERS: [&str; 3] = ["Language", "Foreign", "English"];

/// Reads a whole CSV file into flashcards, or fails without producing any.
/// The header row must be exactly `Language,Foreign,English`; every data row
/// must have exactly 3 non-blank fields that pass language and phrase
/// validation. Errors carry the user-supplied file name, not the path.
pub fn read_flashcards(path: &Path, file_name: &str) -> Result<Vec<Flashcard>, CommandError> {
    let file = File::open(path).map_err(|_| CommandError::ImportIo(file_name.to_string()))?;
    let mut reader = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(file);

    let mut records = reader.records();
    let header = match records.next() {
        Some(Ok(record)) => record,
        _ => return Err(CommandError::InvalidCsvHeaders(file_name.to_string())),
    };
    if header.len() != CSV_HEADERS.len() || header.iter().ne(CSV_HEADERS) {
        return Err(CommandError::InvalidCsvHeaders(file_name.to_string()));
    }

    let mut cards = Vec::new();
    for record in records {
        let record = record.map_err(|_| CommandError::InvalidCsvContent(file_name.to_string()))?;
        cards.push(parse_row(&record, file_name)?);
    }
    Ok(cards)
}

fn parse_row(record: &csv::StringRecord, file_name: &str) -> Result<Flashcard, CommandError> {
    let invalid = || CommandError::InvalidCsvContent(file_name.to_string());

    if record.len() != 3 || record.iter().any(|field| field.trim().is_empty()) {
        return Err(invalid());
    }

    let language = Language::parse(&record[0]).ok_or_else(invalid)?;
    let foreign = Phrase::new(&record[1]).ok_or_else(invalid)?;
    let english = Phrase::new(&record[2]).ok_or_else(invalid)?;
    Ok(Flashcard::new(language, foreign, english))
}

/// Writes cards in the import format: the fixed header row, then one
/// 3-field row per card.
pub fn write_flashcards(
    path: &Path,
    file_name: &str,
    cards: &[&Flashcard],
) -> Result<(), CommandError> {
    let io_error = || CommandError::ExportIo(file_name.to_string());

    let mut writer = csv::Writer::from_path(path).map_err(|_| io_error())?;
    writer.write_record(CSV_HEADERS).map_err(|_| io_error())?;
    for card in cards {
        writer
            .write_record([
                card.language.name(),
                card.foreign_phrase.as_str(),
                card.english_phrase.as_str(),
            ])
            .map_err(|_| io_error())?;
    }
    writer.flush().map_err(|_| io_error())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::model::testutil::typical_cards;

    fn read_str(dir: &TempDir, content: &str) -> Result<Vec<Flashcard>, CommandError> {
        let path = dir.path().join("in.csv");
        fs::write(&path, content).unwrap();
        read_flashcards(&path, "in.csv")
    }

    #[test]
    fn reads_a_well_formed_file() {
        let dir = TempDir::new().unwrap();
        let cards = read_str(
            &dir,
            "Language,Foreign,English\n\
             Chinese,你好,hello\n\
             French,bonjour,hello\n",
        )
        .unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].language, Language::Chinese);
        assert_eq!(cards[1].foreign_phrase.as_str(), "bonjour");
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let dir = TempDir::new().unwrap();
        let cards =
            read_str(&dir, "Language,Foreign,English\nGerman,\"Guten Tag, Welt\",Good day\n")
                .unwrap();
        assert_eq!(cards[0].foreign_phrase.as_str(), "Guten Tag, Welt");
    }

    #[test]
    fn header_must_match_exactly() {
        let dir = TempDir::new().unwrap();
        let bad_headers = [
            "language,foreign,english\n",
            "Language,English,Foreign\n",
            "Language,Foreign\n",
            "Language,Foreign,English,Extra\n",
            "",
        ];
        for header in bad_headers {
            let result = read_str(&dir, &format!("{header}Chinese,你好,hello\n"));
            assert!(
                matches!(result, Err(CommandError::InvalidCsvHeaders(_))),
                "header: {header:?}"
            );
        }
    }

    #[test]
    fn rows_must_have_three_valid_fields() {
        let dir = TempDir::new().unwrap();
        let bad_rows = [
            "Chinese,你好",
            "Chinese,你好,hello,extra",
            "Chinese, ,hello",
            "Sumerian,x,y",
        ];
        for row in bad_rows {
            let result = read_str(&dir, &format!("Language,Foreign,English\n{row}\n"));
            assert!(matches!(result, Err(CommandError::InvalidCsvContent(_))), "row: {row:?}");
        }
    }

    #[test]
    fn an_empty_body_is_a_valid_file() {
        let dir = TempDir::new().unwrap();
        assert!(read_str(&dir, "Language,Foreign,English\n").unwrap().is_empty());
    }

    #[test]
    fn written_files_read_back_identically() {
        let dir = TempDir::new().unwrap();
        let cards = typical_cards();
        let refs: Vec<&Flashcard> = cards.iter().collect();
        let path = dir.path().join("out.csv");

        write_flashcards(&path, "out.csv", &refs).unwrap();
        let loaded = read_flashcards(&path, "out.csv").unwrap();
        assert_eq!(loaded, cards);
    }
}
