pub mod arguments;

use arguments::{
    parse_index,
    parse_index_range,
    parse_sample_size,
    tokenize,
    ArgumentMap,
    PREFIX_ENGLISH,
    PREFIX_FOREIGN,
    PREFIX_LANGUAGE,
    PREFIX_RANGE,
};

use crate::{
    core::{
        Flashcard,
        Language,
        ParseError,
        Phrase,
    },
    logic::commands::{
        CardEdits,
        Command,
    },
};

pub const ADD_USAGE: &str = "add: Adds a flashcard to LingoGO!\n\
     Parameters: l/LANGUAGE f/FOREIGN_PHRASE e/ENGLISH_PHRASE\n\
     Example: add l/Chinese f/早安 e/Good morning";
pub const EDIT_USAGE: &str = "edit: Edits the flashcard at the given index of the displayed list.\n\
     Parameters: INDEX [l/LANGUAGE] [f/FOREIGN_PHRASE] [e/ENGLISH_PHRASE]\n\
     Example: edit 1 l/Chinese e/hello";
pub const DELETE_USAGE: &str =
    "delete: Deletes the flashcard at the given index of the displayed list.\n\
     Parameters: INDEX\n\
     Example: delete 2";
pub const CLEAR_USAGE: &str = "clear: Clears all flashcards in LingoGO!\nExample: clear";
pub const FIND_USAGE: &str =
    "find: Finds flashcards whose phrases contain any of the given keywords.\n\
     Parameters: [e/ENGLISH_KEYWORD]... [f/FOREIGN_KEYWORD]...\n\
     Example: find e/hello f/你好";
pub const LIST_USAGE: &str = "list: Lists flashcards, optionally a random selection of n of them.\n\
     Parameters: [NUMBER_OF_FLASHCARDS]\n\
     Example: list 4";
pub const FLIP_USAGE: &str =
    "flip: Flips the display direction of the flashcard at the given index.\n\
     Parameters: INDEX\n\
     Example: flip 1";
pub const IMPORT_USAGE: &str = "import: Imports flashcards from a CSV file into LingoGO!\n\
     Parameters: CSV_FILE_NAME (must exist in the data folder and have .csv extension)\n\
     Example: import dictionary.csv";
pub const EXPORT_USAGE: &str = "export: Exports the displayed flashcards to a CSV file.\n\
     Parameters: CSV_FILE_NAME (will be written to the data folder)\n\
     Example: export dictionary.csv";
pub const TEST_USAGE: &str =
    "test: Starts a slideshow over the displayed flashcards, optionally narrowed to a range.\n\
     Parameters: [r/FIRST_INDEX SECOND_INDEX]\n\
     Example: test r/1 4";
pub const ANSWER_USAGE: &str = "answer: Checks whether the English phrase of the displayed \
     flashcard in the slideshow matches the given phrase.\n\
     Parameters: e/ENGLISH_PHRASE\n\
     Example: answer e/hello";
pub const NEXT_USAGE: &str = "next: Shows the next slide of the slideshow.\nExample: next";
pub const STOP_USAGE: &str = "stop: Stops the current slideshow.\nExample: stop";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";

/// One entry per command keyword: the open/closed extension point. Adding a
/// command means adding a row here plus a `Command` variant.
pub struct CommandSpec {
    pub word: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    parse: fn(&str) -> Result<Command, ParseError>,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        word: "add",
        description: "Adds a flashcard to LingoGO!",
        usage: ADD_USAGE,
        parse: parse_add,
    },
    CommandSpec {
        word: "edit",
        description: "Edits the flashcard at the given index of the displayed list",
        usage: EDIT_USAGE,
        parse: parse_edit,
    },
    CommandSpec {
        word: "delete",
        description: "Deletes the flashcard at the given index of the displayed list",
        usage: DELETE_USAGE,
        parse: parse_delete,
    },
    CommandSpec {
        word: "clear",
        description: "Clears all flashcards",
        usage: CLEAR_USAGE,
        parse: |_| Ok(Command::Clear),
    },
    CommandSpec {
        word: "find",
        description: "Finds flashcards by keyword",
        usage: FIND_USAGE,
        parse: parse_find,
    },
    CommandSpec {
        word: "list",
        description: "Lists flashcards, optionally a random selection",
        usage: LIST_USAGE,
        parse: parse_list,
    },
    CommandSpec {
        word: "flip",
        description: "Flips the display direction of a flashcard",
        usage: FLIP_USAGE,
        parse: parse_flip,
    },
    CommandSpec {
        word: "import",
        description: "Imports flashcards from a CSV file in the data folder",
        usage: IMPORT_USAGE,
        parse: parse_import,
    },
    CommandSpec {
        word: "export",
        description: "Exports the displayed flashcards to a CSV file",
        usage: EXPORT_USAGE,
        parse: parse_export,
    },
    CommandSpec {
        word: "test",
        description: "Starts a slideshow over the displayed flashcards",
        usage: TEST_USAGE,
        parse: parse_test,
    },
    CommandSpec {
        word: "answer",
        description: "Answers the displayed slide",
        usage: ANSWER_USAGE,
        parse: parse_answer,
    },
    CommandSpec {
        word: "next",
        description: "Shows the next slide",
        usage: NEXT_USAGE,
        parse: |_| Ok(Command::Next),
    },
    CommandSpec {
        word: "stop",
        description: "Stops the current slideshow",
        usage: STOP_USAGE,
        parse: |_| Ok(Command::Stop),
    },
    CommandSpec {
        word: "help",
        description: "Shows program usage instructions",
        usage: HELP_USAGE,
        parse: |_| Ok(Command::Help),
    },
    CommandSpec {
        word: "exit",
        description: "Exits the program",
        usage: EXIT_USAGE,
        parse: |_| Ok(Command::Exit),
    },
];

/// Splits raw input into a command word and remainder, then hands the
/// remainder to that command's sub-parser. No side effects.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat { usage: HELP_USAGE });
    }

    let (word, rest) = match trimmed.find(char::is_whitespace) {
        Some(split) => (&trimmed[..split], &trimmed[split..]),
        None => (trimmed, ""),
    };

    match COMMANDS.iter().find(|spec| spec.word == word) {
        Some(spec) => (spec.parse)(rest),
        None => Err(ParseError::UnknownCommand),
    }
}

fn invalid_format(usage: &'static str) -> ParseError {
    ParseError::InvalidFormat { usage }
}

/// A prefix that must appear exactly once, with a non-empty value.
fn required_value<'a>(
    map: &'a ArgumentMap,
    prefix: &str,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    if map.count(prefix) != 1 {
        return Err(invalid_format(usage));
    }
    match map.value(prefix) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(invalid_format(usage)),
    }
}

fn parse_language(input: &str) -> Result<Language, ParseError> {
    Language::parse(input).ok_or(ParseError::InvalidLanguage)
}

fn parse_phrase(input: &str) -> Result<Phrase, ParseError> {
    Phrase::new(input).ok_or(ParseError::InvalidPhrase)
}

fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_LANGUAGE, PREFIX_FOREIGN, PREFIX_ENGLISH]);
    if !map.preamble().is_empty() {
        return Err(invalid_format(ADD_USAGE));
    }

    let language = parse_language(required_value(&map, PREFIX_LANGUAGE, ADD_USAGE)?)?;
    let foreign = parse_phrase(required_value(&map, PREFIX_FOREIGN, ADD_USAGE)?)?;
    let english = parse_phrase(required_value(&map, PREFIX_ENGLISH, ADD_USAGE)?)?;

    Ok(Command::Add { card: Flashcard::new(language, foreign, english) })
}

fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_LANGUAGE, PREFIX_FOREIGN, PREFIX_ENGLISH]);
    if map.preamble().is_empty() {
        return Err(invalid_format(EDIT_USAGE));
    }
    let index = parse_index(map.preamble())?;

    for prefix in [PREFIX_LANGUAGE, PREFIX_FOREIGN, PREFIX_ENGLISH] {
        if map.count(prefix) > 1 {
            return Err(invalid_format(EDIT_USAGE));
        }
    }

    let edits = CardEdits {
        language: map.value(PREFIX_LANGUAGE).map(parse_language).transpose()?,
        foreign_phrase: map.value(PREFIX_FOREIGN).map(parse_phrase).transpose()?,
        english_phrase: map.value(PREFIX_ENGLISH).map(parse_phrase).transpose()?,
    };
    if edits.is_empty() {
        return Err(invalid_format(EDIT_USAGE));
    }

    Ok(Command::Edit { index, edits })
}

fn parse_delete(args: &str) -> Result<Command, ParseError> {
    Ok(Command::Delete { index: parse_index(args)? })
}

fn parse_find(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_ENGLISH, PREFIX_FOREIGN]);
    if !map.preamble().is_empty() {
        return Err(invalid_format(FIND_USAGE));
    }

    let english: Vec<String> = map.values(PREFIX_ENGLISH).into_iter().map(String::from).collect();
    let foreign: Vec<String> = map.values(PREFIX_FOREIGN).into_iter().map(String::from).collect();

    if english.is_empty() && foreign.is_empty() {
        return Err(invalid_format(FIND_USAGE));
    }
    if english.iter().chain(&foreign).any(|keyword| keyword.trim().is_empty()) {
        return Err(invalid_format(FIND_USAGE));
    }

    Ok(Command::Find { english, foreign })
}

fn parse_list(args: &str) -> Result<Command, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Ok(Command::List { n: None });
    }
    Ok(Command::List { n: Some(parse_sample_size(trimmed)?) })
}

fn parse_flip(args: &str) -> Result<Command, ParseError> {
    Ok(Command::Flip { index: parse_index(args)? })
}

fn parse_csv_file_name(args: &str, usage: &'static str) -> Result<String, ParseError> {
    let name = args.trim();
    if name.is_empty() {
        return Err(invalid_format(usage));
    }
    if !name.ends_with(".csv")
        || name.len() == ".csv".len()
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(ParseError::InvalidCsvFileName(name.to_string()));
    }
    Ok(name.to_string())
}

fn parse_import(args: &str) -> Result<Command, ParseError> {
    Ok(Command::Import { file_name: parse_csv_file_name(args, IMPORT_USAGE)? })
}

fn parse_export(args: &str) -> Result<Command, ParseError> {
    Ok(Command::Export { file_name: parse_csv_file_name(args, EXPORT_USAGE)? })
}

fn parse_test(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_RANGE]);
    if !map.preamble().is_empty() || map.count(PREFIX_RANGE) > 1 {
        return Err(invalid_format(TEST_USAGE));
    }
    let range = map.value(PREFIX_RANGE).map(parse_index_range).transpose()?;
    Ok(Command::Test { range })
}

fn parse_answer(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_ENGLISH]);
    if !map.preamble().is_empty() {
        return Err(invalid_format(ANSWER_USAGE));
    }
    let phrase = parse_phrase(required_value(&map, PREFIX_ENGLISH, ANSWER_USAGE)?)?;
    Ok(Command::Answer { phrase })
}
