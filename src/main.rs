use std::{env, fs::read_to_string, rc::Rc, time::Instant};

use lexer::{
    display_error,
    errors::errors::Error,
    lexer::{
        lang,
        scanner::{PrecedenceLookup, Scanner},
        tokens::TokenKind,
    },
};

fn default_precedence() -> PrecedenceLookup {
    let mut table = PrecedenceLookup::new();

    table.insert(TokenKind::Assignment, 1);
    table.insert(TokenKind::PlusEquals, 1);
    table.insert(TokenKind::MinusEquals, 1);
    table.insert(TokenKind::StarEquals, 1);
    table.insert(TokenKind::SlashEquals, 1);
    table.insert(TokenKind::PercentEquals, 1);
    table.insert(TokenKind::CaretEquals, 1);
    table.insert(TokenKind::AmpersandEquals, 1);
    table.insert(TokenKind::PipeEquals, 1);

    table.insert(TokenKind::Question, 2);

    table.insert(TokenKind::Or, 3);
    table.insert(TokenKind::CaretCaret, 4);
    table.insert(TokenKind::And, 5);
    table.insert(TokenKind::Pipe, 6);
    table.insert(TokenKind::Caret, 7);
    table.insert(TokenKind::Ampersand, 8);

    table.insert(TokenKind::Equals, 9);
    table.insert(TokenKind::NotEquals, 9);
    table.insert(TokenKind::Less, 10);
    table.insert(TokenKind::LessEquals, 10);
    table.insert(TokenKind::Greater, 10);
    table.insert(TokenKind::GreaterEquals, 10);

    table.insert(TokenKind::ShiftLeft, 11);
    table.insert(TokenKind::ShiftRight, 11);
    table.insert(TokenKind::Plus, 12);
    table.insert(TokenKind::Dash, 12);
    table.insert(TokenKind::Star, 13);
    table.insert(TokenKind::Slash, 13);
    table.insert(TokenKind::Percent, 13);

    table.insert(TokenKind::Dot, 14);

    table
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let mut scanner = Scanner::new(
        file_contents,
        Some(String::from(file_name)),
        default_precedence(),
    );

    let mut errors: Vec<Error> = vec![];

    loop {
        let token = scanner.next_token();
        token.debug();

        match token.kind {
            TokenKind::Unrecognised => {
                errors.push(Error::unrecognised(&token, Rc::clone(scanner.file())));
            }
            TokenKind::Number if lang::number_needs_validation(token.lexeme()) => {
                errors.push(Error::malformed_number(&token, Rc::clone(scanner.file())));
            }
            TokenKind::EOF => break,
            _ => {}
        }
    }

    println!("Tokenized in {:?}", start.elapsed());

    for error in &errors {
        display_error(error);
    }
}
