#![no_main]

use descent_syntax::{parse, parse_tokens, Event, EventLog, Lexer, SyntaxKind};
use libfuzzer_sys::fuzz_target;

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fuzz_target!(|data: &[u8]| {
    let raw = decode_source(data);

    // Arbitrary text, and the same text inside a statement part so that the
    // deeper rules are reached.
    let sources = [raw.clone(), format!("begin\n{raw}\nend\n")];

    for source in &sources {
        let mut log = EventLog::new();
        let result = parse_tokens(Lexer::new(source), &mut log);
        match result {
            Ok(()) => assert_eq!(log.reported(), 0),
            Err(_) => assert_eq!(log.reported(), 1),
        }

        let tree = parse(source);
        assert_eq!(tree.ok(), log.reported() == 0);

        // The tree holds the same terminals as the event log, under one root.
        let root = tree.syntax();
        assert_eq!(root.kind(), SyntaxKind::Root);
        let tokens = root
            .descendants_with_tokens()
            .filter(|element| element.as_token().is_some())
            .count();
        let terminals = log
            .events()
            .iter()
            .filter(|event| matches!(event, Event::Terminal(_)))
            .count();
        assert_eq!(tokens, terminals);
    }
});
