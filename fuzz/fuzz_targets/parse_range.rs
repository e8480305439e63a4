#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate rs_poker_range;

use rs_poker_range::holdem::{Highlight, RangeHighlighter, RangeParser, RangeParserConfig};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct ParseRangeInput {
    pub spec: String,
    pub marker: String,
}

fuzz_target!(|input: ParseRangeInput| {
    for config in [
        RangeParserConfig::default(),
        RangeParserConfig {
            emphasis_marker: input.marker.clone(),
            strict: false,
        },
    ] {
        let parser = RangeParser::new(config);

        // Parsing never fails and is repeatable
        let (parsed, diagnostics) = parser.parse_with_diagnostics(&input.spec);
        assert_eq!(parsed, parser.parse(&input.spec));
        assert!(parsed.emph.is_subset(&parsed.base));

        // Strict parsing only fails when something was skipped
        assert_eq!(diagnostics.is_empty(), parser.parse_strict(&input.spec).is_ok());

        // Everything that comes out is a canonical cell code
        for hand in parsed.base.iter() {
            let code = hand.to_notation();
            assert!(parsed.base.contains_code(&code));
            assert!(hand.high() >= hand.low());
        }

        let highlighter = RangeHighlighter::new(parsed);
        for (row, cells) in highlighter.grid().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let in_base = parsed.base.contains_position(row, col);
                assert_eq!(in_base, *cell != Highlight::None);
            }
        }
    }
});
