//! Fixture-driven tests for report classification.
//!
//! Fixtures (.md) live in `fixtures/`; expected outlines are inline snapshots.

use pretty_assertions::assert_eq;

use crate::report::{Block, classify, invariants, outline};

fn load_fixture(name: &str) -> String {
    let path = format!(
        "{}/src/report/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(path).unwrap()
}

fn classify_fixture(name: &str) -> Vec<Block> {
    let text = load_fixture(name);
    let blocks = classify(&text);
    invariants::check(&text, &blocks);
    blocks
}

#[test]
fn fixture_verdicts() {
    let blocks = classify_fixture("verdicts");
    assert_eq!(
        blocks,
        vec![
            Block::SubHeading {
                level: 3,
                text: "Brand Identification".into()
            },
            Block::VerdictStatement {
                prefix: "🏷️ ".into(),
                verdict: "Zara Essential Collection (85% confidence)".into(),
                suffix: "".into(),
            },
            Block::VerdictStatement {
                prefix: "".into(),
                verdict: "COS".into(),
                suffix: " with some doubt about the ".into(),
            },
            Block::VerdictStatement {
                prefix: "Overall ".into(),
                verdict: "unclear".into(),
                suffix: "".into(),
            },
            Block::VerdictStatement {
                prefix: "- ".into(),
                verdict: "Mango".into(),
                suffix: " (bullet form)".into(),
            },
            Block::Spacer,
        ]
    );
}

#[test]
fn fixture_numbered_tie_break() {
    let blocks = classify_fixture("numbered_tie_break");
    insta::assert_snapshot!(outline(&blocks), @r#"
    1: SubHeading(3) text="Style Details"
    2: Spacer
    3: NumberedHeading number="1" title="Design Elements:"
    4: NumberedHeading number="2" title="Material Analysis"
    5: NumberedEntry number="3" title="Color Profile" body="Soft blush pink"
    6: Paragraph text="4. **Fit:** relaxed through the body"
    7: NumberedHeading number="5" title="Styling Category"
    8: Paragraph text="  6. **Indented**"
    9: Spacer
    "#);
}

#[test]
fn fixture_priced_bullets() {
    let blocks = classify_fixture("priced_bullets");
    insta::assert_snapshot!(outline(&blocks), @r#"
    1: SubHeading(3) text="Where to Purchase"
    2: PricedBullet brand="Zara" item_name="Collared Keyhole Top" price="$35.90" trailing=" - Available online and in stores"
    3: IndentedBullet text="**Zara Collection ID**: Likely from their spring/summer essentials line"
    4: PricedBullet brand="Express" item_name="Solid Keyhole Collar Top" price="$44.50" trailing=" (often on sale for $29.99)"
    5: PlainBullet text="**COS**: \"Tailored Collar Top\" - $69"
    6: PricedBullet brand="" item_name="Essential Collar Top" price="$39.99" trailing=""
    7: Spacer
    "#);
}

#[test]
fn fixture_malformed_degrades_to_paragraphs() {
    let blocks = classify_fixture("malformed");
    insta::assert_snapshot!(outline(&blocks), @r#####"
    1: SectionHeading(2) text=""
    2: Paragraph text="##Brand"
    3: Paragraph text="# Title"
    4: Paragraph text="#### Deep heading"
    5: Paragraph text="1.**No space**"
    6: Paragraph text="- "
    7: Paragraph text="-dash"
    8: PlainBullet text="four spaces"
    9: Paragraph text="   -tight"
    10: Paragraph text="**Verdict"
    11: Paragraph text="trailing prose after a truncated respo"
    12: Spacer
    "#####);
}

#[test]
fn empty_report_is_one_spacer() {
    assert_eq!(classify(""), vec![Block::Spacer]);
}

#[test]
fn blank_lines_are_not_merged() {
    assert_eq!(
        classify("\n\n"),
        vec![Block::Spacer, Block::Spacer, Block::Spacer]
    );
}

#[test]
fn trailing_newline_yields_trailing_spacer() {
    let blocks = classify("## Outfit Analysis\n");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1], Block::Spacer);
}

#[test]
fn classification_is_idempotent() {
    let text = load_fixture("priced_bullets");
    assert_eq!(classify(&text), classify(&text));
}

#[test]
fn heading_state_does_not_leak_between_calls() {
    let after_heading = classify("### Care Instructions\n- Cool iron if needed");
    let alone = classify("- Cool iron if needed");
    assert_eq!(after_heading[1], alone[0]);
}

#[test]
fn plain_prose_round_trips_verbatim() {
    for line in [
        "This versatile top can be dressed up or down.",
        "   leading and trailing   ",
        "Price on request: ask in store",
        "Verdict: no bold marker here",
    ] {
        assert_eq!(
            classify(line),
            vec![Block::Paragraph {
                text: line.to_string()
            }]
        );
    }
}

#[test]
fn crlf_lines_keep_carriage_return_in_paragraphs() {
    assert_eq!(
        classify("Soft blush pink\r\n"),
        vec![
            Block::Paragraph {
                text: "Soft blush pink\r".into()
            },
            Block::Spacer,
        ]
    );
}
