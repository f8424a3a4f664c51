use chatmark_engine::parsing::snapshot;
use chatmark_engine::{parse_blocks, tokenize_inline};

#[test]
fn full_reply_snapshot() {
    let reply = "\
# Greetings

Here is what I found about the `run` command:

- It accepts **flags** after the name
- It prints `--help` on demand

---

1. install it
2. run it

That is **all**.";

    let doc = parse_blocks(reply);
    snapshot::check(&doc);

    insta::assert_snapshot!(snapshot::normalize(&doc), @r#"
    Heading(1)
      Plain "Greetings"
    Paragraph
      Plain "Here is what I found about the "
      Code "run"
      Plain " command:"
    BulletList
      Item
        Plain "It accepts "
        Bold "flags"
        Plain " after the name"
      Item
        Plain "It prints "
        Code "--help"
        Plain " on demand"
    Rule
    OrderedLine
      Plain "1. install it"
    OrderedLine
      Plain "2. run it"
    Paragraph
      Plain "That is "
      Bold "all"
      Plain "."
    "#);
}

#[test]
fn mixed_rule_characters_snapshot() {
    let doc = parse_blocks("above\n-*_-*_\nbelow");
    snapshot::check(&doc);

    insta::assert_snapshot!(snapshot::normalize(&doc), @r#"
    Paragraph
      Plain "above"
    Rule
    Paragraph
      Plain "below"
    "#);
}

/// Any input parses without panicking and upholds the structural
/// invariants, malformed markdown included.
#[test]
fn hostile_inputs_always_produce_valid_documents() {
    let inputs = [
        "",
        "\n",
        "\n\n\n",
        "**",
        "` ` `",
        "# **unclosed\n- `also unclosed\n1. **`tangled`",
        "####\n#\n##x",
        "- \n* \n1.\n---x",
        "*** \n ***",
        "héllo ✓ **wörld`",
    ];

    for input in inputs {
        let doc = parse_blocks(input);
        snapshot::check(&doc);
    }
}

/// The tokenizer's output reconstructs each line once delimiters are
/// re-inserted, for well-formed and malformed lines alike.
#[test]
fn tokenizer_is_lossless() {
    let lines = [
        "plain",
        "**bold** and `code`",
        "unterminated **bold",
        "***bold***",
        "`a **b** c`",
        "**a*b**",
        "",
    ];

    for line in lines {
        snapshot::invariants::check_line(line, &tokenize_inline(line));
    }
}
