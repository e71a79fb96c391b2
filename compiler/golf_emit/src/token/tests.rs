use super::*;
use pretty_assertions::assert_eq;

#[test]
fn flatten_spaces_only_between_words() {
    let tree = tokens!["while", "x", "<", "10", "do", tokens!["print", "(", "x", ")"], "end"];
    assert_eq!(
        tree.flatten(&JoinPolicy::default()),
        "while x<10 do print(x)end"
    );
}

#[test]
fn flatten_skips_empty_fragments() {
    let tree = tokens!["a", "", TokenTree::empty(), "b"];
    assert_eq!(tree.fragments(), vec!["a", "b"]);
    assert_eq!(tree.flatten(&JoinPolicy::default()), "a b");
}

#[test]
fn glued_pairs_get_a_space() {
    let policy = JoinPolicy {
        is_word: |c| c.is_ascii_alphanumeric(),
        glued: &[('-', '-')],
    };
    assert_eq!(tokens!["x", "-", "-", "y"].flatten(&policy), "x- -y");
}

#[test]
fn newline_fragments_separate_statements() {
    let tree = TokenTree::join([tokens!["x", "=", "1"], tokens!["y", "=", "2"]], "\n");
    assert_eq!(tree.flatten(&JoinPolicy::default()), "x=1\ny=2");
}
