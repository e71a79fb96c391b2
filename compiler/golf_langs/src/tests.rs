use super::*;
use pretty_assertions::assert_eq;

#[test]
fn languages_are_listed_in_order() {
    let names: Vec<_> = languages().iter().map(|language| language.name).collect();
    assert_eq!(names, vec!["GolfScript", "Lua", "Python"]);
}

#[test]
fn find_by_name_or_extension() {
    assert_eq!(find_lang("lua").map(|language| language.name), Some("Lua"));
    assert_eq!(find_lang("PYTHON").map(|language| language.name), Some("Python"));
    assert_eq!(find_lang("py").map(|language| language.name), Some("Python"));
    assert_eq!(find_lang("gs").map(|language| language.name), Some("GolfScript"));
    assert!(find_lang("cobol").is_none());
}

#[test]
fn golf_stage_plugins() {
    assert_eq!(
        golf_stage().plugin_names(),
        vec![
            "eval_static_expr",
            "golf_last_print",
            "flip_binary_ops",
            "equality_to_inequality",
            "shift_range_one_up",
        ]
    );
}
