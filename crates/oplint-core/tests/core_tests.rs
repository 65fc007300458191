use oplint_core::{
    evaluate, format_message, CallSite, Catalog, Evaluation, Location, NoMatchReason, OperatorFamily,
    ResolvedCallTarget,
};

fn site(qualified: &str, name: &str, supplied: usize, declared_op: bool) -> CallSite {
    CallSite::new(
        Location::new("Scenario.kt", 1, 1),
        ResolvedCallTarget::new(qualified, name)
            .with_arguments(supplied, supplied)
            .declared_operator(declared_op),
    )
}

#[test]
fn test_int_plus_maps_to_plus_symbol() {
    let s = site("kotlin.Int.plus", "plus", 1, true);
    let m = evaluate(Catalog::shared(), &s).matched().unwrap();
    assert_eq!(m.mapping.symbol, "+");
    assert!(format_message(&m).contains("\"+\""));
}

#[test]
fn test_string_contains_with_ignore_case_is_skipped() {
    let s = site("kotlin.text.contains", "contains", 2, true);
    assert_eq!(
        evaluate(Catalog::shared(), &s),
        Evaluation::NoMatch(NoMatchReason::ArityMismatch)
    );
}

#[test]
fn test_string_contains_maps_to_in() {
    let s = site("kotlin.text.contains", "contains", 1, true);
    let m = evaluate(Catalog::shared(), &s).matched().unwrap();
    assert_eq!(m.mapping.symbol, "in");
    assert_eq!(
        format_message(&m),
        "kotlin.text.contains method can be replaced with the \"in\" operator."
    );
}

#[test]
fn test_list_get_maps_to_brackets() {
    let s = site("kotlin.collections.List.get", "get", 1, true);
    let m = evaluate(Catalog::shared(), &s).matched().unwrap();
    assert_eq!(m.mapping.family, OperatorFamily::IndexedAccess);
    assert_eq!(m.mapping.symbol, "[]");
}

#[test]
fn test_function_invoke_can_use_parens() {
    let s = site("kotlin.Function1.invoke", "invoke", 1, true);
    let m = evaluate(Catalog::shared(), &s).matched().unwrap();
    assert!(format_message(&m).ends_with("can be called with just \"()\"."));
}

#[test]
fn test_int_inc_is_unary_postfix() {
    let s = site("kotlin.Int.inc", "inc", 0, true);
    let m = evaluate(Catalog::shared(), &s).matched().unwrap();
    assert!(format_message(&m).contains("unary postfix operator equivalent"));
}

#[test]
fn test_not_without_operator_modifier_is_skipped() {
    let s = site("Flag.not", "not", 0, false);
    assert_eq!(
        evaluate(Catalog::shared(), &s),
        Evaluation::NoMatch(NoMatchReason::NotDeclaredOperator)
    );
}

#[test]
fn test_evaluation_is_deterministic() {
    let s = site("kotlin.Int.times", "times", 1, true);
    let a = evaluate(Catalog::shared(), &s);
    let b = evaluate(Catalog::shared(), &s);
    assert_eq!(a, b);
}

#[test]
fn test_every_match_echoes_its_mapping() {
    for mapping in Catalog::shared().iter() {
        let supplied = mapping.arity.min;
        let s = site("x.y", &mapping.canonical_name, supplied, true);
        let m = evaluate(Catalog::shared(), &s).matched().unwrap();
        assert_eq!(m.mapping.canonical_name, m.target.canonical_name);
        let msg = format_message(&m);
        assert!(msg.starts_with("x.y method can"), "{msg}");
    }
}
