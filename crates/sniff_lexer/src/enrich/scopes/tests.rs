use pretty_assertions::assert_eq;
use sniff_ir::Token;

use crate::enrich::tests::{enriched, nth, ptr};

/// `(opener, closer)` of the scope `tokens[owner]` owns.
fn scope(tokens: &[Token], owner: usize) -> Option<(usize, usize)> {
    let token = tokens.get(owner)?;
    if token.scope_condition != Some(owner) {
        return None;
    }
    Some((token.scope_opener?, token.scope_closer?))
}

#[test]
fn brace_scopes_nest() {
    let tokens = enriched("<?php class A { function b() { return 1; } }");
    let class = ptr(&tokens, "class");
    let function = ptr(&tokens, "function");
    assert_eq!(
        scope(&tokens, class),
        Some((nth(&tokens, "{", 0), nth(&tokens, "}", 1)))
    );
    assert_eq!(
        scope(&tokens, function),
        Some((nth(&tokens, "{", 1), nth(&tokens, "}", 0)))
    );
    let open = nth(&tokens, "{", 1);
    assert_eq!(tokens[open].scope_condition, Some(function));
}

#[test]
fn braceless_control_has_no_scope() {
    let tokens = enriched("<?php if ($a) echo 1; else echo 2; while ($b) x();");
    for owner in ["if", "else", "while"] {
        assert_eq!(scope(&tokens, ptr(&tokens, owner)), None, "{owner}");
    }
}

#[test]
fn alternative_syntax_chain() {
    let tokens =
        enriched("<?php if ($a): echo 1; elseif ($b): echo 2; else: echo 3; endif; echo 4;");
    let if_ = ptr(&tokens, "if");
    let elseif = ptr(&tokens, "elseif");
    let else_ = ptr(&tokens, "else");
    let endif = ptr(&tokens, "endif");
    assert_eq!(scope(&tokens, if_), Some((nth(&tokens, ":", 0), elseif)));
    assert_eq!(scope(&tokens, elseif), Some((nth(&tokens, ":", 1), else_)));
    assert_eq!(scope(&tokens, else_), Some((nth(&tokens, ":", 2), endif)));
    assert_eq!(tokens[endif].scope_condition, Some(else_));
    assert_eq!(tokens[ptr(&tokens, "4")].level, 0);
}

#[test]
fn nested_alternative_syntax_is_stepped_over() {
    let tokens = enriched(
        "<?php foreach ($a as $b): if ($b): continue; else: break; endif; endforeach;",
    );
    let foreach = ptr(&tokens, "foreach");
    assert_eq!(
        scope(&tokens, foreach),
        Some((nth(&tokens, ":", 0), ptr(&tokens, "endforeach")))
    );
    assert_eq!(tokens[ptr(&tokens, "continue")].level, 2);
}

#[test]
fn else_if_is_two_owners() {
    let tokens = enriched("<?php if ($a) { } else if ($b) { } else { }");
    let else_ = nth(&tokens, "else", 0);
    let inner_if = nth(&tokens, "if", 1);
    let last_else = nth(&tokens, "else", 1);
    assert_eq!(scope(&tokens, else_), None);
    assert_eq!(
        scope(&tokens, inner_if),
        Some((nth(&tokens, "{", 1), nth(&tokens, "}", 1)))
    );
    assert_eq!(
        scope(&tokens, last_else),
        Some((nth(&tokens, "{", 2), nth(&tokens, "}", 2)))
    );
}

#[test]
fn switch_cases_share_closers() {
    let tokens = enriched(
        "<?php switch ($a) { case 1: case 2: foo(); break; case 3: bar(); default: baz(); }",
    );
    let switch = ptr(&tokens, "switch");
    let close = ptr(&tokens, "}");
    let brk = ptr(&tokens, "break");
    assert_eq!(scope(&tokens, switch), Some((ptr(&tokens, "{"), close)));
    assert_eq!(tokens[close].scope_condition, Some(switch));

    let case1 = nth(&tokens, "case", 0);
    let case2 = nth(&tokens, "case", 1);
    let case3 = nth(&tokens, "case", 2);
    let default = ptr(&tokens, "default");
    assert_eq!(scope(&tokens, case1), Some((nth(&tokens, ":", 0), brk)));
    assert_eq!(scope(&tokens, case2), Some((nth(&tokens, ":", 1), brk)));
    // Falls through into the next label.
    assert_eq!(scope(&tokens, case3), Some((nth(&tokens, ":", 2), default)));
    assert_eq!(scope(&tokens, default), Some((nth(&tokens, ":", 3), close)));
}

#[test]
fn switch_alternative_syntax() {
    let tokens = enriched("<?php switch ($a): case 1: foo(); endswitch;");
    let switch = ptr(&tokens, "switch");
    let endswitch = ptr(&tokens, "endswitch");
    assert_eq!(scope(&tokens, switch), Some((nth(&tokens, ":", 0), endswitch)));
    assert_eq!(
        scope(&tokens, ptr(&tokens, "case")),
        Some((nth(&tokens, ":", 1), endswitch))
    );
}

#[test]
fn case_bodies_step_over_nested_scopes() {
    let tokens =
        enriched("<?php switch ($a) { case 1: while ($b) { break; } return 2; }");
    let ret = ptr(&tokens, "return");
    assert_eq!(
        scope(&tokens, ptr(&tokens, "case")),
        Some((ptr(&tokens, ":"), ret))
    );
}

#[test]
fn closure_use_is_not_an_owner() {
    let tokens = enriched("<?php $f = function () use ($a) { return $a; };");
    let closure = ptr(&tokens, "function");
    assert_eq!(
        scope(&tokens, closure),
        Some((ptr(&tokens, "{"), ptr(&tokens, "}")))
    );
    assert_eq!(scope(&tokens, ptr(&tokens, "use")), None);
}

#[test]
fn trait_use_block_has_scope() {
    let tokens = enriched("<?php class A { use T { foo as bar; } }");
    let use_ = ptr(&tokens, "use");
    assert_eq!(
        scope(&tokens, use_),
        Some((nth(&tokens, "{", 1), nth(&tokens, "}", 0)))
    );
    assert_eq!(tokens[ptr(&tokens, "foo")].level, 2);
}

#[test]
fn abstract_methods_have_no_scope() {
    let tokens = enriched("<?php interface I { function a(): int; }");
    assert_eq!(scope(&tokens, ptr(&tokens, "function")), None);
    assert!(scope(&tokens, ptr(&tokens, "interface")).is_some());
}

#[test]
fn arrow_functions_end_with_their_expression() {
    let tokens = enriched("<?php $f = fn($x) => $x + 1;");
    let fn_ = ptr(&tokens, "fn");
    assert_eq!(
        scope(&tokens, fn_),
        Some((ptr(&tokens, "=>"), ptr(&tokens, ";")))
    );

    let tokens = enriched("<?php array_map(fn($x) => [$x, 1], $a);");
    let fn_ = ptr(&tokens, "fn");
    assert_eq!(
        scope(&tokens, fn_),
        Some((ptr(&tokens, "=>"), nth(&tokens, ",", 1)))
    );
}

#[test]
fn nested_arrow_functions_share_an_end() {
    let tokens = enriched("<?php foo(fn($a) => fn($b) => $a + $b);");
    let (outer, inner) = (nth(&tokens, "fn", 0), nth(&tokens, "fn", 1));
    let close = nth(&tokens, ")", 2);
    assert_eq!(scope(&tokens, inner), Some((nth(&tokens, "=>", 1), close)));
    assert_eq!(scope(&tokens, outer), Some((nth(&tokens, "=>", 0), close)));
}

#[test]
fn unclosed_scope_sets_nothing() {
    let tokens = enriched("<?php function a() { return 1;");
    let function = ptr(&tokens, "function");
    assert_eq!(tokens[function].scope_opener, None);
    assert_eq!(tokens[ptr(&tokens, "{")].scope_condition, None);
}
