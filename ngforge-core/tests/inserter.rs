use ngforge_core::{
    detect_indent, entry_indent, insert, locate_array, locate_sentinel, plan_insertion, Located, Sentinel,
    Span,
};
use regex::Regex;

fn routes_decl() -> Regex {
    Regex::new(r"export\s+const\s+routes\s*:\s*Routes\s*=\s*\[").unwrap()
}

fn array_of(text: &str) -> Span {
    locate_array(text, &routes_decl()).span().unwrap()
}

fn wildcard_in(text: &str, array: Span) -> Option<Span> {
    locate_sentinel(array.body_text(text), &Sentinel::wildcard_route())
        .shift(array.start + 1)
        .span()
}

/// Locate, find the wildcard, pick indentation, insert.
fn insert_route(text: &str, entry: &str) -> String {
    let array = array_of(text);
    let sentinel = wildcard_in(text, array);
    let indent = entry_indent(text, array, "  ");
    insert(text, array, sentinel, entry, &indent)
}

fn balance(text: &str, open: char, close: char) -> i64 {
    text.chars().fold(0, |depth, c| match c {
        c if c == open => depth + 1,
        c if c == close => depth - 1,
        _ => depth,
    })
}

// ── End-to-end scenarios ────────────────────────────────────────────

#[test]
fn inserts_before_wildcard() {
    let text = "export const routes: Routes = [\n  { path: '**', redirectTo: '' }\n];";
    assert_eq!(
        insert_route(text, "...USERS_ROUTES"),
        "export const routes: Routes = [\n  ...USERS_ROUTES,\n  { path: '**', redirectTo: '' }\n];"
    );
}

#[test]
fn appends_without_wildcard() {
    let text = "export const routes: Routes = [\n  ...AUTH_ROUTES\n];";
    assert_eq!(
        insert_route(text, "...DASHBOARD_ROUTES"),
        "export const routes: Routes = [\n  ...AUTH_ROUTES,\n  ...DASHBOARD_ROUTES\n];"
    );
}

#[test]
fn first_entry_in_empty_array() {
    let text = "export const routes: Routes = [];";
    let out = insert_route(text, "...USERS_ROUTES");
    assert_eq!(out, "export const routes: Routes = [\n  ...USERS_ROUTES\n];");
    assert_eq!(array_of(&out).body_text(&out).trim(), "...USERS_ROUTES");
}

#[test]
fn empty_multi_line_array() {
    let text = "export const routes: Routes = [\n];\n";
    assert_eq!(
        insert_route(text, "...A"),
        "export const routes: Routes = [\n  ...A\n];\n"
    );
}

// ── Commas ──────────────────────────────────────────────────────────

#[test]
fn existing_trailing_comma_is_not_duplicated() {
    let text = "export const routes: Routes = [\n  ...A,\n];";
    let out = insert_route(text, "...B");
    assert_eq!(out, "export const routes: Routes = [\n  ...A,\n  ...B\n];");
    assert!(!out.contains(",,"));
}

#[test]
fn comma_before_wildcard_already_present() {
    let text = "export const routes: Routes = [\n  ...A,\n  { path: '**', component: X },\n];";
    assert_eq!(
        insert_route(text, "...B"),
        "export const routes: Routes = [\n  ...A,\n  ...B,\n  { path: '**', component: X },\n];"
    );
}

#[test]
fn exactly_one_comma_between_old_and_new() {
    let text = "export const routes: Routes = [\n  { path: 'a', component: A }\n];";
    let out = insert_route(text, "{ path: 'b', component: B }");
    let between = &out[out.find("A }").unwrap() + 3..out.find("{ path: 'b'").unwrap()];
    assert_eq!(between.matches(',').count(), 1);
}

#[test]
fn plan_reports_comma_needs() {
    let text = "export const routes: Routes = [\n  ...A,\n  { path: '**' }\n];";
    let array = array_of(text);
    let sentinel = wildcard_in(text, array);
    let plan = plan_insertion(text, array, sentinel, "  ");
    assert!(!plan.needs_leading_comma);
    assert!(plan.needs_trailing_comma);
    assert_eq!(plan.trailing_break, None);

    let plan = plan_insertion(text, array, None, "  ");
    assert!(plan.needs_leading_comma);
    assert!(!plan.needs_trailing_comma);
}

// ── Sentinel precedence ─────────────────────────────────────────────

#[test]
fn wildcard_text_is_unchanged_and_after_entry() {
    let wildcard = "{\n    path: '**',\n    loadComponent: () => import('./not-found').then(m => m.NotFound)\n  }";
    let text = format!("export const routes: Routes = [\n  ...A,\n  {wildcard}\n];");
    let out = insert_route(&text, "...B");
    let entry_at = out.find("...B").unwrap();
    let wildcard_at = out.find(wildcard).unwrap();
    assert!(entry_at < wildcard_at);
    assert_eq!(out.matches(wildcard).count(), 1);
}

#[test]
fn single_line_array_with_wildcard() {
    let text = "export const routes: Routes = [{ path: '**', redirectTo: '' }];";
    assert_eq!(
        insert_route(text, "...A"),
        "export const routes: Routes = [\n  ...A,\n  { path: '**', redirectTo: '' }];"
    );
}

#[test]
fn nested_wildcard_does_not_capture_insertion() {
    let text = "export const routes: Routes = [\n  { path: 'admin', children: [{ path: '**', component: A }] }\n];";
    assert_eq!(
        insert_route(text, "...B"),
        "export const routes: Routes = [\n  { path: 'admin', children: [{ path: '**', component: A }] },\n  ...B\n];"
    );
}

// ── Comments ────────────────────────────────────────────────────────

#[test]
fn trailing_comment_stays_after_new_entry() {
    let text = "export const routes: Routes = [\n  ...A // auth\n];";
    assert_eq!(
        insert_route(text, "...B"),
        "export const routes: Routes = [\n  ...A,\n  ...B // auth\n];"
    );
}

#[test]
fn array_holding_only_a_comment() {
    let text = "export const routes: Routes = [\n  // modules\n];";
    let out = insert_route(text, "...A");
    assert_eq!(out, "export const routes: Routes = [\n  ...A\n  // modules\n];");
}

#[test]
fn crlf_text_keeps_crlf_line_endings() {
    let text = "export const routes: Routes = [\r\n  ...A\r\n];\r\n";
    assert_eq!(
        insert_route(text, "...B"),
        "export const routes: Routes = [\r\n  ...A,\r\n  ...B\r\n];\r\n"
    );
}

#[test]
fn crlf_single_line_array_is_expanded_with_crlf() {
    let text = "export const routes: Routes = [{ path: '**' }];\r\n";
    assert_eq!(
        insert_route(text, "...A"),
        "export const routes: Routes = [\r\n  ...A,\r\n  { path: '**' }];\r\n"
    );
}

// ── Balance property ────────────────────────────────────────────────

#[test]
fn output_stays_balanced_and_contains_everything() {
    let fixtures = [
        "export const routes: Routes = [];",
        "export const routes: Routes = [\n  ...A\n];",
        "export const routes: Routes = [\n  ...A,\n];",
        "export const routes: Routes = [\n  { path: '**', redirectTo: '' }\n];",
        "export const routes: Routes = [ { path: 'a', children: [ { path: 'b' } ] } ];",
        "export const routes: Routes = [\n  { path: 'x', data: { roles: ['admin'] } },\n  { path: '**', component: Missing },\n];",
    ];
    let entry = "{ path: 'new', children: [{ path: 'leaf' }] }";

    for text in fixtures {
        let original_body = array_of(text).body_text(text).trim().to_string();
        let out = insert_route(text, entry);
        let span = array_of(&out);
        let body = span.text(&out);

        assert!(body.contains(entry), "entry missing in {out:?}");
        for piece in original_body.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            assert!(body.contains(piece), "lost {piece:?} in {out:?}");
        }
        assert_eq!(balance(body, '[', ']'), 0, "unbalanced brackets in {out:?}");
        assert_eq!(balance(body, '{', '}'), 0, "unbalanced braces in {out:?}");
        assert!(out.ends_with("];"));
    }
}

// ── Indentation ─────────────────────────────────────────────────────

#[test]
fn detect_indent_of_existing_entries() {
    let text = "export const routes: Routes = [\n    ...A\n];";
    assert_eq!(detect_indent(text, array_of(text)).as_deref(), Some("    "));
}

#[test]
fn detect_indent_tabs() {
    let text = "export const routes: Routes = [\n\t...A\n];";
    assert_eq!(detect_indent(text, array_of(text)).as_deref(), Some("\t"));
}

#[test]
fn detect_indent_empty_or_inline() {
    let empty = "export const routes: Routes = [];";
    assert_eq!(detect_indent(empty, array_of(empty)), None);
    let inline = "export const routes: Routes = [...A];";
    assert_eq!(detect_indent(inline, array_of(inline)), None);
}

#[test]
fn entry_indent_follows_existing_style() {
    let text = "export const routes: Routes = [\n    ...A\n];";
    assert_eq!(insert_route(text, "...B"), "export const routes: Routes = [\n    ...A,\n    ...B\n];");
}

#[test]
fn entry_indent_of_nested_empty_array() {
    let text = "  children: [\n  ]";
    let array = Span::new(text.find('[').unwrap(), text.rfind(']').unwrap());
    assert_eq!(entry_indent(text, array, "  "), "    ");
    assert_eq!(entry_indent(text, array, "\t"), "  \t");
}

#[test]
fn unlocated_array_is_reported_not_found() {
    assert_eq!(locate_array("const x = 1;", &routes_decl()), Located::NotFound);
}
