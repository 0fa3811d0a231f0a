#[cfg(test)]
/// Declaration scanner unit tests.
///
/// These cover the line-anchoring rule and the shapes that must *not* be reported.
mod tests {
    use super::*;

    fn names(source: &str) -> Vec<String> {
        scan_declarations(source).into_iter().map(|d| d.name).collect()
    }

    #[test]
    fn test_single_line_definition() {
        let decls = scan_declarations("void test_math__add(void) { }\n");
        assert_eq!(decls.len(), 1);
        let decl = &decls[0];
        assert_eq!(decl.name, "test_math__add");
        assert_eq!(decl.header, "void test_math__add(void)");
        assert_eq!(decl.return_type, vec!["void"]);
        assert_eq!(decl.params, Params::Void);
        assert_eq!(decl.line, 1);
        assert!(decl.returns_void());
    }

    #[test]
    fn test_multi_line_head_keeps_verbatim_text() {
        let source = "int x;\nvoid\ntest_a__b(\n  void )\n{\n}\n";
        let decls = scan_declarations(source);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].header, "void\ntest_a__b(\n  void )");
        assert_eq!(decls[0].params, Params::Void);
        assert_eq!(decls[0].line, 2);
    }

    #[test]
    fn test_empty_parameter_list() {
        let decls = scan_declarations("void f() {}");
        assert_eq!(decls[0].params, Params::Empty);
        assert!(decls[0].params.is_nullary());
    }

    #[test]
    fn test_other_parameters_are_kept_as_written() {
        let decls = scan_declarations("void f(int a, char **b) {}");
        assert_eq!(decls[0].params, Params::Other("int a, char **b".to_string()));
        assert!(!decls[0].params.is_nullary());
    }

    #[test]
    fn test_indented_definitions_are_ignored() {
        assert!(names("  void f(void) {}\n\tvoid g(void) {}\n").is_empty());
    }

    #[test]
    fn test_prototypes_are_ignored() {
        assert!(names("void f(void);\nextern void g(void);\n").is_empty());
    }

    #[test]
    fn test_commented_definitions_are_ignored() {
        let source = "// void a(void) {}\n/*\nvoid b(void) {}\n*/\nvoid c(void) {}\n";
        assert_eq!(names(source), vec!["c"]);
    }

    #[test]
    fn test_macro_bodies_are_ignored() {
        let source = "#define T(n) \\\nvoid n(void) {}\nvoid real(void) {}\n";
        assert_eq!(names(source), vec!["real"]);
    }

    #[test]
    fn test_control_flow_is_not_a_definition() {
        assert!(names("if (x) {\n}\nwhile (1) {\n}\n").is_empty());
    }

    #[test]
    fn test_return_type_tokens() {
        let decls = scan_declarations("static const char *name(void) {}");
        assert_eq!(decls[0].return_type, vec!["static", "const", "char", "*"]);
        assert_eq!(decls[0].name, "name");
        assert!(!decls[0].returns_void());
    }

    #[test]
    fn test_pointer_return_is_not_void() {
        let decls = scan_declarations("void *alloc(void) {}");
        assert_eq!(decls[0].return_type, vec!["void", "*"]);
        assert!(!decls[0].returns_void());
    }

    #[test]
    fn test_source_order_is_preserved() {
        let source = "void z(void) {}\nvoid a(void) {}\nvoid m(void) {}\n";
        assert_eq!(names(source), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_unbalanced_parameters_are_not_reported() {
        assert!(names("void f(void {\n").is_empty());
    }

    #[test]
    fn test_name_on_its_own_line_is_not_a_head_start() {
        let decls = scan_declarations("static\nvoid\nf(void)\n{\n}\n");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].return_type, vec!["static", "void"]);
        assert_eq!(decls[1].return_type, vec!["void"]);
        assert_eq!(decls[1].header, "void\nf(void)");
        assert!(decls.iter().all(|d| d.name == "f"));
    }

    #[test]
    fn test_attribute_line_before_head() {
        let source = "TEST_ATTR\nvoid test_a__hidden(void) { }\nvoid test_a__seen(void) { }\n";
        let decls = scan_declarations(source);
        assert_eq!(names(source), vec!["test_a__hidden", "test_a__hidden", "test_a__seen"]);
        assert_eq!(decls[0].return_type, vec!["TEST_ATTR", "void"]);
        assert_eq!(decls[1].return_type, vec!["void"]);
        assert_eq!(decls[1].line, 2);
        assert_eq!(decls[1].header, "void test_a__hidden(void)");
    }
}
