//! Golden snapshot of a rendered driver.
//!
//! The support library is replaced by a one-line stub so the snapshot covers only the generated parts: header
//! comment, print macro, extern declarations, both tables, the selector string, and `main`.
//!
//! Review changes: `cargo insta review`

use clay::registry::{CandidateFunction, GenerationResult};
use clay::render::render_driver;
use clay_core::PrintSink;

fn candidate<'a>(declaration: &'a str, symbol: &'a str, short_name: &'a str) -> CandidateFunction<'a> {
    CandidateFunction {
        declaration,
        symbol,
        short_name,
        line: 1,
    }
}

fn two_suites() -> GenerationResult {
    let mut result = GenerationResult::new();
    result
        .add_group(
            "a_b",
            [
                candidate("void test_a_b__first(void)", "test_a_b__first", "first"),
                candidate("void test_a_b__second()", "test_a_b__second", "second"),
            ],
        )
        .expect("a_b");
    result
        .add_group(
            "c",
            [
                candidate("void test_c__initialize(void)", "test_c__initialize", "initialize"),
                candidate("void test_c__only(void)", "test_c__only", "only"),
            ],
        )
        .expect("c");
    result
}

#[test]
fn two_suite_driver() {
    let driver = render_driver(&two_suites(), "/* support library */", PrintSink::Stdout)
        .replace(clay::version::CLAY_VERSION, "<version>");

    insta::assert_snapshot!(driver.trim_start(), @r#"
    /*
     * Clay v<version>
     *
     * This is an autogenerated file. Do not modify.
     * To add new unit tests or suites, regenerate the whole
     * file with `./clay`
     */

    #define clay_print(...) printf(__VA_ARGS__)

    /* support library */

    extern void test_a_b__first(void);
    extern void test_a_b__second();
    extern void test_c__initialize(void);
    extern void test_c__only(void);

    static const struct clay_func _all_callbacks[] = {
        {"first", &test_a_b__first, 0},
    	{"second", &test_a_b__second, 0},
    	{"only", &test_c__only, 1}
    };

    static const struct clay_suite _all_suites[] = {
        {
            "a::b",
            {NULL, NULL, 0},
            {NULL, NULL, 0},
            &_all_callbacks[0], 2
        },
    	{
            "c",
            {"initialize", &test_c__initialize, 1},
            {NULL, NULL, 0},
            &_all_callbacks[2], 1
        }
    };

    static const char _suites_str[] = "a::b, c";

    int main(int argc, char *argv[])
    {
        return clay_test(
            argc, argv, _suites_str,
            _all_callbacks, 3,
            _all_suites, 2
        );
    }
    "#);
}

#[test]
fn driver_starts_with_a_blank_line_and_ends_with_newline() {
    let driver = render_driver(&two_suites(), "", PrintSink::Stdout);
    assert!(driver.starts_with("\n/*\n"));
    assert!(driver.ends_with("}\n"));
}
