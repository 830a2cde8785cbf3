use crate::parsers::answer::extract_answer;

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn page(answers: &str) -> String {
        format!(
            "<html><body><div id=\"question\"><pre><code>question()</code></pre></div>{}</body></html>",
            answers
        )
    }

    #[test]
    fn test_code_under_pre_returns_code() {
        let html = page(
            "<div id=\"answers\"><div class=\"answercell\"><pre><code>foo()</code></pre></div></div>",
        );
        assert_eq!(extract_answer(&html).as_deref().map(str::trim), Some("foo()"));
    }

    #[test]
    fn test_no_answers_container() {
        let html = page("<div id=\"comments\"><div class=\"answercell\">nope</div></div>");
        assert_eq!(extract_answer(&html), None);
        assert_eq!(extract_answer(""), None);
    }

    #[test]
    fn test_no_answer_cell() {
        let html = page("<div id=\"answers\"><h2>0 Answers</h2></div>");
        assert_eq!(extract_answer(&html), None);
    }

    #[test]
    fn test_first_answer_cell_wins() {
        let html = page(concat!(
            "<div id=\"answers\">",
            "<div class=\"answer\"><div class=\"post-layout answercell\"><pre><code>top()</code></pre></div></div>",
            "<div class=\"answer\"><div class=\"post-layout answercell\"><pre><code>second()</code></pre></div></div>",
            "</div>"
        ));
        assert_eq!(extract_answer(&html).as_deref(), Some("top()"));
    }

    #[test]
    fn test_code_whitespace_is_preserved() {
        let html = page(concat!(
            "<div id=\"answers\"><div class=\"answercell\">",
            "<pre class=\"lang-py\">&gt;&gt;&gt; <code>for i in range(3):\n    print(i)\n</code></pre>",
            "</div></div>"
        ));
        assert_eq!(
            extract_answer(&html).as_deref(),
            Some("for i in range(3):\n    print(i)\n")
        );
    }

    #[test]
    fn test_only_first_pre_is_used() {
        let html = page(concat!(
            "<div id=\"answers\"><div class=\"answercell\">",
            "<pre><code>a = 1</code><code>b = 2</code></pre>",
            "<pre><code>c = 3</code></pre>",
            "</div></div>"
        ));
        assert_eq!(extract_answer(&html).as_deref(), Some("a = 1"));
    }

    #[test]
    fn test_post_body_text_without_pre() {
        let html = page(concat!(
            "<div id=\"answers\"><div class=\"answercell\">",
            "<div class=\"s-prose js-post-body\"><p>Use <code>print</code>:</p><p>Hello, World!</p></div>",
            "<div class=\"post-menu\">Share Edit Follow</div>",
            "</div></div>"
        ));
        assert_eq!(
            extract_answer(&html).as_deref(),
            Some("Use print:Hello, World!")
        );
    }

    #[test]
    fn test_cell_text_without_pre_or_post_body() {
        let html = page(
            "<div id=\"answers\"><div class=\"answercell\"><p>Just</p> <b>text</b></div></div>",
        );
        assert_eq!(extract_answer(&html).as_deref(), Some("Just text"));
    }

    #[test]
    fn test_pre_without_code_falls_back_to_post_body() {
        let html = page(concat!(
            "<div id=\"answers\"><div class=\"answercell\">",
            "<div class=\"js-post-body\"><p>Run this:</p><pre>make install</pre></div>",
            "</div></div>"
        ));
        assert_eq!(
            extract_answer(&html).as_deref(),
            Some("Run this:make install")
        );
    }

    #[test]
    fn test_pre_without_code_falls_back_to_cell_text() {
        let html = page(
            "<div id=\"answers\"><div class=\"answercell\"><pre>ls -la</pre><p>done</p></div></div>",
        );
        assert_eq!(extract_answer(&html).as_deref(), Some("ls -ladone"));
    }

    #[test]
    fn test_malformed_html_is_best_effort() {
        let html = "<div id=answers><span><div class=answercell><pre><code>x = 1";
        assert_eq!(extract_answer(html).as_deref(), Some("x = 1"));
    }
}
