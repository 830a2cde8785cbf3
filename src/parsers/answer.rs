use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static ANSWERS: LazyLock<Selector> = LazyLock::new(|| selector("#answers"));
static ANSWER_CELL: LazyLock<Selector> = LazyLock::new(|| selector(".answercell"));
static PRE: LazyLock<Selector> = LazyLock::new(|| selector("pre"));
static CODE: LazyLock<Selector> = LazyLock::new(|| selector("code"));
static POST_BODY: LazyLock<Selector> = LazyLock::new(|| selector(".js-post-body"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector should parse")
}

/// Extracts the top answer from a question page.
///
/// Returns `None` when the page has no `#answers` container or the container
/// holds no `.answercell`. The first cell is taken, which is the top-scored
/// answer once the page was requested with `answertab=scoredesc`.
pub fn extract_answer(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    let Some(answers) = doc.select(&ANSWERS).next() else {
        ::log::debug!("No #answers container on page");
        return None;
    };
    let Some(top_answer) = answers.select(&ANSWER_CELL).next() else {
        ::log::debug!("No .answercell in #answers");
        return None;
    };

    Some(extract_answer_content(top_answer))
}

/// Extract code or text from an answer cell. The order is:
/// 1. the `<code>` inside the first `<pre>`
/// 2. the `.js-post-body` text
/// 3. all text of the cell
///
/// A `<pre>` without `<code>` does not count, extraction goes on with step 2.
pub fn extract_answer_content(cell: ElementRef<'_>) -> String {
    if let Some(pre) = cell.select(&PRE).next() {
        if let Some(code) = pre.select(&CODE).next() {
            return text_content(code);
        }
        ::log::debug!("First <pre> of the answer has no <code>, falling back to text");
    }

    match cell.select(&POST_BODY).next() {
        Some(post_body) => text_content(post_body),
        None => text_content(cell),
    }
}

/// Concatenated text of all descendants, whitespace untouched
fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}
