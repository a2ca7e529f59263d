//! Shared node and text helpers used by every extraction stage.

use ast_grep_core::Node;

/// Collapse runs of whitespace (including newlines) to single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `": ButtonProps"` → `"ButtonProps"`.
pub fn strip_type_annotation(text: &str) -> String {
    text.trim_start_matches(':').trim().to_string()
}

/// Remove one pair of matching quotes (`'`, `"` or backtick).
pub fn unquote(text: &str) -> String {
    let trimmed = text.trim();
    for quote in ['"', '\'', '`'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

/// `"{count + 1}"` → `"count + 1"`.
pub fn unwrap_braces(text: &str) -> String {
    let trimmed = text.trim();
    trimmed
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// 1-based line of the node's first character.
#[allow(clippy::cast_possible_truncation)]
pub fn start_line<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    node.start_pos().line() as u32 + 1
}

/// 1-based line of the node's last character.
#[allow(clippy::cast_possible_truncation)]
pub fn end_line<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    node.end_pos().line() as u32 + 1
}

/// Arrow functions and function expressions (`function_expression` in
/// current grammars, `function` in older ones).
pub fn is_function_value<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    matches!(
        node.kind().as_ref(),
        "arrow_function" | "function_expression" | "function"
    )
}

/// Whether a function node carries the `async` keyword.
pub fn is_async_function<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.children().any(|c| c.kind().as_ref() == "async")
}

/// Text of a call's callee (`useState`, `React.memo`, `api.get`).
pub fn callee_text<D: ast_grep_core::Doc>(call: &Node<D>) -> Option<String> {
    call.field("function")
        .or_else(|| call.children().next())
        .map(|c| c.text().to_string())
}

/// The argument expressions of a `call_expression`, punctuation removed.
pub fn call_arguments<'r, D: ast_grep_core::Doc>(call: &Node<'r, D>) -> Vec<Node<'r, D>> {
    let Some(args) = call.field("arguments") else {
        return Vec::new();
    };
    args.children()
        .filter(|c| !matches!(c.kind().as_ref(), "(" | ")" | "," | "comment"))
        .collect()
}

/// Elements of an `array` literal, punctuation removed.
pub fn array_elements<'r, D: ast_grep_core::Doc>(array: &Node<'r, D>) -> Vec<Node<'r, D>> {
    array
        .children()
        .filter(|c| !matches!(c.kind().as_ref(), "[" | "]" | "," | "comment"))
        .collect()
}

/// First parameter of a function value or declaration.
///
/// Covers `(props) => …`, `props => …` and the JavaScript grammar, where
/// patterns sit directly inside `formal_parameters`.
pub fn first_parameter<'r, D: ast_grep_core::Doc>(function: &Node<'r, D>) -> Option<Node<'r, D>> {
    if let Some(single) = function.field("parameter") {
        return Some(single);
    }
    function
        .field("parameters")?
        .children()
        .find(|c| !matches!(c.kind().as_ref(), "(" | ")" | "," | "comment"))
}

/// Text of the first `type_annotation` child, without the leading colon.
pub fn type_annotation_text<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.children()
        .find(|c| c.kind().as_ref() == "type_annotation")
        .map(|ta| strip_type_annotation(&ta.text()))
}

/// `React.FC<UserCardProps>` → `UserCardProps`; the last argument wins for
/// multi-argument generics such as `forwardRef<HTMLButtonElement, Props>`.
pub fn last_generic_argument(annotation: &str) -> Option<String> {
    let start = annotation.find('<')?;
    let end = annotation.rfind('>')?;
    if end <= start {
        return None;
    }
    let inner = &annotation[start + 1..end];
    let mut depth = 0i32;
    let mut last_split = 0usize;
    let mut prev = '\0';
    for (idx, ch) in inner.char_indices() {
        match ch {
            // `=>` in a function type is not a closing bracket.
            '>' if prev == '=' => {}
            '<' | '{' | '(' | '[' => depth += 1,
            '>' | '}' | ')' | ']' => depth -= 1,
            ',' if depth == 0 => last_split = idx + 1,
            _ => {}
        }
        prev = ch;
    }
    let arg = inner[last_split..].trim();
    (!arg.is_empty()).then(|| arg.to_string())
}

pub fn is_markup_kind(kind: &str) -> bool {
    matches!(
        kind,
        "jsx_element" | "jsx_self_closing_element" | "jsx_fragment"
    )
}

/// Whether the subtree rooted at `node` contains any markup.
pub fn contains_markup<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    if is_markup_kind(node.kind().as_ref()) {
        return true;
    }
    node.children().any(|c| contains_markup(&c))
}
