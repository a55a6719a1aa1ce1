//! Prompt text for the refactoring agent and the mock-mode placeholder.

pub const SYSTEM_INSTRUCTION: &str = "You are a world-class code refactoring agent specializing in performance, \
security, and modern language practices. Your task is to take the \
user's provided code and their refactoring request, and return ONLY the \
COMPLETE, MODIFIED code block inside a single Markdown code block. \
Do not add any extra text, explanations, or filler outside the code block. \
Maintain the original programming language (e.g., Python, JavaScript, Java).";

/// 模擬模式中保留的原始程式碼第一行長度
pub const MOCK_PREVIEW_CHARS: usize = 40;

/// 日誌中保留的請求文字長度
pub const LOG_PREVIEW_CHARS: usize = 50;

pub fn build_user_prompt(refactor_request: &str, user_code: &str) -> String {
    format!(
        "Refactoring Request: {}\n\nThe user wants you to modify the following code:\n\n---\n{}\n---",
        refactor_request, user_code
    )
}

/// 依字元 (非位元組) 截斷
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// 換行字元，包含 `\r`、垂直定位、換頁、檔案/群組/記錄分隔與 Unicode 行段分隔
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

pub fn first_line_preview(user_code: &str) -> &str {
    let first_line = user_code.split(is_line_break).next().unwrap_or("");
    truncate_chars(first_line, MOCK_PREVIEW_CHARS)
}

pub fn build_mock_response(refactor_request: &str, user_code: &str) -> String {
    format!(
        "// MOCK RESPONSE: LLM Service Unavailable or Key Error.\n\
         // Request: '{request}'\n\n\
         ```python\n\
         def refactor_success(original_code):\n    \
         # This is placeholder code to test the UI/UX flow.\n    \
         # Request: {request}\n    \
         # Original: {original}...\n    \
         return 'Mock Refactoring Complete!'\n\
         ```",
        request = refactor_request,
        original = first_line_preview(user_code),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_layout() {
        let prompt = build_user_prompt("add type hints", "def f(x):\n    return x+1");
        assert_eq!(
            prompt,
            "Refactoring Request: add type hints\n\nThe user wants you to modify the following code:\n\n---\ndef f(x):\n    return x+1\n---"
        );
    }

    #[test]
    fn test_system_instruction_content() {
        assert!(SYSTEM_INSTRUCTION.contains("performance, security, and modern language practices"));
        assert!(SYSTEM_INSTRUCTION.contains("inside a single Markdown code block"));
        assert!(SYSTEM_INSTRUCTION.contains("Maintain the original programming language"));
        assert!(!SYSTEM_INSTRUCTION.contains("  "));
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 40), "short");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_first_line_preview() {
        assert_eq!(first_line_preview("def f(x):\n    return x+1"), "def f(x):");
        let long_line = "x".repeat(100);
        assert_eq!(first_line_preview(&long_line).len(), 40);
        assert_eq!(first_line_preview("\nsecond"), "");
        assert_eq!(first_line_preview("first\rsecond"), "first");
        assert_eq!(first_line_preview("first\r\nsecond"), "first");
        assert_eq!(first_line_preview("a\x0bb"), "a");
        assert_eq!(first_line_preview("a\u{2028}b"), "a");
        assert_eq!(first_line_preview("a\u{85}b"), "a");
    }

    #[test]
    fn test_mock_response_layout() {
        let text = build_mock_response("add type hints", "def f(x):\n    return x+1");

        assert!(text.starts_with("// MOCK RESPONSE: LLM Service Unavailable or Key Error.\n"));
        assert!(text.contains("// Request: 'add type hints'\n\n```python\n"));
        assert!(text.contains("\n    # Request: add type hints\n"));
        assert!(text.contains("\n    # Original: def f(x):...\n"));
        assert!(text.ends_with("    return 'Mock Refactoring Complete!'\n```"));
    }
}
