//! Built-in recognition rules.
//!
//! One row per language, each row a list of rule groups. Groups shared by
//! several languages (C-family punctuation, the JavaScript core TypeScript
//! inherits, the C core C++ inherits) are compiled into separate signatures
//! for every language that lists them.

use super::{MarkerClass, SignatureKind};
use crate::core::Language;

use MarkerClass::{Disqualifier as D, Strong as S, Weak as W};

/// A rule before compilation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub class: MarkerClass,
    pub kind: SignatureKind,
    pub pattern: &'static str,
    pub label: &'static str,
    pub weight: f64,
}

/// Whole-word literal; label is derived from the word
const fn kw(class: MarkerClass, word: &'static str, weight: f64) -> Rule {
    Rule {
        class,
        kind: SignatureKind::Keyword,
        pattern: word,
        label: "",
        weight,
    }
}

/// Literal character sequence; label is derived from the sequence
const fn op(class: MarkerClass, sequence: &'static str, weight: f64) -> Rule {
    Rule {
        class,
        kind: SignatureKind::Operator,
        pattern: sequence,
        label: "",
        weight,
    }
}

const fn comment(class: MarkerClass, regex: &'static str, label: &'static str, weight: f64) -> Rule {
    Rule {
        class,
        kind: SignatureKind::Comment,
        pattern: regex,
        label,
        weight,
    }
}

const fn re(class: MarkerClass, regex: &'static str, label: &'static str, weight: f64) -> Rule {
    Rule {
        class,
        kind: SignatureKind::Pattern,
        pattern: regex,
        label,
        weight,
    }
}

/// `if x:` followed by an indented body, with no braces or semicolons
const INDENTED_BLOCK_HEADER: &str = r"(?m)^[ \t]*(if|elif|else|for|while|def|class|try|except|finally|with)\b[^\n{;]*:[ \t]*\r?\n[ \t]+\S";

const C_FAMILY: &[Rule] = &[
    op(W, "{", 0.5),
    op(W, ";", 0.5),
    comment(W, r"(?m)^[ \t]*//", "`//` line comment", 1.0),
    comment(W, r"/\*", "`/*` block comment", 1.0),
    re(D, INDENTED_BLOCK_HEADER, "colon-terminated block with indented body", 5.0),
];

const JS_CORE: &[Rule] = &[
    re(S, r"\bconsole\.(log|error|warn|info|debug)\s*\(", "`console.*` call", 8.0),
    re(S, r"\bfunction\*?\s*\w*\s*\(", "`function` declaration", 6.0),
    re(S, r"\b(const|let|var)\s+[\w$]+\s*=", "`const`/`let`/`var` binding", 4.0),
    op(S, "===", 6.0),
    op(S, "!==", 6.0),
    re(S, r"\b(document|window)\.\w+", "DOM global", 7.0),
    re(S, r#"\brequire\s*\(\s*['"]"#, "`require(...)` import", 7.0),
    re(S, r"\bmodule\.exports\b|\bexports\.\w+\s*=", "CommonJS export", 8.0),
    re(S, r#"(?m)^[ \t]*import\s+[^;\n]*\bfrom\s+['"]"#, "ES module import", 7.0),
    re(S, r"\bexport\s+(default|const|let|function|class|async)\b", "ES module export", 6.0),
    re(S, r"\bundefined\b", "`undefined`", 4.0),
    re(S, r"\)\s*=>\s*[{(\w]|\b\w+\s*=>\s*[{(\w]", "arrow function", 4.0),
    re(S, r"\A#!.*\bnode\b", "node shebang", 10.0),
    re(W, r"\bthis\.\w+", "`this.` member access", 2.0),
    re(W, r"\bnew\s+[A-Z]\w*\s*\(", "`new` expression", 1.0),
    re(W, r"\basync\s+function\b|\bawait\s+\w", "async/await", 2.0),
];

const TS_ONLY: &[Rule] = &[
    re(
        S,
        r"[\w)\]]\s*\??:\s*(string|number|boolean|any|unknown|never|void|object|bigint)\b",
        "type annotation",
        8.0,
    ),
    re(S, r"\binterface\s+\w+(\s+extends\s+[\w<>, .]+)?\s*\{", "`interface` declaration", 8.0),
    re(S, r"\btype\s+\w+(<[^>]*>)?\s*=[^=]", "`type` alias", 7.0),
    re(S, r"\bimport\s+type\b", "`import type`", 9.0),
    re(S, r"\b(readonly|declare|keyof|satisfies)\s+\w", "TypeScript modifier", 6.0),
    re(S, r"\bas\s+(const|string|number|any|unknown|boolean)\b", "`as` type assertion", 7.0),
    re(S, r"\b(private|public|protected)\s+(readonly\s+)?\w+\s*\??:", "annotated class member", 7.0),
    re(S, r"<\s*(string|number|boolean|any)\s*(\[\])?\s*>", "generic type argument", 5.0),
];

const JAVA: &[Rule] = &[
    re(S, r"\bpublic\s+(final\s+|abstract\s+)?(class|interface|enum|record)\s+\w+", "public type declaration", 8.0),
    re(S, r"\bpublic\s+static\s+void\s+main\s*\(", "`main` entry point", 10.0),
    re(S, r"\bSystem\.(out|err)\.print(ln|f)?\s*\(", "`System.out` printing", 9.0),
    re(S, r"(?m)^[ \t]*import\s+(static\s+)?javax?\.", "`java.*` import", 9.0),
    re(S, r"(?m)^[ \t]*package\s+[\w.]+\s*;", "package declaration", 8.0),
    re(
        S,
        r"@(Override|Autowired|Test|Deprecated|SuppressWarnings|FunctionalInterface|Entity|Bean)\b",
        "annotation",
        8.0,
    ),
    re(
        S,
        r"\b(public|private|protected)\s+(static\s+)?(final\s+)?(void|int|long|boolean|double|float|char|byte|short|String|[A-Z]\w*(<[^>]*>)?(\[\])?)\s+\w+\s*[(;=]",
        "typed member declaration",
        6.0,
    ),
    re(
        S,
        r"\b(String|Integer|Boolean|Long|Double|List|Map|Set|ArrayList|HashMap|Optional)(<[^>]*>)?(\[\])?\s+\w+\s*[=;:)]",
        "boxed or collection variable",
        5.0,
    ),
    re(W, r"\b(extends|implements)\s+[A-Z]\w*", "inheritance clause", 2.0),
    re(W, r"\b(int|boolean|double|long|char|float)\s+\w+\s*[=;(,)]", "primitive declaration", 2.0),
    re(W, r"\bthis\.\w+", "`this.` member access", 2.0),
    re(W, r"\bnew\s+[A-Z]\w*(<[^>]*>)?\s*\(", "`new` expression", 1.0),
];

const C_CORE: &[Rule] = &[
    re(S, r#"(?m)^[ \t]*#[ \t]*include\s*[<"]"#, "`#include` directive", 9.0),
    re(S, r"(?m)^[ \t]*#[ \t]*(define|ifdef|ifndef|endif|pragma)\b", "preprocessor directive", 7.0),
    re(S, r"\b(int|void|char)\s+main\s*\(", "`main` function", 6.0),
    re(
        S,
        r"\b(int|char|void|float|double|long|short|unsigned|const\s+char)\s*\*+\s*\w+",
        "pointer declaration",
        5.0,
    ),
    re(S, r"\bsizeof\s*\(", "`sizeof`", 6.0),
    re(S, r"\bNULL\b", "`NULL`", 4.0),
    re(
        W,
        r"\b(int|char|float|double|void|long|short|unsigned|size_t)\s+\w+\s*[=;(,)\[]",
        "C type declaration",
        2.0,
    ),
    op(W, "->", 1.0),
];

const C_ONLY: &[Rule] = &[
    re(
        S,
        r"\b(printf|scanf|malloc|calloc|realloc|free|fprintf|sprintf|snprintf|memcpy|memset|strcpy|strlen|strcmp)\s*\(",
        "C standard library call",
        7.0,
    ),
    re(
        S,
        r"<(stdio|stdlib|string|math|stdint|stdbool|unistd|assert|ctype|errno|time)\.h>",
        "C standard header",
        8.0,
    ),
    re(S, r"\btypedef\s+(struct|enum|union)\b", "`typedef` declaration", 7.0),
    re(W, r"\bstruct\s+\w+\s*[{*]", "struct declaration", 2.0),
];

const CPP_ONLY: &[Rule] = &[
    re(
        S,
        r"\bstd::(cout|cin|cerr|endl|string|vector|map|unique_ptr|shared_ptr|make_unique|make_shared|move|size_t|pair|sort|unordered_map|function|optional|mutex)\b",
        "`std::` facility",
        8.0,
    ),
    re(S, r"\b(cout|cin|cerr|endl)\b", "iostream object", 8.0),
    re(S, r"\btemplate\s*<", "`template` declaration", 9.0),
    re(S, r"\busing\s+namespace\s+\w+", "`using namespace`", 9.0),
    re(S, r"\bnamespace\s+\w+\s*\{", "namespace block", 7.0),
    re(
        S,
        r"#[ \t]*include\s*<(iostream|vector|string|map|memory|algorithm|unordered_map|set|sstream|fstream|functional|utility)>",
        "C++ standard header",
        8.0,
    ),
    re(S, r"\b(public|private|protected):", "access specifier section", 6.0),
    re(
        S,
        r"\b(nullptr|constexpr|static_cast|dynamic_cast|reinterpret_cast|unique_ptr|shared_ptr)\b",
        "modern C++ keyword",
        8.0,
    ),
    re(
        S,
        r"\b(printf|scanf|malloc|free|fprintf|sprintf|memcpy|strlen)\s*\(",
        "C standard library call",
        3.0,
    ),
    re(W, r"\bclass\s+\w+", "class declaration", 1.0),
    re(W, r"\w::\w", "scope resolution", 1.0),
];

const GO: &[Rule] = &[
    re(S, r"(?m)^[ \t]*package\s+\w+[ \t]*$", "package clause", 8.0),
    re(S, r"\bfunc\s+(\([^)]*\)\s*)?\w+\s*\(", "`func` declaration", 9.0),
    re(S, r"\bfunc\s*\(", "function literal", 3.0),
    op(S, ":=", 6.0),
    re(S, r"\bfmt\.\w+\s*\(", "`fmt` call", 9.0),
    re(S, r"\btype\s+\w+\s+(struct|interface)\s*\{", "type declaration", 9.0),
    re(S, r#"(?m)^[ \t]*import\s+(\(|"[\w./-]+")"#, "import declaration", 7.0),
    re(S, r"\bif\s+err\s*!=\s*nil\b", "error check", 10.0),
    re(S, r"\bchan\s+\w+|<-\s*\w+|\bgo\s+func\b|\bdefer\s+\w+", "channel or `defer`", 7.0),
    re(S, r"\[\](string|int|int64|byte|float64|bool|rune|[A-Z]\w*)\b", "slice type", 4.0),
    kw(W, "nil", 2.0),
    re(D, r"(?m);[ \t]*$", "trailing semicolon", 1.0),
];

const RUST: &[Rule] = &[
    kw(S, "fn", 8.0),
    re(S, r"\b[a-z_][a-z0-9_]*!\s*[\(\[\{]", "macro invocation", 7.0),
    re(S, r"\blet\s+mut\b", "`let mut` binding", 9.0),
    re(S, r"\bimpl\b(\s*<[^>]*>)?\s+[\w:]+", "`impl` block", 8.0),
    re(S, r"\buse\s+(std|crate|super|self|core|alloc)::", "`use` path", 9.0),
    re(
        S,
        r"\bpub(\([\w:]+\))?\s+(fn|struct|enum|mod|trait|use|const|static|type)\b",
        "`pub` item",
        8.0,
    ),
    re(
        S,
        r"#!?\[(derive|cfg|test|allow|deny|warn|inline|must_use|tokio::main)\b",
        "attribute",
        9.0,
    ),
    re(S, r"&(mut\s+|'[a-z_]+\s+)?(self|str)\b", "reference to `self`/`str`", 6.0),
    re(S, r"\b(Option|Result|Vec|Box|Rc|Arc)<", "std generic type", 6.0),
    re(S, r"\bmatch\s+[\w.&*()]+\s*\{", "`match` expression", 7.0),
    re(
        S,
        r"->\s*(Self|Result|Option|bool|String|&?str|u8|u16|u32|u64|usize|i32|i64|f32|f64|impl\b|Vec|Box)",
        "return type",
        6.0,
    ),
    re(S, r"\b(Some|Ok|Err)\(", "`Option`/`Result` variant", 5.0),
    op(W, "->", 1.0),
    op(W, "::", 1.0),
];

const PHP: &[Rule] = &[
    re(S, r"<\?php\b", "`<?php` open tag", 10.0),
    re(S, r"\$this->", "`$this->` access", 9.0),
    re(S, r"\$[a-zA-Z_]\w*\s*=[^=>]", "`$variable` assignment", 5.0),
    re(S, r"\$[a-zA-Z_]\w*->\w+", "object operator", 7.0),
    re(S, r"\bfunction\s+&?\w+\s*\(\s*(\??[\w\\]+\s+)?\$", "function with `$` parameters", 8.0),
    re(S, r"\b(public|private|protected)\s+(static\s+)?function\b", "method declaration", 8.0),
    re(
        S,
        r"\b(isset|empty|unset|array_\w+|str_\w+|explode|implode|in_array)\s*\(",
        "PHP builtin",
        5.0,
    ),
    re(S, r"(?m)^[ \t]*namespace\s+[\w\\]+\s*;", "namespace declaration", 8.0),
    re(S, r"(?m)^[ \t]*use\s+[\w\\]+\\[\w\\]+(\s+as\s+\w+)?\s*;", "`use` import", 8.0),
    re(S, r"\becho\s+[^;\n]*;", "`echo` statement", 3.0),
    re(S, r"\$_(GET|POST|SERVER|SESSION|COOKIE|REQUEST)\b", "superglobal", 9.0),
    re(S, r"\A#!.*\bphp\b", "php shebang", 10.0),
    op(W, "=>", 1.0),
    op(W, "->", 1.0),
];

const PYTHON: &[Rule] = &[
    kw(S, "def", 8.0),
    re(
        S,
        r"(?m)^[ \t]*(async\s+)?def\s+\w+\s*\([^)]*\)\s*(->\s*[^:\n]+)?:",
        "function definition",
        6.0,
    ),
    re(
        S,
        r"(?m)^[ \t]*(from\s+[\w.]+\s+)?import\s+(\*|[\w.]+(\s+as\s+\w+)?(\s*,\s*[\w.]+(\s+as\s+\w+)?)*)[ \t]*$",
        "import statement",
        6.0,
    ),
    kw(S, "elif", 9.0),
    re(
        S,
        r"(?m)^[ \t]*(if|elif|else|for|while|class|try|except|finally|with)\b[^\n{;]*:[ \t]*$",
        "colon-terminated block header",
        5.0,
    ),
    re(S, r"\b(True|False|None)\b", "`True`/`False`/`None`", 4.0),
    re(S, r"\b__\w+__\b", "dunder name", 5.0),
    kw(S, "lambda", 5.0),
    re(S, r"\A#!.*\bpython[0-9.]*\b", "python shebang", 10.0),
    re(W, r"\bself\.\w+", "`self.` attribute", 2.0),
    re(W, r"\bprint\s*\(", "`print(` call", 2.0),
    re(W, r"(?m)^[ \t]*@[\w.]+(\(.*\))?[ \t]*$", "decorator", 2.0),
    re(W, r":[ \t]*\r?\n[ \t]+\S", "indentation-only block", 2.0),
    comment(W, r"(?m)^[ \t]*#[ \t]", "`#` comment", 1.0),
    re(D, r"(?m)[;{][ \t]*$", "line ending in `;` or `{`", 1.0),
    re(D, r"(?m)^[ \t]*\}", "closing brace line", 1.0),
];

const RUBY: &[Rule] = &[
    kw(S, "def", 3.0),
    re(S, r"(?m)^[ \t]*end[ \t]*$", "`end` line", 6.0),
    kw(S, "elsif", 9.0),
    kw(S, "unless", 5.0),
    re(S, r"\bputs\s", "`puts` call", 7.0),
    re(S, r"\battr_(accessor|reader|writer)\b", "attribute macro", 9.0),
    re(S, r"\bdo\s*\|[^|\n]*\|", "block with parameters", 7.0),
    re(S, r"\.each\b", "`.each` iteration", 6.0),
    re(S, r#"(?m)^[ \t]*require(_relative)?\s+['"]"#, "`require` statement", 5.0),
    re(S, r"(?m)^[ \t]*class\s+\w+(\s*<\s*[\w:]+)?[ \t]*$", "class declaration", 4.0),
    re(S, r"@[a-z_]\w*\s*=", "instance variable assignment", 4.0),
    re(S, r"#\{[^}]*\}", "string interpolation", 6.0),
    re(S, r"\A#!.*\bruby\b", "ruby shebang", 10.0),
    re(W, r"(^|[\s(,\[]):[a-z_]\w*", "symbol literal", 2.0),
    kw(W, "nil", 2.0),
    comment(W, r"(?m)^[ \t]*#[ \t]", "`#` comment", 1.0),
    re(
        D,
        r"(?m)^[ \t]*def\s+\w+\s*\([^)]*\)\s*(->[^:\n]*)?:[ \t]*$",
        "Python-style `def` header",
        8.0,
    ),
    re(D, r"(?m);[ \t]*$", "trailing semicolon", 1.0),
];

const SHELL: &[Rule] = &[
    re(S, r"\A#!\s*/(usr/)?bin/(env\s+)?(ba|z|k|da)?sh\b", "shell shebang", 10.0),
    re(S, r"(?m)^[ \t]*(fi|done|esac)\b[ \t]*(;.*)?$", "block terminator", 8.0),
    re(S, r"(?m);[ \t]*(then|do)\b|^[ \t]*(then|do)[ \t]*$", "`then`/`do` keyword", 7.0),
    re(S, r#"\[\[?\s+(-[a-zA-Z]{1,2}\s|!\s|"?\$)"#, "test expression", 6.0),
    op(S, "$(", 6.0),
    re(S, r"\$\{#\w+|\$\{\w+(:-|:=|:\?|:\+|##?|%%?|/)", "parameter expansion", 6.0),
    re(S, r#""\$\w+""#, "quoted variable", 3.0),
    re(S, r"(?m)^[ \t]*(export|local|readonly)\s+\w+=", "exported assignment", 7.0),
    re(
        S,
        r"\|\s*(grep|awk|sed|xargs|sort|uniq|wc|head|tail|cut|tr|tee)\b",
        "pipeline into coreutil",
        8.0,
    ),
    re(
        S,
        r"(?m)^[ \t]*(sudo|apt-get|apt|yum|brew|npm|pip3?|cd|mkdir|rm|cp|mv|chmod|chown|curl|wget|git|docker|ls|cat|source)\s",
        "shell command",
        4.0,
    ),
    re(S, r"\becho\s", "`echo`", 3.0),
    re(S, r"(?m)^[ \t]*\w+\s*\(\)\s*\{", "function definition", 4.0),
    re(W, r"(?m)^[ \t]*[A-Za-z_]\w*=(\S|$)", "assignment without spaces", 2.0),
    re(W, r"\$([0-9#@?*]|[A-Za-z_]\w*)", "`$var` expansion", 1.0),
    comment(W, r"(?m)^[ \t]*#[ \t]", "`#` comment", 1.0),
    re(
        D,
        r"(?m)^[ \t]*(def|class|import|from|fn|func|public|private|package)\s",
        "declaration keyword",
        3.0,
    ),
];

const SQL: &[Rule] = &[
    re(S, r"(?is)\bselect\b.+?\bfrom\b", "`SELECT ... FROM`", 9.0),
    re(S, r"(?i)\binsert\s+into\b", "`INSERT INTO`", 10.0),
    re(S, r"(?i)\bupdate\s+\w+\s+set\b", "`UPDATE ... SET`", 10.0),
    re(S, r"(?i)\bdelete\s+from\b", "`DELETE FROM`", 10.0),
    re(
        S,
        r"(?i)\bcreate\s+(table|index|view|database|schema|unique\s+index|(or\s+replace\s+)?(function|procedure|trigger))\b",
        "`CREATE` statement",
        10.0,
    ),
    re(S, r"(?i)\b(alter|drop)\s+(table|index|view|column|database)\b", "`ALTER`/`DROP` statement", 9.0),
    re(S, r"(?i)\b(inner|left|right|full|outer|cross)\s+join\b", "join clause", 8.0),
    re(S, r"(?i)\b(group|order)\s+by\b", "`GROUP BY`/`ORDER BY`", 7.0),
    re(
        S,
        r"(?i)\b(varchar|primary\s+key|foreign\s+key|not\s+null|auto_increment)\b",
        "column definition",
        6.0,
    ),
    re(W, r"(?i)\bwhere\b", "`WHERE` clause", 2.0),
    comment(W, r"(?m)^[ \t]*--", "`--` comment", 2.0),
    re(
        D,
        r"(?m)^[ \t]*(def|fn|func|function|class|import|#include)\b",
        "code declaration",
        3.0,
    ),
];

const HTML: &[Rule] = &[
    re(S, r"(?i)<!doctype\s+html", "doctype", 10.0),
    re(
        S,
        r"(?i)<(html|head|body|div|span|p|a|ul|ol|li|table|thead|tbody|tr|td|th|form|input|button|label|select|option|textarea|script|style|meta|link|title|h[1-6]|section|article|nav|header|footer|main|img|br|hr)\b[^>]*>",
        "HTML tag",
        6.0,
    ),
    re(
        S,
        r"(?i)</(html|head|body|div|span|p|a|ul|ol|li|table|tr|td|th|form|button|label|select|option|textarea|script|style|title|h[1-6]|section|article|nav|header|footer|main)>",
        "closing tag",
        6.0,
    ),
    comment(S, r"<!--[\s\S]*?-->", "`<!-- -->` comment", 5.0),
    re(W, r#"\b(class|id|href|src|alt|type|rel|name|content)="[^"]*""#, "attribute", 2.0),
    re(W, r"&(nbsp|amp|lt|gt|quot|copy);", "character entity", 3.0),
    re(
        D,
        r"(?m)^[ \t]*(def|fn|func|function|import|const|let|var)\s",
        "code statement",
        2.0,
    ),
];

const CSS: &[Rule] = &[
    re(
        W,
        r"(?m)^[ \t]*([.#][\w-]+|[a-z][a-z0-9]*)([ \t]*[,>+~]?[ \t]*([.#:]{1,2}[\w-]+|[a-z][a-z0-9]*))*[ \t]*\{",
        "selector block",
        2.0,
    ),
    re(
        S,
        r"\b(color|background(-color|-image)?|margin(-(top|bottom|left|right))?|padding(-(top|bottom|left|right))?|font-(size|family|weight|style)|display|position|width|height|border(-(radius|top|bottom|left|right|color|width))?|text-(align|decoration|transform)|flex(-(direction|wrap|grow))?|grid-template-columns|z-index|opacity|overflow|cursor|transition|transform|box-shadow|line-height|justify-content|align-items)\s*:\s*[^;{}\n]+;",
        "property declaration",
        5.0,
    ),
    re(
        S,
        r"(?m)^[ \t]*@(media|import|keyframes|font-face|supports|charset|tailwind)\b",
        "at-rule",
        8.0,
    ),
    re(S, r"\b\d+(\.\d+)?(px|em|rem|vh|vw|pt|deg|ms)\b", "length unit", 5.0),
    re(S, r"#[0-9a-fA-F]{3}([0-9a-fA-F]{3})?\b", "hex colour", 3.0),
    re(
        S,
        r":{1,2}(hover|before|after|focus|active|visited|nth-child|first-child|last-child|root)\b",
        "pseudo-class",
        7.0,
    ),
    op(S, "!important", 9.0),
    comment(W, r"/\*", "`/*` comment", 1.0),
    re(
        D,
        r"(?m)^[ \t]*(function|def|fn|func|return|if|for|while|class|public|private|let|const|var)\b",
        "statement keyword",
        4.0,
    ),
];

const JSON: &[Rule] = &[
    re(S, r"\A[\{\[][\s\S]*[\}\]]\z", "single object or array document", 4.0),
    re(
        S,
        r#""(?:[^"\\\n]|\\.)*"\s*:\s*("|-?\d|\{|\[|true\b|false\b|null\b)"#,
        "quoted key/value pair",
        5.0,
    ),
    re(S, r":\s*(true|false|null)\s*[,}\]\n]", "JSON literal value", 3.0),
    re(D, r"(?m)^[ \t]*//|/\*", "comment", 6.0),
    re(D, r"'[^'\n]*'", "single-quoted string", 2.0),
    op(D, ";", 3.0),
    re(D, r"[^=!<>:]=[^=>]", "assignment", 3.0),
    re(
        D,
        r"(?m)^[ \t]*(function|def|var|let|const|return|import|class|fn|func|public|package)\s",
        "code keyword",
        6.0,
    ),
    re(D, r",\s*[\}\]]", "trailing comma", 3.0),
    re(D, r"(?m)^[ \t]*[A-Za-z_$][\w$]*\s*:", "unquoted key", 4.0),
];

/// The built-in catalog: language → rule groups
pub(crate) static CATALOG_TABLE: &[(Language, &[&[Rule]])] = &[
    (Language::JavaScript, &[JS_CORE, C_FAMILY]),
    (Language::TypeScript, &[JS_CORE, TS_ONLY, C_FAMILY]),
    (Language::Python, &[PYTHON]),
    (Language::Java, &[JAVA, C_FAMILY]),
    (Language::C, &[C_CORE, C_ONLY, C_FAMILY]),
    (Language::Cpp, &[C_CORE, CPP_ONLY, C_FAMILY]),
    (Language::Go, &[GO, C_FAMILY]),
    (Language::Rust, &[RUST, C_FAMILY]),
    (Language::Php, &[PHP, C_FAMILY]),
    (Language::Ruby, &[RUBY]),
    (Language::Shell, &[SHELL]),
    (Language::Sql, &[SQL]),
    (Language::Html, &[HTML]),
    (Language::Css, &[CSS]),
    (Language::Json, &[JSON]),
];
