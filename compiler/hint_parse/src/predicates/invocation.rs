//! Splitting `name(arg, ...)` condition text.

use hint_ir::ParamKind;
use memchr::memmem;

use crate::BindError;

#[inline]
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_identifier(text: &str) -> bool {
    text.bytes().next().is_some_and(|b| !b.is_ascii_digit())
        && text.bytes().all(is_ident_byte)
}

/// A predicate call split into its name and trimmed argument texts.
pub(super) struct Invocation<'a> {
    pub(super) name: &'a str,
    pub(super) args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    pub(super) fn parse(text: &'a str) -> Result<Self, BindError> {
        let malformed = || BindError::MalformedInvocation {
            text: text.trim().to_owned(),
        };
        let trimmed = text.trim();
        let (name, rest) = trimmed.split_once('(').ok_or_else(malformed)?;
        let name = name.trim_end();
        if !is_identifier(name) {
            return Err(malformed());
        }
        let inner = rest.strip_suffix(')').ok_or_else(malformed)?;
        let args = split_arguments(inner).ok_or_else(malformed)?;
        Ok(Invocation { name, args })
    }
}

/// Split an argument list on top-level commas.
///
/// Returns `None` for unbalanced brackets or quotes and for empty
/// arguments. An all-whitespace list is zero arguments.
fn split_arguments(inner: &str) -> Option<Vec<&str>> {
    if inner.trim().is_empty() {
        return Some(Vec::new());
    }

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut start = 0;
    for (i, b) in inner.bytes().enumerate() {
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'"' | b'\'' => quote = Some(b),
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.checked_sub(1)?,
            b',' if depth == 0 => {
                args.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 || quote.is_some() {
        return None;
    }
    args.push(inner[start..].trim());

    if args.iter().any(|arg| arg.is_empty()) {
        None
    } else {
        Some(args)
    }
}

/// Classify one argument, unquoting string literals.
pub(super) fn classify_argument(arg: &str) -> (String, ParamKind) {
    if let Some(name) = arg.strip_prefix('$') {
        if !name.is_empty() && name.bytes().all(is_ident_byte) {
            return (arg.to_owned(), ParamKind::Variable);
        }
    }
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        return (arg[1..arg.len() - 1].to_owned(), ParamKind::StringLiteral);
    }
    let digits = arg.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(arg);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return (arg.to_owned(), ParamKind::IntLiteral);
    }
    (arg.to_owned(), ParamKind::EnumConstant)
}

/// Names of predicates declared as `boolean name(` in a code block.
pub fn declared_predicates(code: &str) -> impl Iterator<Item = &str> + '_ {
    let bytes = code.as_bytes();
    memmem::find_iter(bytes, b"boolean").filter_map(move |at| {
        if at > 0 && is_ident_byte(bytes[at - 1]) {
            return None;
        }
        let after = at + "boolean".len();
        let name_start = skip_whitespace(bytes, after);
        if name_start == after {
            return None;
        }
        let name_end = name_start
            + bytes[name_start..]
                .iter()
                .take_while(|&&b| is_ident_byte(b))
                .count();
        let open = skip_whitespace(bytes, name_end);
        let name = &code[name_start..name_end];
        (bytes.get(open) == Some(&b'(') && is_identifier(name)).then_some(name)
    })
}

fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    from + bytes[from..]
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count()
}
