//! Template string generators.
//!
//! Templates are scanned one `char` at a time. A backslash escapes the
//! following character, which is copied through without consulting the
//! replacer. In [`digits`] and [`hex_digits`], every unescaped `#` becomes a
//! random digit.

use jfdi_core::{Context, Generator, Value};
use rand::Rng;

/// Placeholder replaced by [`digits`] and [`hex_digits`].
pub const PLACEHOLDER: char = '#';

const ESCAPE: char = '\\';

const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Generate a string by mapping each unescaped character of `pattern`
/// through `replacer`.
///
/// A trailing lone backslash has nothing to escape and is copied as-is.
pub fn rune_map<F>(pattern: impl Into<String>, replacer: F) -> Generator
where
    F: Fn(&mut Context, char) -> char + Send + Sync + 'static,
{
    let pattern = pattern.into();
    Generator::new(move |ctx| {
        let mut output = String::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            if c == ESCAPE {
                output.push(chars.next().unwrap_or(ESCAPE));
            } else {
                output.push(replacer(ctx, c));
            }
        }
        Ok(Value::String(output))
    })
}

/// Replace `#` with a random decimal digit.
pub fn digits(pattern: impl Into<String>) -> Generator {
    rune_map(pattern, |ctx, c| {
        if c == PLACEHOLDER {
            HEX_DIGITS[ctx.rng().random_range(0..10)]
        } else {
            c
        }
    })
}

/// Replace `#` with a random lowercase hexadecimal digit.
pub fn hex_digits(pattern: impl Into<String>) -> Generator {
    rune_map(pattern, |ctx, c| {
        if c == PLACEHOLDER {
            HEX_DIGITS[ctx.rng().random_range(0..16)]
        } else {
            c
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn render(g: &Generator, ctx: &mut Context) -> String {
        g.call(ctx).unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_digits() {
        let cases = [
            ("", r"^$"),
            ("#", r"^\d$"),
            (r"\#", r"^#$"),
            (r"\\#", r"^\\\d$"),
            ("#-## #/#", r"^\d-\d\d \d/\d$"),
            ("###»###", r"^\d{3}»\d{3}$"),
        ];

        let mut ctx = Context::with_seed(42);
        for (input, pattern) in cases {
            let re = Regex::new(pattern).unwrap();
            let g = digits(input);
            for _ in 0..20 {
                let s = render(&g, &mut ctx);
                assert!(re.is_match(&s), "{s:?} doesn't match {pattern}");
            }
        }
    }

    #[test]
    fn test_hex_digits() {
        let cases = [
            ("", r"^$"),
            ("#", r"^[0-9a-f]$"),
            (r"\#", r"^#$"),
            (r"\\#", r"^\\[0-9a-f]$"),
            ("#-## #/#", r"^[0-9a-f]-[0-9a-f][0-9a-f] [0-9a-f]/[0-9a-f]$"),
            ("###»###", r"^[0-9a-f]{3}»[0-9a-f]{3}$"),
            ("############", r"^[0-9a-f]{12}$"),
        ];

        let mut ctx = Context::with_seed(42);
        for (input, pattern) in cases {
            let re = Regex::new(pattern).unwrap();
            let g = hex_digits(input);
            for _ in 0..20 {
                let s = render(&g, &mut ctx);
                assert!(re.is_match(&s), "{s:?} doesn't match {pattern}");
            }
        }
    }

    #[test]
    fn test_escaped_placeholder_skips_replacer() {
        let mut a = Context::with_seed(3);
        let mut b = Context::with_seed(3);

        assert_eq!(render(&digits(r"\#\#\#"), &mut a), "###");

        // No randomness was consumed by the escaped template
        let g = digits("########");
        assert_eq!(render(&g, &mut a), render(&g, &mut b));
    }

    #[test]
    fn test_trailing_backslash() {
        let mut ctx = Context::with_seed(1);
        assert_eq!(render(&digits(r"ab\"), &mut ctx), r"ab\");
    }

    #[test]
    fn test_custom_rune_map() {
        let mut ctx = Context::with_seed(1);
        let upper = rune_map(r"abc\d", |_, c| c.to_ascii_uppercase());
        assert_eq!(render(&upper, &mut ctx), "ABCd");
    }

    #[test]
    fn test_digits_deterministic() {
        let g = digits("###-##-####");
        let mut a = Context::with_seed(1234);
        let mut b = Context::with_seed(1234);
        for _ in 0..5 {
            assert_eq!(render(&g, &mut a), render(&g, &mut b));
        }
    }
}
