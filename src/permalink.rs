// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use eyre::eyre;

use crate::slug::Slug;

/// Expand an article path template for one article.
///
/// Two placeholders are recognized: `{date:FMT}`, where `FMT` is a strftime
/// format applied to the article date, and `{slug}`. `{{` and `}}` produce
/// literal braces. Anything else inside braces is rejected.
pub fn expand(template: &str, date: NaiveDate, slug: &Slug) -> eyre::Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut token = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => token.push(c),
                        None => {
                            return Err(eyre!("unclosed placeholder in template `{}`", template))
                        }
                    }
                }
                expand_token(&mut out, &token, date, slug)
                    .map_err(|e| eyre!("{} in template `{}`", e, template))?;
            }
            '}' => return Err(eyre!("stray `}}` in template `{}`", template)),
            c => out.push(c),
        }
    }
    Ok(out)
}

fn expand_token(out: &mut String, token: &str, date: NaiveDate, slug: &Slug) -> eyre::Result<()> {
    if token == "slug" {
        out.push_str(slug.as_str());
        return Ok(());
    }
    if let Some(format) = token.strip_prefix("date:") {
        let items: Vec<Item> = StrftimeItems::new(format).collect();
        if items.contains(&Item::Error) {
            return Err(eyre!("bad date format `{}`", format));
        }
        // A specifier can be well-formed yet not apply to a date, e.g. %H.
        write!(out, "{}", date.format_with_items(items.into_iter()))
            .map_err(|_| eyre!("date format `{}` not usable for a date", format))?;
        return Ok(());
    }
    Err(eyre!("unknown placeholder `{{{}}}`", token))
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::expand;
    use crate::slug::Slug;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expand_dated_template() {
        let url = expand(
            "{date:%Y}/{date:%m}/{date:%d}/{slug}.html",
            date(2020, 3, 14),
            &Slug::new("hello-world"),
        )
        .unwrap();
        assert_eq!(url, "2020/03/14/hello-world.html");
    }

    #[test]
    fn test_expand_default_template() {
        let url = expand("{slug}.html", date(2020, 3, 14), &Slug::new("hello-world")).unwrap();
        assert_eq!(url, "hello-world.html");
    }

    #[test]
    fn test_expand_literal_text() {
        let url = expand(
            "posts/{date:%Y}/{slug}/index.html",
            date(2021, 12, 1),
            &Slug::new("first"),
        )
        .unwrap();
        assert_eq!(url, "posts/2021/first/index.html");
    }

    #[test]
    fn test_expand_escaped_braces() {
        let url = expand("{{{slug}}}", date(2020, 1, 1), &Slug::new("first")).unwrap();
        assert_eq!(url, "{first}");
    }

    #[test]
    fn test_expand_unknown_placeholder() {
        let result = expand("{category}/{slug}", date(2020, 1, 1), &Slug::new("first"));
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_bad_date_format() {
        let result = expand("{date:%Q}/{slug}", date(2020, 1, 1), &Slug::new("first"));
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_time_specifier_rejected() {
        let result = expand("{date:%H}/{slug}", date(2020, 1, 1), &Slug::new("first"));
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_unclosed_placeholder() {
        let result = expand("{slug", date(2020, 1, 1), &Slug::new("first"));
        assert!(result.is_err());
    }
}
