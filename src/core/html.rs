// src/core/html.rs
// Low-level HTML string manipulation helpers.
// Deliberately naive but tailored to the report page structure.
// They operate case-insensitively on ASCII tag/attribute names.

/// Fast ASCII-only lowercasing for tag/attribute matching.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the section between an opening tag (with attributes) and its closing
/// tag, case-insensitive. Returns the HTML *inside* the tags.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// A block is from the start of the opening tag to the end of the closing tag.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return INNER without the wrapping tags (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// First `attr="value"` occurrence within `s`, case-insensitive on the
/// attribute name. Only double-quoted values, which is what the site emits.
pub fn attr_value(s: &str, attr: &str) -> Option<String> {
    let lc = to_lower(s);
    let pat = join!(to_lower(attr), "=\"");
    let i = lc.find(&pat)? + pat.len();
    let j = s[i..].find('"')? + i;
    Some(s[i..j].to_string())
}
