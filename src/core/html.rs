// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}
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

/* ---------------- class attribute helpers ---------------- */

/// Lowercased opening tag of a block (everything up to the first '>').
fn opener_lc(block: &str) -> String {
    let end = block.find('>').unwrap_or(block.len());
    to_lower(&block[..end])
}

/// Value of the class attribute in the opening tag, lowercased.
/// Tolerates single quotes, double quotes and unquoted values.
pub fn tag_class(block: &str) -> Option<String> {
    let opener = opener_lc(block);
    let at = opener.find("class=")?;
    let val = &opener[at + "class=".len()..];
    let (quote, start) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start..].find(quote).map(|e| start + e).unwrap_or(val.len())
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>').unwrap_or(val.len())
    };
    Some(val[start..end].to_string())
}

/// True if any class on the opening tag starts with `prefix`
/// (e.g. `dienstid` matches class="dienstid4711").
pub fn tag_class_starts_with(block: &str, prefix: &str) -> bool {
    let prefix = to_lower(prefix);
    match tag_class(block) {
        Some(cls) => cls.split_ascii_whitespace().any(|c| c.starts_with(&prefix)),
        None => false,
    }
}

/// True if the opening tag carries exactly the class `name` (multi-class tolerant).
pub fn tag_has_class(block: &str, name: &str) -> bool {
    let name = to_lower(name);
    match tag_class(block) {
        Some(cls) => cls.split_ascii_whitespace().any(|c| c == name),
        None => false,
    }
}
