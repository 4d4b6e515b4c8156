// Binary search over sorted desugaring descriptors.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Lookup of methods, fields and classes that D8/R8 desugars.
///
/// Descriptors are lines such as `java/lang/Character#compare(CC)I` (a
/// method, with or without return type), `java/nio/charset/StandardCharsets#UTF_8`
/// (a field) or `java/util/Optional` (a whole class, inner classes included). Lookups
/// treat `/`, `$` and `.` as the same separator, so `java.util.Map.Entry`
/// finds `java/util/Map$Entry`.
#[derive(Debug, Clone, Default)]
pub struct DesugaredMethodLookup {
    descriptors: Vec<String>,
    names: HashSet<String>,
}

impl DesugaredMethodLookup {
    /// Builds a lookup from descriptor lines, sorting and deduplicating them.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut descriptors: Vec<String> = lines.into_iter().map(Into::into).collect();
        descriptors.sort_unstable();
        descriptors.dedup();
        let names = extract_names(&descriptors);
        Self { descriptors, names }
    }

    pub fn descriptors(&self) -> &[String] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// True if some member with this name is desugared in any class.
    pub fn is_desugared_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// `desc` is the method descriptor, e.g. `(CC)`; a return type after
    /// the parameter list is ignored.
    pub fn is_desugared_method(&self, owner: &str, name: &str, desc: &str) -> bool {
        let desc = match desc.rfind(')') {
            Some(end) => &desc[..=end],
            None => desc,
        };
        self.contains(owner, name, desc)
    }

    pub fn is_desugared_field(&self, owner: &str, name: &str) -> bool {
        self.contains(owner, name, "")
    }

    pub fn is_desugared_class(&self, owner: &str) -> bool {
        self.contains(owner, "", "")
    }

    /// Like [`is_desugared_method`](Self::is_desugared_method), also trying
    /// each of `super_classes` when the member name is desugared anywhere.
    pub fn is_desugared_method_in_hierarchy(
        &self,
        owner: &str,
        super_classes: &[&str],
        name: &str,
        desc: &str,
    ) -> bool {
        self.is_desugared_method(owner, name, desc)
            || (self.is_desugared_name(name)
                && super_classes
                    .iter()
                    .any(|super_class| self.is_desugared_method(super_class, name, desc)))
    }

    pub fn is_desugared_field_in_hierarchy(&self, owner: &str, super_classes: &[&str], name: &str) -> bool {
        self.is_desugared_field(owner, name)
            || (self.is_desugared_name(name)
                && super_classes
                    .iter()
                    .any(|super_class| self.is_desugared_field(super_class, name)))
    }

    fn contains(&self, owner: &str, name: &str, desc: &str) -> bool {
        self.descriptors
            .binary_search_by(|probe| compare(owner, name, desc, probe))
            .is_ok()
    }
}

/// Member names of all descriptors that have one.
fn extract_names(descriptors: &[String]) -> HashSet<String> {
    descriptors
        .iter()
        .filter_map(|line| {
            let (_, member) = line.split_once('#')?;
            let name = member.split('(').next().unwrap_or(member);
            Some(name.to_string())
        })
        .collect()
}

fn is_symbol_separator(c: u8) -> bool {
    c == b'/' || c == b'$' || c == b'.'
}

/// Yields `owner`, then `#`, then `name`, then `desc`, then NUL forever.
struct KeyCursor<'a> {
    owner: &'a [u8],
    name: &'a [u8],
    desc: &'a [u8],
    owner_index: usize,
    had_separator: bool,
    name_index: usize,
    desc_index: usize,
}

impl<'a> KeyCursor<'a> {
    fn new(owner: &'a str, name: &'a str, desc: &'a str) -> Self {
        Self {
            owner: owner.as_bytes(),
            name: name.as_bytes(),
            desc: desc.as_bytes(),
            owner_index: 0,
            had_separator: false,
            name_index: 0,
            desc_index: 0,
        }
    }

    fn next_byte(&mut self) -> u8 {
        if self.owner_index < self.owner.len() {
            self.owner_index += 1;
            self.owner[self.owner_index - 1]
        } else if !self.had_separator {
            self.had_separator = true;
            b'#'
        } else if self.name_index < self.name.len() {
            self.name_index += 1;
            self.name[self.name_index - 1]
        } else if self.desc_index < self.desc.len() {
            self.desc_index += 1;
            self.desc[self.desc_index - 1]
        } else {
            0
        }
    }
}

/// Orders the descriptor line `combined` relative to the key formed by
/// `owner#name desc`.
///
/// Return types in `combined` are ignored. A line that ends early matches
/// when it stopped at a boundary of the key: after the class, after the
/// member name, or after the full descriptor. A field-style line
/// (`Owner#name`, no parentheses) never matches a method key.
pub fn compare(owner: &str, name: &str, desc: &str, combined: &str) -> Ordering {
    let bytes = combined.as_bytes();
    let last_paren = bytes.iter().rposition(|&b| b == b')');
    let combined_len = last_paren.map_or(bytes.len(), |p| p + 1);
    if combined_len == 0 {
        return Ordering::Less;
    }

    let mut key = KeyCursor::new(owner, name, desc);
    for &d in &bytes[..combined_len] {
        let c = key.next_byte();
        if c != d && !(is_symbol_separator(c) && is_symbol_separator(d)) {
            return d.cmp(&c);
        }
    }

    if last_paren.is_none() && !desc.is_empty() && bytes.contains(&b'#') {
        Ordering::Greater
    } else if key.name_index == 0
        || (key.name_index == key.name.len() && key.desc_index == 0)
        || key.desc_index == key.desc.len()
    {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}

/// True for owners (qualified with dots) in packages that library
/// desugaring in a consuming module could still cover.
pub fn can_be_desugared_later(owner: Option<&str>) -> bool {
    let Some(owner) = owner else {
        return false;
    };
    debug_assert!(!owner.contains('/'));
    owner.starts_with("java.") || owner.starts_with("android.") || owner.starts_with("sun.")
}
