//! Document-wide block identity allocation.

use std::collections::{BTreeMap, HashSet};

use super::document::Block;

const ID_PREFIX: &str = "block";

/// Assign a unique identity to every block across `content` and all zones.
///
/// Existing ids are kept on first sight; absent, blank, or already-taken ids
/// are replaced with a synthesized `block-<type>-<n>` id drawn from a single
/// counter. Synthesized ids are checked against every id present anywhere in
/// the document, so they cannot collide with an existing id that has not
/// been visited yet. Running this twice over the same document changes
/// nothing.
pub fn assign_block_ids(content: &mut [Block], zones: &mut BTreeMap<String, Vec<Block>>) {
    let mut reserved: HashSet<String> = HashSet::new();
    for block in content.iter().chain(zones.values().flatten()) {
        if let Some(id) = block.id() {
            reserved.insert(id.to_string());
        }
    }

    let mut used: HashSet<String> = HashSet::new();
    let mut counter: u64 = 0;

    let mut visit = |block: &mut Block| {
        let existing = block.id().map(str::to_owned);
        match existing {
            Some(id) if !used.contains(&id) => {
                used.insert(id);
            }
            _ => {
                let slug = slugify(block.block_type.as_str());
                let id = next_free_id(&slug, &mut counter, &reserved, &used);
                used.insert(id.clone());
                block.set_id(id);
            }
        }
    };

    for block in content.iter_mut() {
        visit(block);
    }
    for blocks in zones.values_mut() {
        for block in blocks.iter_mut() {
            visit(block);
        }
    }
}

/// The next synthesized id colliding with neither an id present elsewhere in
/// the document nor one already handed out.
fn next_free_id(
    slug: &str,
    counter: &mut u64,
    reserved: &HashSet<String>,
    used: &HashSet<String>,
) -> String {
    loop {
        *counter += 1;
        let candidate = format!("{ID_PREFIX}-{slug}-{counter}");
        if !reserved.contains(&candidate) && !used.contains(&candidate) {
            return candidate;
        }
    }
}

/// Reduce a type identifier to a lowercase alphanumeric slug with single
/// dashes.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("item");
    }
    slug
}
