//! The head synchronizer.
//!
//! [`HeadSync`] owns a document's [`Head`] and is the only code that mutates
//! it. Syncing a descriptor makes the head contain exactly the tags the
//! descriptor specifies:
//!
//! - keyed tags are created when absent and overwritten when different
//! - keys written by a previous sync and absent now are removed
//! - hreflang alternates are replaced as a set
//! - elements the synchronizer never wrote are left alone
//!
//! Syncing the same descriptor twice reports no changes the second time.

use super::{Head, HeadElement, SYNC_MARKER, TagKey};
use crate::seo::descriptor::MetadataDescriptor;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Changes applied by one [`HeadSync::sync`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Single writer for a document head.
#[derive(Debug, Default)]
pub struct HeadSync {
    head: Option<Head>,
    /// Keys written by the last sync.
    owned: FxHashSet<TagKey>,
}

impl HeadSync {
    /// A synchronizer with no document. Every sync is a no-op.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Take ownership of a head.
    ///
    /// Keyed elements carrying the sync marker (left by an earlier sync of
    /// the same document) are treated as owned, so they are superseded too.
    pub fn attach(head: Head) -> Self {
        let owned = head
            .slots
            .iter()
            .flatten()
            .filter(|slot| slot.element.has(SYNC_MARKER))
            .filter_map(|slot| slot.key.clone())
            .collect();
        Self {
            head: Some(head),
            owned,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.head.is_some()
    }

    pub fn head(&self) -> Option<&Head> {
        self.head.as_ref()
    }

    pub fn into_head(self) -> Option<Head> {
        self.head
    }

    /// Bring the head in line with `descriptor`.
    pub fn sync(&mut self, descriptor: &MetadataDescriptor) -> SyncReport {
        let Some(head) = self.head.as_mut() else {
            return SyncReport::default();
        };
        let mut report = SyncReport::default();

        if head.set_html_lang(descriptor.html_lang()) {
            report.updated += 1;
        }

        let mut owned = FxHashSet::default();
        for target in descriptor.elements() {
            let Some(key) = target.key() else { continue };
            match head.lookup(&key) {
                Some(id) => {
                    if head.update(id, &target) {
                        report.updated += 1;
                    }
                }
                None => {
                    head.insert(target);
                    report.created += 1;
                }
            }
            owned.insert(key);
        }

        for stale in self.owned.difference(&owned) {
            if head.remove_key(stale) {
                report.removed += 1;
            }
        }
        self.owned = owned;

        sync_alternates(head, descriptor.alternate_elements(), &mut report);
        report
    }
}

/// Replace every hreflang link unless the current set already matches.
fn sync_alternates(head: &mut Head, targets: Vec<HeadElement>, report: &mut SyncReport) {
    let current: Vec<(&str, &str)> = head
        .alternates()
        .map(|el| (el.get("hreflang").unwrap_or_default(), el.get("href").unwrap_or_default()))
        .collect();
    let wanted: Vec<(&str, &str)> = targets
        .iter()
        .map(|el| (el.get("hreflang").unwrap_or_default(), el.get("href").unwrap_or_default()))
        .collect();
    if current == wanted {
        return;
    }

    report.removed += head.remove_alternates();
    for target in targets {
        head.insert(target);
        report.created += 1;
    }
}
