use std::fmt;
use std::sync::Arc;

use deskwin_common::{WindowKey, ZIndex};

/// State of one window slot.
///
/// Every configured identity has exactly one record for the lifetime of
/// the manager. A closed record always sits at the floor z-index with no
/// payload.
pub struct WindowRecord<D> {
    pub(crate) is_open: bool,
    pub(crate) z_index: ZIndex,
    pub(crate) data: Option<Arc<D>>,
}

impl<D> WindowRecord<D> {
    pub(crate) fn closed(floor: ZIndex) -> Self {
        Self {
            is_open: false,
            z_index: floor,
            data: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn z_index(&self) -> ZIndex {
        self.z_index
    }

    /// Payload attached by the most recent `open` that supplied one.
    pub fn data(&self) -> Option<&D> {
        self.data.as_deref()
    }

    /// Shared handle to the payload, for callers that outlive the borrow.
    pub fn data_arc(&self) -> Option<Arc<D>> {
        self.data.clone()
    }
}

// Manual impls so payloads need not be `Clone`; snapshots share them.
impl<D> Clone for WindowRecord<D> {
    fn clone(&self) -> Self {
        Self {
            is_open: self.is_open,
            z_index: self.z_index,
            data: self.data.clone(),
        }
    }
}

impl<D: PartialEq> PartialEq for WindowRecord<D> {
    fn eq(&self, other: &Self) -> bool {
        self.is_open == other.is_open && self.z_index == other.z_index && self.data == other.data
    }
}

impl<D: fmt::Debug> fmt::Debug for WindowRecord<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowRecord")
            .field("is_open", &self.is_open)
            .field("z_index", &self.z_index)
            .field("data", &self.data)
            .finish()
    }
}

/// Open keys ordered bottom to top.
pub(crate) fn stacking_order<'a, D: 'a>(
    records: impl Iterator<Item = &'a (WindowKey, WindowRecord<D>)>,
) -> Vec<&'a WindowKey> {
    let mut open: Vec<_> = records.filter(|(_, r)| r.is_open).collect();
    open.sort_by_key(|(_, r)| r.z_index);
    open.into_iter().map(|(key, _)| key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_record_sits_at_floor() {
        let record: WindowRecord<String> = WindowRecord::closed(1000);
        assert!(!record.is_open());
        assert_eq!(record.z_index(), 1000);
        assert!(record.data().is_none());
    }

    #[test]
    fn clone_shares_payload() {
        let record = WindowRecord {
            is_open: true,
            z_index: 3,
            data: Some(Arc::new(String::from("notes.txt"))),
        };
        let copy = record.clone();
        assert_eq!(record, copy);
        let (a, b) = (record.data_arc().unwrap(), copy.data_arc().unwrap());
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn stacking_order_skips_closed_and_sorts() {
        let table = vec![
            (WindowKey::from("a"), WindowRecord::<()> { is_open: true, z_index: 9, data: None }),
            (WindowKey::from("b"), WindowRecord::closed(0)),
            (WindowKey::from("c"), WindowRecord { is_open: true, z_index: 4, data: None }),
        ];
        let order = stacking_order(table.iter());
        assert_eq!(order, vec![&WindowKey::from("c"), &WindowKey::from("a")]);
    }
}
