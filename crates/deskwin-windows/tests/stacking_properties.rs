//! Property tests for the window table invariants.
//!
//! Random operation sequences over a small identity set, including keys
//! outside the set, checked after every step.

use deskwin_common::{WindowError, WindowKey};
use deskwin_windows::WindowManager;
use proptest::prelude::*;

const KEYS: [&str; 4] = ["finder", "terminal", "safari", "photos"];
const FLOOR: u64 = 1000;

#[derive(Debug, Clone)]
enum Op {
    Open(usize, Option<u8>),
    Close(usize),
    Focus(usize),
}

/// Indices past `KEYS` address an identity that was never configured.
fn key_name(i: usize) -> String {
    KEYS.get(i).map_or_else(|| format!("ghost-{i}"), |k| (*k).to_string())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let idx = 0..KEYS.len() + 2;
    prop_oneof![
        (idx.clone(), proptest::option::of(any::<u8>())).prop_map(|(i, d)| Op::Open(i, d)),
        idx.clone().prop_map(Op::Close),
        idx.prop_map(Op::Focus),
    ]
}

fn manager() -> WindowManager<u8> {
    WindowManager::new(KEYS.map(WindowKey::from), FLOOR, FLOOR + 1).unwrap()
}

proptest! {
    #[test]
    fn key_set_never_changes(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut mgr = manager();
        let initial: Vec<WindowKey> = mgr.keys().cloned().collect();

        for op in ops {
            let _ = match op {
                Op::Open(i, d) => mgr.open(&key_name(i), d).map(|_| ()),
                Op::Close(i) => mgr.close(&key_name(i)).map(|_| ()),
                Op::Focus(i) => mgr.focus(&key_name(i)).map(|_| ()),
            };
            let now: Vec<WindowKey> = mgr.keys().cloned().collect();
            prop_assert_eq!(&now, &initial);
            prop_assert_eq!(mgr.snapshot().len(), KEYS.len());
        }
    }

    #[test]
    fn issued_values_strictly_increase(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut mgr = manager();
        let mut last_issued = FLOOR;

        for op in ops {
            let issued = match op {
                Op::Open(i, d) => mgr.open(&key_name(i), d).ok(),
                Op::Focus(i) => mgr.focus(&key_name(i)).ok(),
                Op::Close(i) => {
                    let _ = mgr.close(&key_name(i));
                    None
                }
            };
            if let Some(z) = issued {
                prop_assert!(z > last_issued);
                last_issued = z;
            }
            prop_assert!(mgr.next_z_index().is_some_and(|next| next > last_issued));
        }
    }

    #[test]
    fn open_windows_have_distinct_values_above_floor(
        ops in proptest::collection::vec(op_strategy(), 0..64)
    ) {
        let mut mgr = manager();
        for op in ops {
            let _ = match op {
                Op::Open(i, d) => mgr.open(&key_name(i), d).map(|_| ()),
                Op::Close(i) => mgr.close(&key_name(i)).map(|_| ()),
                Op::Focus(i) => mgr.focus(&key_name(i)).map(|_| ()),
            };
        }

        let snap = mgr.snapshot();
        let mut open_z: Vec<u64> = Vec::new();
        for (_, record) in snap.iter() {
            if record.is_open() {
                prop_assert!(record.z_index() > FLOOR);
                open_z.push(record.z_index());
            } else {
                prop_assert_eq!(record.z_index(), FLOOR);
                prop_assert!(record.data().is_none());
            }
        }
        let count = open_z.len();
        open_z.sort_unstable();
        open_z.dedup();
        prop_assert_eq!(open_z.len(), count);
    }

    #[test]
    fn rejected_calls_leave_the_table_alone(
        ops in proptest::collection::vec(op_strategy(), 0..32),
        ghost in 0usize..8,
    ) {
        let mut mgr = manager();
        for op in ops {
            let _ = match op {
                Op::Open(i, d) => mgr.open(&key_name(i), d).map(|_| ()),
                Op::Close(i) => mgr.close(&key_name(i)).map(|_| ()),
                Op::Focus(i) => mgr.focus(&key_name(i)).map(|_| ()),
            };
        }

        let before = mgr.snapshot();
        let name = format!("ghost-{ghost}");
        prop_assert_eq!(
            mgr.open(&name, Some(1)).unwrap_err(),
            WindowError::InvalidIdentity(WindowKey::from(name.as_str()))
        );
        let after = mgr.snapshot();
        prop_assert_eq!(after.revision(), before.revision());
        prop_assert_eq!(after.next_z_index(), before.next_z_index());
        for ((_, a), (_, b)) in before.iter().zip(after.iter()) {
            prop_assert_eq!(a, b);
        }
    }
}
