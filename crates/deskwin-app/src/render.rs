//! Plain-text view of a window snapshot.

use std::fmt::Write;

use deskwin_common::Event;
use deskwin_windows::WindowSnapshot;

fn describe(event: &Event) -> String {
    match event {
        Event::Initialized => "initial state".into(),
        Event::WindowOpened { key, z_index } => format!("opened {key} at z={z_index}"),
        Event::WindowClosed(key) => format!("closed {key}"),
        Event::WindowFocused { key, z_index } => format!("focused {key} at z={z_index}"),
    }
}

/// Open windows top to bottom, then closed ones in configuration order.
pub fn render(snapshot: &WindowSnapshot<String>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "revision {} ({})",
        snapshot.revision(),
        describe(snapshot.cause())
    );

    for key in snapshot.stacking_order().into_iter().rev() {
        let Some(record) = snapshot.get(key.as_str()) else {
            continue;
        };
        let _ = write!(out, "  {:<10} open    z={}", key.as_str(), record.z_index());
        if let Some(data) = record.data() {
            let _ = write!(out, "  data={data}");
        }
        out.push('\n');
    }

    for (key, record) in snapshot.iter() {
        if !record.is_open() {
            let _ = writeln!(out, "  {:<10} closed", key.as_str());
        }
    }
    out
}
