//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Deskwin Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[windows]
# Every window slot. Fixed for the lifetime of the process.
identities = ["finder", "contact", "resume", "safari", "photos", "terminal", "txtfile", "imgfile"]
# z-index of every closed window
floor = 1000
# First z-index handed out, must be greater than floor (default: floor + 1)
# seed = 1001

[events]
# capacity = 64          # 1-4096, snapshots buffered per observer

[logging]
# level = "info"         # trace, debug, info, warn, error

[[dock.apps]]
id = "finder"
name = "Portfolio"
icon = "finder.png"
can_open = true

[[dock.apps]]
id = "safari"
name = "Articles"
icon = "safari.png"
can_open = true

[[dock.apps]]
id = "photos"
name = "Gallery"
icon = "photos.png"
can_open = true

[[dock.apps]]
id = "contact"
name = "Contact"
icon = "contact.png"
can_open = true

[[dock.apps]]
id = "terminal"
name = "Skills"
icon = "terminal.png"
can_open = true

[[dock.apps]]
id = "trash"
name = "Archive"
icon = "trash.png"
can_open = false
"##
}
