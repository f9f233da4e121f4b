//! Scripted demo input — a fixed timeline of key events standing in
//! for the windowing collaborator's key subscriptions.

/// One key edge at a given tick.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub tick: u64,
    pub key: &'static str,
    pub pressed: bool,
}

const fn down(tick: u64, key: &'static str) -> KeyEvent {
    KeyEvent {
        tick,
        key,
        pressed: true,
    }
}

const fn up(tick: u64, key: &'static str) -> KeyEvent {
    KeyEvent {
        tick,
        key,
        pressed: false,
    }
}

/// A short patrol: thrust toward the planets, sweep the turrets with a
/// few shots and a barrage, then quit.
pub fn demo_flight() -> Vec<KeyEvent> {
    vec![
        down(0, "space"),
        down(60, "a"),
        up(105, "a"),
        down(120, "f"),
        up(120, "f"),
        down(150, "f"),
        up(150, "f"),
        down(200, "w"),
        up(230, "w"),
        down(240, "shift-f"),
        up(240, "shift-f"),
        up(400, "space"),
        // Let the last missiles finish their intervals before exiting.
        down(520, "escape"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_tick_ordered() {
        let script = demo_flight();
        for pair in script.windows(2) {
            assert!(pair[0].tick <= pair[1].tick);
        }
    }

    #[test]
    fn test_script_releases_every_held_key() {
        let script = demo_flight();
        for event in script.iter().filter(|event| event.pressed) {
            if matches!(event.key, "escape" | "f" | "shift-f") {
                continue;
            }
            assert!(
                script
                    .iter()
                    .any(|other| other.key == event.key && !other.pressed),
                "held key '{}' is never released",
                event.key
            );
        }
    }

    #[test]
    fn test_script_ends_with_quit() {
        let script = demo_flight();
        let last = script.last().unwrap();
        assert_eq!(last.key, "escape");
        assert!(last.pressed);
    }
}
