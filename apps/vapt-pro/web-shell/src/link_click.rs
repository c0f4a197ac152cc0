/// What the shell needs to know about a click before routing it itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LinkClick {
    pub(crate) default_prevented: bool,
    pub(crate) button: i16,
    pub(crate) meta_key: bool,
    pub(crate) ctrl_key: bool,
    pub(crate) shift_key: bool,
    pub(crate) alt_key: bool,
}

impl LinkClick {
    /// Plain primary-button clicks nobody else handled. Modified or
    /// middle clicks stay with the browser (new tab, new window, download).
    pub(crate) fn should_route(&self) -> bool {
        !self.default_prevented
            && self.button == 0
            && !self.meta_key
            && !self.ctrl_key
            && !self.shift_key
            && !self.alt_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_primary_click_is_routed() {
        assert!(LinkClick::default().should_route());
    }

    #[test]
    fn modified_clicks_are_left_to_the_browser() {
        let modified = [
            LinkClick { meta_key: true, ..LinkClick::default() },
            LinkClick { ctrl_key: true, ..LinkClick::default() },
            LinkClick { shift_key: true, ..LinkClick::default() },
            LinkClick { alt_key: true, ..LinkClick::default() },
        ];
        for click in modified {
            assert!(!click.should_route(), "{click:?}");
        }
    }

    #[test]
    fn middle_click_and_handled_events_are_skipped() {
        let middle = LinkClick { button: 1, ..LinkClick::default() };
        let handled = LinkClick { default_prevented: true, ..LinkClick::default() };
        assert!(!middle.should_route());
        assert!(!handled.should_route());
    }
}
