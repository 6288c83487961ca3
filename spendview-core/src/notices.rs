use spendview_state::Notice;

/// The index of the notice to show after `current`, wrapping around.
///
/// Returns 0 when there are no notices.
pub fn advance_notice_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// The notices that rotate through the tab strip.
pub fn tab_notices(notices: &[Notice]) -> Vec<Notice> {
    notices.iter().filter(|n| n.is_tab_notice()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: &str, severity: u8) -> Notice {
        Notice {
            id: id.to_string(),
            title: id.to_string(),
            message: String::new(),
            severity,
        }
    }

    #[test]
    fn test_advance_notice_index() {
        assert_eq!(advance_notice_index(0, 3), 1);
        assert_eq!(advance_notice_index(1, 3), 2);
        assert_eq!(advance_notice_index(2, 3), 0);
        assert_eq!(advance_notice_index(0, 1), 0);
        assert_eq!(advance_notice_index(5, 0), 0);
        // An index left over from a longer list still lands in range.
        assert_eq!(advance_notice_index(7, 3), 2);
    }

    #[test]
    fn test_tab_notices() {
        let notices = [notice("info", 0), notice("due", 1), notice("over", 3)];
        let ids: Vec<_> = tab_notices(&notices).into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["due", "over"]);
    }
}
