//! Tests for generator defaults and the case policy

#[cfg(test)]
mod tests {
    use crossgrid::io::configuration::{
        BLANK_DISPLAY, CasePolicy, DEFAULT_BEST_OF, DEFAULT_MAX_ATTEMPTS, GRID_SIZE_FACTOR,
        INTERRUPT_FREQUENCY, MISSING_CLUE, WORD_LIST_SEPARATOR,
    };

    // Tests defaults that other modules rely on
    // Verified by setting the size factor to one
    #[test]
    fn test_defaults_are_usable() {
        assert_eq!(GRID_SIZE_FACTOR, 2);
        assert!(DEFAULT_MAX_ATTEMPTS > 0);
        assert_eq!(DEFAULT_BEST_OF, 1);
        assert!(INTERRUPT_FREQUENCY.is_power_of_two());
    }

    // Tests output constants match the preview and list formats
    // Verified by changing the blank marker to a space
    #[test]
    fn test_output_constants() {
        assert_eq!(BLANK_DISPLAY, '.');
        assert_eq!(WORD_LIST_SEPARATOR, "...");
        assert!(!MISSING_CLUE.is_empty());
    }

    // Tests preserve leaves words untouched and upper folds them
    // Verified by swapping the two match arms
    #[test]
    fn test_case_policy_apply() {
        assert_eq!(CasePolicy::default(), CasePolicy::Preserve);
        assert_eq!(CasePolicy::Preserve.apply("Straße"), "Straße");
        assert_eq!(CasePolicy::Upper.apply("Straße"), "STRASSE");
        assert_eq!(CasePolicy::Upper.apply("éclair"), "ÉCLAIR");
    }
}
