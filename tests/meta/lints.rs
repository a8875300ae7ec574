//! Checks crate-level lint attributes stay compatible with dependency macros

#[cfg(test)]
mod tests {
    use std::fs;

    // Tests the crate root denies unsafe code without forbidding it, since
    // ndarray's `s!` expands to a local `allow(unsafe_code)`
    #[test]
    fn test_crate_root_does_not_forbid_unsafe_code() {
        let root = fs::read_to_string("src/lib.rs").unwrap();

        assert!(root.contains("#![deny(unsafe_code)]"));
        assert!(!root.contains("forbid(unsafe_code)"));
    }
}
