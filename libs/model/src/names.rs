//! Name types for roster members and cleaning areas.
//!
//! Names are the identity: two members are the same member exactly when
//! their canonical names are equal. The types are distinct so an area
//! name can never be used where a member name is expected.

use crate::define_name;

define_name!(MemberName);
define_name!(AreaName);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameError;

    #[test]
    fn test_member_name_roundtrip() {
        let name = MemberName::parse("Alice").unwrap();
        let s = name.to_string();
        let parsed: MemberName = s.parse().unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = MemberName::parse("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(MemberName::parse(""), Err(NameError::Empty));
        assert_eq!(MemberName::parse("   "), Err(NameError::Empty));
    }

    #[test]
    fn test_over_long_name_rejected() {
        let long = "x".repeat(MemberName::MAX_LEN + 1);
        assert!(matches!(
            MemberName::parse(&long),
            Err(NameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        assert_eq!(
            AreaName::parse("Floor\nWindow"),
            Err(NameError::ControlCharacter)
        );
    }

    #[test]
    fn test_name_json_roundtrip() {
        let name = AreaName::parse("Window cleaning").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Window cleaning\"");
        let parsed: AreaName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn test_invalid_name_rejected_on_deserialize() {
        let result: Result<MemberName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
