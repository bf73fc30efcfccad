//! Tests for the core type definitions in radiofig-common.
//!
//! This test suite covers:
//! - Newtype wrappers implementing expected traits (Display, Debug, Serialize, Deserialize)
//! - Color parsing accepting the documented forms and rejecting the rest

use proptest::prelude::*;
use radiofig_common::types::*;
use std::collections::HashMap;

#[cfg(test)]
mod newtype_trait_tests {
    use super::*;

    #[test]
    fn test_category_implements_expected_traits() {
        let category = Category::from("03_circuiti");

        assert_eq!(format!("{:?}", category), "Category(\"03_circuiti\")");
        assert_eq!(format!("{}", category), "03_circuiti");

        let cloned = category.clone();
        assert_eq!(category, cloned);
        assert_ne!(category, Category::from("09_disturbi"));

        let mut map = HashMap::new();
        map.insert(category.clone(), "circuits");
        assert_eq!(map.get(&category), Some(&"circuits"));
    }

    #[test]
    fn test_category_serialization() {
        let category = Category::new(Category::PROPAGAZIONE);

        let serialized = serde_json::to_string(&category).unwrap();
        assert_eq!(serialized, "\"07_propagazione\"");

        let deserialized: Category = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, category);
    }

    #[test]
    fn test_category_as_path() {
        let category = Category::from("a/b");
        let path: &std::path::Path = category.as_ref();
        assert_eq!(path.components().count(), 2);
    }

    #[test]
    fn test_rgb_implements_expected_traits() {
        let color = Rgb(0xfe, 0xf0, 0x8a);

        assert_eq!(format!("{:?}", color), "Rgb(254, 240, 138)");
        assert_eq!(format!("{}", color), "#fef08a");

        let copied = color;
        assert_eq!(copied, color);

        let parsed: Rgb = "#fef08a".parse().unwrap();
        assert_eq!(parsed, color);
    }
}

#[cfg(test)]
mod color_parsing_tests {
    use super::*;

    #[test]
    fn test_named_colors_are_case_insensitive() {
        assert_eq!(Rgb::parse("WHITE").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::parse("Black").unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_invalid_color_reports_validation_error() {
        let err = Rgb::parse("mauve").unwrap_err();
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("mauve"));
    }
}

#[cfg(test)]
mod property_based_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_rgb_hex_formatting_parses_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Rgb(r, g, b);
            prop_assert_eq!(Rgb::parse(&color.to_hex()).unwrap(), color);
        }

        #[test]
        fn test_category_display_is_label(label in "[a-z0-9_]{1,24}") {
            prop_assert_eq!(Category::from(label.as_str()).to_string(), label);
        }
    }
}
