//! The two demonstration operations exposed over HTTP.
//!
//! Both are deterministic and side-effect-free; anything fallible (type
//! coercion of query parameters) happens at the HTTP boundary before these
//! are reached.

/// Add one to `number`.
///
/// Total for every `i64`; `i64::MAX` wraps rather than panicking.
pub fn combine_numbers(number: i64) -> i64 {
    number.wrapping_add(1)
}

/// Join a first and last name with a single space.
pub fn combine_names(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_numbers_adds_one() {
        assert_eq!(combine_numbers(5), 6);
        assert_eq!(combine_numbers(0), 1);
        assert_eq!(combine_numbers(-1), 0);
    }

    #[test]
    fn combine_numbers_wraps_at_max() {
        assert_eq!(combine_numbers(i64::MAX), i64::MIN);
    }

    #[test]
    fn combine_names_joins_with_single_space() {
        assert_eq!(combine_names("Jane", "Doe"), "Jane Doe");
    }

    #[test]
    fn combine_names_keeps_empty_parts() {
        assert_eq!(combine_names("", "Doe"), " Doe");
        assert_eq!(combine_names("Jane", ""), "Jane ");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the transformation is exactly "add one".
            #[test]
            fn adds_exactly_one(n in i64::MIN..i64::MAX) {
                prop_assert_eq!(combine_numbers(n), n + 1);
            }

            /// Property: output is the two inputs with one space between.
            #[test]
            fn full_name_is_parts_with_one_separator(
                first in "[A-Za-z]{1,20}",
                last in "[A-Za-z]{1,20}"
            ) {
                let full = combine_names(&first, &last);
                prop_assert_eq!(full.len(), first.len() + 1 + last.len());
                let (f, rest) = full.split_at(first.len());
                prop_assert_eq!(f, &first);
                prop_assert_eq!(rest, &format!(" {last}"));
            }
        }
    }
}
